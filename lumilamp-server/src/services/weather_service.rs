use std::time::Duration;

use async_trait::async_trait;
use lumilamp_api::models::{Astronomy, WeatherSnapshot, WeatherSource};
use serde::Deserialize;
use time::{OffsetDateTime, UtcOffset};

use crate::configs::Weather;
use crate::errors::WeatherError;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError>;
}

/// Used when no API key is configured; every request runs on the fallback snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineWeather;

#[async_trait]
impl WeatherProvider for OfflineWeather {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        Err(WeatherError::Disabled)
    }
}

/// Current conditions and today's sun times from WeatherAPI.com.
pub struct WeatherApiService {
    http_client: reqwest::Client,
    url: String,
    api_key: String,
    location: String,
    /// Offset of the lamp's local time, used for the day of the year
    utc_offset: UtcOffset,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: CurrentWeather,
    forecast: Forecast,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    last_updated_epoch: i64,
    temp_c: f32,
    humidity: f32,
    precip_mm: f32,
    cloud: f32,
    vis_km: f32,
    uv: f32,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ForecastDay {
    astro: Astro,
}

#[derive(Debug, Deserialize)]
struct Astro {
    sunrise: String,
    sunset: String,
}

impl WeatherApiService {
    pub fn new(weather: &Weather, api_key: &str, utc_offset: UtcOffset) -> Result<Self, WeatherError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(weather.timeout_secs))
            .connect_timeout(Duration::from_secs(weather.timeout_secs.min(5)))
            .build()?;

        Ok(Self {
            http_client,
            url: format!("{}/forecast.json", weather.base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            location: weather.location.clone(),
            utc_offset,
        })
    }

    fn snapshot_from(&self, response: ForecastResponse) -> Result<WeatherSnapshot, WeatherError> {
        let current = response.current;
        let astro = response
            .forecast
            .forecastday
            .into_iter()
            .next()
            .map(|day| day.astro)
            .ok_or_else(|| WeatherError::Malformed("missing forecast day".to_string()))?;

        let updated = OffsetDateTime::from_unix_timestamp(current.last_updated_epoch)
            .map_err(|e| WeatherError::Malformed(format!("bad `last_updated_epoch`: {e}")))?
            .to_offset(self.utc_offset);

        Ok(WeatherSnapshot {
            location: self.location.clone(),
            temp: current.temp_c,
            humidity: current.humidity,
            precip: current.precip_mm,
            cloudcover: current.cloud,
            visibility: current.vis_km.min(WeatherSnapshot::MAX_VISIBILITY_KM),
            uvindex: current.uv,
            day_of_year: updated.ordinal(),
            astronomy: Some(Astronomy {
                sunrise: astro.sunrise,
                sunset: astro.sunset,
            }),
            source: WeatherSource::Live,
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiService {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        let response = self
            .http_client
            .get(&self.url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", self.location.as_str()),
                ("days", "1"),
                ("aqi", "no"),
                ("alerts", "no"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        let forecast: ForecastResponse =
            serde_json::from_slice(&body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

        self.snapshot_from(forecast)
    }
}
