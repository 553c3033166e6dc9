use alloc::string::String;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherSource {
    /// Fetched from the weather provider for this request
    Live,
    /// Substituted default because the provider failed
    Fallback,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    /// Rain, fog or mist
    Adverse,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Astronomy {
    /// Local sunrise, e.g. `07:05 AM`
    pub sunrise: String,
    /// Local sunset, e.g. `07:21 PM`
    pub sunset: String,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// Location the weather was requested for
    pub location: String,
    /// Air temperature in Celsius
    pub temp: f32,
    /// Relative humidity percentage
    pub humidity: f32,
    /// Precipitation in millimetres
    pub precip: f32,
    /// Cloud cover percentage
    pub cloudcover: f32,
    /// Visibility in kilometres, capped at 10
    pub visibility: f32,
    /// UV index
    pub uvindex: f32,
    /// Day of the year (1-366)
    pub day_of_year: u16,
    /// Sunrise and sunset of the current day
    #[serde(default)]
    pub astronomy: Option<Astronomy>,
    pub source: WeatherSource,
}

impl WeatherSnapshot {
    pub const MAX_VISIBILITY_KM: f32 = 10.0;

    /// Default used whenever live weather is missing or malformed: a mild,
    /// dry, cloudless day without astronomy data.
    pub fn fallback(location: impl Into<String>, day_of_year: u16) -> Self {
        Self {
            location: location.into(),
            temp: 25.0,
            humidity: 70.0,
            precip: 0.0,
            cloudcover: 0.0,
            visibility: Self::MAX_VISIBILITY_KM,
            uvindex: 0.0,
            day_of_year,
            astronomy: None,
            source: WeatherSource::Fallback,
        }
    }

    pub fn is_valid(&self) -> bool {
        let finite = [
            self.temp,
            self.humidity,
            self.precip,
            self.cloudcover,
            self.visibility,
            self.uvindex,
        ]
        .iter()
        .all(|value| value.is_finite());

        finite
            && (0.0..=100.0).contains(&self.humidity)
            && (0.0..=100.0).contains(&self.cloudcover)
            && self.precip >= 0.0
            && self.visibility >= 0.0
            && self.uvindex >= 0.0
            && (1..=366).contains(&self.day_of_year)
    }
}
