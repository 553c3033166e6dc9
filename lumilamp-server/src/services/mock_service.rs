use async_trait::async_trait;
use lumilamp_api::models::WeatherSnapshot;
use time::OffsetDateTime;

use super::{Clock, TemperatureSensor, WeatherProvider};
use crate::errors::WeatherError;

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedTemperature(pub f32);

impl TemperatureSensor for FixedTemperature {
    fn read_celsius(&self) -> f32 {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct StaticWeather(pub WeatherSnapshot);

#[async_trait]
impl WeatherProvider for StaticWeather {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        Ok(self.0.clone())
    }
}

/// Provider whose upstream always fails to parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingWeather;

#[async_trait]
impl WeatherProvider for FailingWeather {
    async fn fetch(&self) -> Result<WeatherSnapshot, WeatherError> {
        Err(WeatherError::Malformed("missing key `current`".to_string()))
    }
}

/// Sensor whose driver crashes on every read.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanickingTemperature;

impl TemperatureSensor for PanickingTemperature {
    fn read_celsius(&self) -> f32 {
        panic!("temperature sensor bus fault")
    }
}
