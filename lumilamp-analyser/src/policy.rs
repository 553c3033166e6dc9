use serde::{Deserialize, Serialize};

use crate::clamp_unit;
use crate::error::PolicyError;

/// Thresholds driving [`LampController`](crate::LampController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Internal temperature above which the lamp is forced off
    pub max_safe_temp_c: f32,
    pub brightness: BrightnessPolicy,
    pub daylight: DaylightPolicy,
    pub weather: WeatherPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessPolicy {
    /// Dim output for zero illumination need, in percent
    pub dim_min: u8,
    /// Dim output for full illumination need, in percent
    pub dim_max: u8,
}

/// Night window used when sunrise and sunset are unknown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaylightPolicy {
    pub night_start_hour: u8,
    pub night_end_hour: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherPolicy {
    /// Precipitation at or above which it counts as raining
    pub rain_precip_mm: f32,
    /// Visibility below which it counts as foggy
    pub fog_visibility_km: f32,
    /// Humidity at or above which, together with the cloud cover, it counts as misty
    pub mist_humidity: f32,
    pub mist_cloudcover: f32,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            max_safe_temp_c: 55.0,
            brightness: BrightnessPolicy::default(),
            daylight: DaylightPolicy::default(),
            weather: WeatherPolicy::default(),
        }
    }
}

impl Default for BrightnessPolicy {
    fn default() -> Self {
        Self {
            dim_min: 20,
            dim_max: 50,
        }
    }
}

impl Default for DaylightPolicy {
    fn default() -> Self {
        Self {
            night_start_hour: 19,
            night_end_hour: 7,
        }
    }
}

impl Default for WeatherPolicy {
    fn default() -> Self {
        Self {
            rain_precip_mm: 0.5,
            fog_visibility_km: 4.0,
            mist_humidity: 95.0,
            mist_cloudcover: 90.0,
        }
    }
}

impl Policy {
    pub fn validate(&self) -> Result<(), PolicyError> {
        if !self.max_safe_temp_c.is_finite() || self.max_safe_temp_c <= 0.0 {
            return Err(PolicyError::InvalidMaxTemperature(self.max_safe_temp_c));
        }

        self.brightness.validate()?;
        self.daylight.validate()?;
        self.weather.validate()
    }
}

impl BrightnessPolicy {
    fn validate(&self) -> Result<(), PolicyError> {
        if self.dim_min > self.dim_max || self.dim_max > 100 {
            return Err(PolicyError::InvalidDimRange {
                min: self.dim_min,
                max: self.dim_max,
            });
        }

        Ok(())
    }

    /// Maps an illumination need in `0.0..=1.0` onto the dim range.
    pub fn dim_level(&self, need: f32) -> u8 {
        let span = f32::from(self.dim_max.saturating_sub(self.dim_min));
        let level = f32::from(self.dim_min) + clamp_unit(need) * span;

        level.round() as u8
    }
}

impl DaylightPolicy {
    fn validate(&self) -> Result<(), PolicyError> {
        for hour in [self.night_start_hour, self.night_end_hour] {
            if hour >= 24 {
                return Err(PolicyError::InvalidHour(hour));
            }
        }

        if self.night_start_hour <= self.night_end_hour {
            return Err(PolicyError::InvalidNightWindow {
                start: self.night_start_hour,
                end: self.night_end_hour,
            });
        }

        Ok(())
    }
}

impl WeatherPolicy {
    fn validate(&self) -> Result<(), PolicyError> {
        let thresholds = [
            ("rain_precip_mm", self.rain_precip_mm),
            ("fog_visibility_km", self.fog_visibility_km),
            ("mist_humidity", self.mist_humidity),
            ("mist_cloudcover", self.mist_cloudcover),
        ];

        for (name, value) in thresholds {
            if !value.is_finite() || value < 0.0 {
                return Err(PolicyError::InvalidWeatherThreshold(name));
            }
        }

        Ok(())
    }
}
