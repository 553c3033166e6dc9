use std::ops::Range;

use rand::Rng;

use crate::errors::SensorError;

pub trait TemperatureSensor: Send + Sync {
    /// Internal device temperature in Celsius.
    fn read_celsius(&self) -> f32;
}

/// Stands in for the hardware sensor of the edge device; draws a uniform
/// temperature so the overheat failsafe fires now and then.
#[derive(Debug, Clone)]
pub struct SimulatedTemperatureSensor {
    range: Range<f32>,
}

impl SimulatedTemperatureSensor {
    pub fn new(min_temp_c: f32, max_temp_c: f32) -> Result<Self, SensorError> {
        let range = min_temp_c..max_temp_c;

        if !(min_temp_c.is_finite() && max_temp_c.is_finite()) || range.is_empty() {
            return Err(SensorError::InvalidRange {
                min: min_temp_c,
                max: max_temp_c,
            });
        }

        Ok(Self { range })
    }
}

impl TemperatureSensor for SimulatedTemperatureSensor {
    fn read_celsius(&self) -> f32 {
        let reading: f32 = rand::rng().random_range(self.range.clone());

        // One decimal, like the real sensor
        (reading * 10.0).round() / 10.0
    }
}
