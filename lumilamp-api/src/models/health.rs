use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceHealth {
    /// Internal device temperature in Celsius, `null` when the sensor
    /// returned no usable number
    pub current_temp_c: Option<f32>,
    /// Temperature above which the failsafe engages
    pub max_safe_temp_c: f32,
    /// Whether the current temperature exceeds the safe maximum
    pub is_overheated: bool,
}

impl DeviceHealth {
    pub fn new(reading_c: f32, max_safe_temp_c: f32) -> Self {
        let current_temp_c = reading_c.is_finite().then_some(reading_c);

        Self {
            current_temp_c,
            max_safe_temp_c,
            is_overheated: current_temp_c.is_some_and(|temp| temp > max_safe_temp_c),
        }
    }
}
