use alloc::string::String;
use core::fmt;

use serde::{Deserialize, Serialize};

use super::{DeviceHealth, WeatherCondition, WeatherSnapshot, WeatherSource};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLampRequest {
    /// Motion reported by the camera or IR sensor
    pub is_motion_detected: bool,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LampAction {
    Off,
    Dim,
    Full,
}

impl LampAction {
    pub const fn as_str(&self) -> &'static str {
        match self {
            LampAction::Off => "OFF",
            LampAction::Dim => "DIM",
            LampAction::Full => "FULL",
        }
    }
}

impl fmt::Display for LampAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionReason {
    /// Device temperature above the safe maximum
    OverheatFailsafe,
    /// Device temperature reading unusable
    SensorFault,
    /// Night time without motion
    NoMotion,
    /// Night time, motion and clear weather
    MotionDetected,
    /// Night time, motion and rain or fog
    AdverseWeather,
    /// Day time and clear weather
    Daylight,
    /// Day time with rain or fog
    DaylightAdverseWeather,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputsUsed {
    pub is_night_time: bool,
    pub is_motion_detected: bool,
    /// Local wall clock time, `HH:MM`
    pub local_time: String,
    pub location: String,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
    pub weather_condition: WeatherCondition,
    pub weather_source: WeatherSource,
}

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Commanded lamp level
    pub lamp_action: LampAction,
    /// Output level in percent (0-100)
    pub brightness: u8,
    /// Rule that selected the action
    pub reason: ActionReason,
    pub system_health: DeviceHealth,
    pub inputs_used: InputsUsed,
    pub weather_data_for_chart: WeatherSnapshot,
}
