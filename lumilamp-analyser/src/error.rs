#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    #[error("Maximum safe temperature must be a positive number, got {0}")]
    InvalidMaxTemperature(f32),

    #[error("Dim brightness range {min}..={max} must be ordered and within 0..=100")]
    InvalidDimRange { min: u8, max: u8 },

    #[error("Hour {0} is outside of 0..24")]
    InvalidHour(u8),

    #[error("Night must start after it ends, got {start}:00 and {end}:00")]
    InvalidNightWindow { start: u8, end: u8 },

    #[error("Weather threshold `{0}` must be a non-negative number")]
    InvalidWeatherThreshold(&'static str),
}
