#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SensorError {
    #[error("Invalid simulated temperature range {min}..{max}")]
    InvalidRange { min: f32, max: f32 },
}
