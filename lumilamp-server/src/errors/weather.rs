#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Live weather is disabled, no API key configured")]
    Disabled,

    #[error("Could not connect to the weather provider: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse weather data: {0}")]
    Malformed(String),
}
