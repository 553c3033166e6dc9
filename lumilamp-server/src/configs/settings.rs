use std::env;

use config::{Config, ConfigError, Environment, File};
use lumilamp_analyser::Policy;
use serde::{Deserialize, Serialize};
use time::UtcOffset;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub base_url: String,
    /// WeatherAPI key; live weather is disabled without one
    pub api_key: Option<String>,
    pub location: String,
    pub timeout_secs: u64,
    /// Offset of the lamp's local time from UTC
    pub utc_offset_hours: i8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Range of the simulated device temperature in Celsius
    pub min_temp_c: f32,
    pub max_temp_c: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Server,
    pub logger: Logger,
    pub weather: Weather,
    pub health: Health,
    #[serde(default)]
    pub policy: Policy,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let settings: Settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::with_prefix("LAMP").separator("__").try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy
            .validate()
            .map_err(|e| ConfigError::Message(e.to_string()))?;

        self.weather.utc_offset()?;

        let Health { min_temp_c, max_temp_c } = self.health;
        if !(min_temp_c.is_finite() && max_temp_c.is_finite() && min_temp_c < max_temp_c) {
            return Err(ConfigError::Message(format!(
                "Invalid simulated temperature range {min_temp_c}..{max_temp_c}"
            )));
        }

        Ok(())
    }
}

impl Weather {
    pub fn utc_offset(&self) -> Result<UtcOffset, ConfigError> {
        UtcOffset::from_hms(self.utc_offset_hours, 0, 0)
            .map_err(|e| ConfigError::Message(format!("Invalid UTC offset: {e}")))
    }

    /// Present and non-blank API key.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().map(str::trim).filter(|key| !key.is_empty())
    }
}
