mod settings;

pub use settings::{Health, Logger, Server, Settings, Weather};
