pub mod controller;
pub mod daylight;
pub mod error;
pub mod policy;
pub mod weather;

pub use controller::{DecisionInput, LampController};
pub use error::PolicyError;
pub use policy::{BrightnessPolicy, DaylightPolicy, Policy, WeatherPolicy};

pub(crate) fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }

    value.clamp(0.0, 1.0)
}
