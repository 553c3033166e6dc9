use lumilamp_api::models::{WeatherCondition, WeatherSnapshot};

use crate::clamp_unit;
use crate::policy::WeatherPolicy;

impl WeatherPolicy {
    pub fn classify(&self, snapshot: &WeatherSnapshot) -> WeatherCondition {
        let raining = snapshot.precip >= self.rain_precip_mm;
        let foggy = snapshot.visibility < self.fog_visibility_km;
        let misty = snapshot.humidity >= self.mist_humidity && snapshot.cloudcover >= self.mist_cloudcover;

        if raining || foggy || misty {
            WeatherCondition::Adverse
        } else {
            WeatherCondition::Clear
        }
    }

    /// How much artificial light the street needs, from `0.0` (bright, clear)
    /// to `1.0` (overcast with no visibility).
    pub fn illumination_need(&self, snapshot: &WeatherSnapshot) -> f32 {
        let cloud = clamp_unit(snapshot.cloudcover / 100.0);
        let obscured = 1.0 - clamp_unit(snapshot.visibility / WeatherSnapshot::MAX_VISIBILITY_KM);

        clamp_unit(0.5 * cloud + 0.5 * obscured)
    }
}
