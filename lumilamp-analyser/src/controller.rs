use std::borrow::Cow;

use lumilamp_api::models::*;
use time::PrimitiveDateTime;

use crate::daylight;
use crate::error::PolicyError;
use crate::policy::Policy;

const FALLBACK_LOCATION: &str = "unknown";

#[derive(Debug, Clone, Copy)]
pub struct DecisionInput<'a> {
    pub is_motion_detected: bool,
    /// Local date and time at the lamp
    pub now: PrimitiveDateTime,
    /// `None` or an invalid snapshot selects [`WeatherSnapshot::fallback`]
    pub weather: Option<&'a WeatherSnapshot>,
    /// Internal device temperature in Celsius
    pub temperature_c: f32,
}

/// Decides the lamp action for a single request.
///
/// Rules in order of precedence:
///
/// 1. A non-finite temperature or one above `max_safe_temp_c` turns the lamp
///    off. The overheat failsafe beats every other input.
/// 2. Night, motion and clear weather dim the lamp proportionally to the
///    illumination need.
/// 3. Night without motion turns the lamp off whatever the weather.
/// 4. Night, motion and adverse weather light the lamp fully; by day the lamp
///    is off in clear weather and dimmed in adverse weather.
#[derive(Debug, Clone, Default)]
pub struct LampController {
    policy: Policy,
}

impl LampController {
    pub fn new(policy: Policy) -> Result<Self, PolicyError> {
        policy.validate()?;

        Ok(Self { policy })
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    pub fn decide(&self, input: &DecisionInput<'_>) -> DecisionResult {
        let weather = match input.weather {
            Some(snapshot) if snapshot.is_valid() => Cow::Borrowed(snapshot),
            _ => Cow::Owned(WeatherSnapshot::fallback(FALLBACK_LOCATION, input.now.ordinal())),
        };

        let local_time = input.now.time();
        let is_night_time = daylight::is_night(local_time, weather.astronomy.as_ref(), &self.policy.daylight);
        let weather_condition = self.policy.weather.classify(&weather);
        let system_health = DeviceHealth::new(input.temperature_c, self.policy.max_safe_temp_c);

        let (lamp_action, reason) = if !input.temperature_c.is_finite() {
            (LampAction::Off, ActionReason::SensorFault)
        } else if system_health.is_overheated {
            (LampAction::Off, ActionReason::OverheatFailsafe)
        } else {
            match (is_night_time, input.is_motion_detected, weather_condition) {
                (true, true, WeatherCondition::Clear) => (LampAction::Dim, ActionReason::MotionDetected),
                (true, false, _) => (LampAction::Off, ActionReason::NoMotion),
                (true, true, WeatherCondition::Adverse) => (LampAction::Full, ActionReason::AdverseWeather),
                (false, _, WeatherCondition::Clear) => (LampAction::Off, ActionReason::Daylight),
                (false, _, WeatherCondition::Adverse) => (LampAction::Dim, ActionReason::DaylightAdverseWeather),
            }
        };

        let brightness = match lamp_action {
            LampAction::Off => 0,
            LampAction::Dim => self.policy.brightness.dim_level(self.policy.weather.illumination_need(&weather)),
            LampAction::Full => 100,
        };

        let inputs_used = InputsUsed {
            is_night_time,
            is_motion_detected: input.is_motion_detected,
            local_time: format!("{:02}:{:02}", local_time.hour(), local_time.minute()),
            location: weather.location.clone(),
            sunrise: weather.astronomy.as_ref().map(|astro| astro.sunrise.clone()),
            sunset: weather.astronomy.as_ref().map(|astro| astro.sunset.clone()),
            weather_condition,
            weather_source: weather.source,
        };

        DecisionResult {
            lamp_action,
            brightness,
            reason,
            system_health,
            inputs_used,
            weather_data_for_chart: weather.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::policy::BrightnessPolicy;

    fn clear_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            location: "Kuala Lumpur".to_string(),
            temp: 27.0,
            humidity: 80.0,
            precip: 0.0,
            cloudcover: 25.0,
            visibility: 10.0,
            uvindex: 0.0,
            day_of_year: 300,
            astronomy: Some(Astronomy {
                sunrise: "07:05 AM".to_string(),
                sunset: "07:10 PM".to_string(),
            }),
            source: WeatherSource::Live,
        }
    }

    fn rainy_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            precip: 3.2,
            cloudcover: 100.0,
            visibility: 6.0,
            ..clear_weather()
        }
    }

    fn controller(max_safe_temp_c: f32) -> LampController {
        LampController::new(Policy {
            max_safe_temp_c,
            ..Default::default()
        })
        .unwrap()
    }

    const NIGHT: PrimitiveDateTime = datetime!(2026-10-27 22:30);
    const DAY: PrimitiveDateTime = datetime!(2026-10-27 13:00);

    #[test]
    fn test_night_motion_clear_dims() {
        let weather = clear_weather();
        let result = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: NIGHT,
            weather: Some(&weather),
            temperature_c: 40.0,
        });

        assert_eq!(result.lamp_action, LampAction::Dim);
        assert_eq!(result.reason, ActionReason::MotionDetected);
        assert!(!result.system_health.is_overheated);
        // need = 0.5 * 0.25 + 0.5 * 0.0 = 0.125 -> 20 + 3.75
        assert_eq!(result.brightness, 24);
        assert!(result.inputs_used.is_night_time);
        assert_eq!(result.inputs_used.local_time, "22:30");
        assert_eq!(result.inputs_used.sunset.as_deref(), Some("07:10 PM"));
    }

    #[test]
    fn test_night_without_motion_is_off() {
        for weather in [clear_weather(), rainy_weather()] {
            let result = controller(60.0).decide(&DecisionInput {
                is_motion_detected: false,
                now: NIGHT,
                weather: Some(&weather),
                temperature_c: 40.0,
            });

            assert_eq!(result.lamp_action, LampAction::Off);
            assert_eq!(result.reason, ActionReason::NoMotion);
            assert_eq!(result.brightness, 0);
        }
    }

    #[test]
    fn test_overheat_failsafe_dominates() {
        for is_motion_detected in [true, false] {
            for weather in [Some(clear_weather()), Some(rainy_weather()), None] {
                for now in [NIGHT, DAY] {
                    let result = controller(60.0).decide(&DecisionInput {
                        is_motion_detected,
                        now,
                        weather: weather.as_ref(),
                        temperature_c: 70.0,
                    });

                    assert_eq!(result.lamp_action, LampAction::Off);
                    assert_eq!(result.reason, ActionReason::OverheatFailsafe);
                    assert!(result.system_health.is_overheated);
                    assert_eq!(result.system_health.current_temp_c, Some(70.0));
                    assert_eq!(result.system_health.max_safe_temp_c, 60.0);
                }
            }
        }
    }

    #[test]
    fn test_temperature_at_threshold_is_safe() {
        let weather = clear_weather();
        let result = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: NIGHT,
            weather: Some(&weather),
            temperature_c: 60.0,
        });

        assert_eq!(result.lamp_action, LampAction::Dim);
        assert!(!result.system_health.is_overheated);
    }

    #[test]
    fn test_unreadable_temperature_turns_lamp_off() {
        let weather = clear_weather();
        let result = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: NIGHT,
            weather: Some(&weather),
            temperature_c: f32::NAN,
        });

        assert_eq!(result.lamp_action, LampAction::Off);
        assert_eq!(result.reason, ActionReason::SensorFault);
        assert_eq!(result.system_health.current_temp_c, None);
        assert!(!result.system_health.is_overheated);
    }

    #[test]
    fn test_rejects_inverted_dim_range() {
        let policy = Policy {
            brightness: BrightnessPolicy { dim_min: 60, dim_max: 40 },
            ..Default::default()
        };

        assert_eq!(
            LampController::new(policy).unwrap_err(),
            PolicyError::InvalidDimRange { min: 60, max: 40 }
        );
    }

    #[test]
    fn test_adverse_weather() {
        let weather = rainy_weather();

        let night = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: NIGHT,
            weather: Some(&weather),
            temperature_c: 40.0,
        });
        assert_eq!(night.lamp_action, LampAction::Full);
        assert_eq!(night.brightness, 100);
        assert_eq!(night.reason, ActionReason::AdverseWeather);

        let day = controller(60.0).decide(&DecisionInput {
            is_motion_detected: false,
            now: DAY,
            weather: Some(&weather),
            temperature_c: 40.0,
        });
        assert_eq!(day.lamp_action, LampAction::Dim);
        assert_eq!(day.reason, ActionReason::DaylightAdverseWeather);
        assert_eq!(day.inputs_used.weather_condition, WeatherCondition::Adverse);
    }

    #[test]
    fn test_clear_day_is_off() {
        let weather = clear_weather();
        let result = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: DAY,
            weather: Some(&weather),
            temperature_c: 40.0,
        });

        assert_eq!(result.lamp_action, LampAction::Off);
        assert_eq!(result.reason, ActionReason::Daylight);
        assert!(!result.inputs_used.is_night_time);
    }

    #[test]
    fn test_missing_weather_uses_fallback() {
        let result = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: NIGHT,
            weather: None,
            temperature_c: 40.0,
        });

        assert_eq!(result.lamp_action, LampAction::Dim);
        assert_eq!(result.inputs_used.weather_source, WeatherSource::Fallback);
        assert_eq!(result.weather_data_for_chart.day_of_year, NIGHT.ordinal());
        assert_eq!(result.inputs_used.sunrise, None);
    }

    #[test]
    fn test_malformed_weather_uses_fallback() {
        let weather = WeatherSnapshot {
            humidity: -5.0,
            ..rainy_weather()
        };
        let result = controller(60.0).decide(&DecisionInput {
            is_motion_detected: true,
            now: NIGHT,
            weather: Some(&weather),
            temperature_c: 40.0,
        });

        assert_eq!(result.inputs_used.weather_source, WeatherSource::Fallback);
        assert_eq!(result.inputs_used.weather_condition, WeatherCondition::Clear);
    }

    #[test]
    fn test_decision_is_deterministic() {
        let controller = LampController::default();
        let weather = rainy_weather();

        for temperature_c in [30.0, 54.9, 55.0, 55.1, 64.9] {
            for is_motion_detected in [true, false] {
                let input = DecisionInput {
                    is_motion_detected,
                    now: NIGHT,
                    weather: Some(&weather),
                    temperature_c,
                };

                assert_eq!(controller.decide(&input), controller.decide(&input));
            }
        }
    }
}
