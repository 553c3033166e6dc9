use std::sync::Arc;

use axum::Router;
use lumilamp_analyser::{LampController, Policy};
use lumilamp_api::models::{Astronomy, WeatherSnapshot, WeatherSource};
use lumilamp_server::app::layered;
use lumilamp_server::handles::{ControlState, control_router};
use lumilamp_server::services::{
    Clock, FailingWeather, FixedClock, FixedTemperature, PanickingTemperature, StaticWeather, TemperatureSensor,
    WeatherProvider,
};
use time::OffsetDateTime;
use time::macros::datetime;

pub const NIGHT: OffsetDateTime = datetime!(2026-10-27 22:30 +8);
pub const DAY: OffsetDateTime = datetime!(2026-10-27 12:15 +8);

pub struct MockApp {
    pub router: Router,
    policy: Policy,
    weather_provider: Arc<dyn WeatherProvider>,
    temperature_sensor: Arc<dyn TemperatureSensor>,
    clock: Arc<dyn Clock>,
}

impl MockApp {
    pub fn new() -> Self {
        let mut app = Self {
            router: Router::new(),
            policy: Policy {
                max_safe_temp_c: 60.0,
                ..Default::default()
            },
            weather_provider: Arc::new(StaticWeather(clear_weather())),
            temperature_sensor: Arc::new(FixedTemperature(40.0)),
            clock: Arc::new(FixedClock(NIGHT)),
        };
        app.rebuild();
        app
    }

    pub fn with_weather(mut self, weather: WeatherSnapshot) -> Self {
        self.weather_provider = Arc::new(StaticWeather(weather));
        self.rebuild();
        self
    }

    pub fn with_failing_weather(mut self) -> Self {
        self.weather_provider = Arc::new(FailingWeather);
        self.rebuild();
        self
    }

    pub fn with_temperature(mut self, temperature_c: f32) -> Self {
        self.temperature_sensor = Arc::new(FixedTemperature(temperature_c));
        self.rebuild();
        self
    }

    pub fn with_panicking_sensor(mut self) -> Self {
        self.temperature_sensor = Arc::new(PanickingTemperature);
        self.rebuild();
        self
    }

    pub fn at(mut self, now: OffsetDateTime) -> Self {
        self.clock = Arc::new(FixedClock(now));
        self.rebuild();
        self
    }

    fn rebuild(&mut self) {
        self.router = layered(control_router(ControlState {
            controller: Arc::new(LampController::new(self.policy.clone()).unwrap()),
            weather_provider: self.weather_provider.clone(),
            temperature_sensor: self.temperature_sensor.clone(),
            clock: self.clock.clone(),
            location: String::from("Kuala Lumpur"),
        }));
    }
}

pub fn clear_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        location: String::from("Kuala Lumpur"),
        temp: 26.4,
        humidity: 84.0,
        precip: 0.0,
        cloudcover: 0.0,
        visibility: 10.0,
        uvindex: 0.0,
        day_of_year: 300,
        astronomy: Some(Astronomy {
            sunrise: String::from("07:06 AM"),
            sunset: String::from("07:09 PM"),
        }),
        source: WeatherSource::Live,
    }
}

pub fn rainy_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        precip: 4.8,
        cloudcover: 100.0,
        humidity: 96.0,
        visibility: 3.0,
        ..clear_weather()
    }
}
