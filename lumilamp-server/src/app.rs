use std::sync::Arc;

use axum::Router;
use lumilamp_analyser::LampController;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::configs::Settings;
use crate::errors::handle_panic;
use crate::handles::*;
use crate::services::*;

pub fn create_app(settings: &Arc<Settings>) -> anyhow::Result<Router> {
    let utc_offset = settings.weather.utc_offset()?;

    let weather_provider: Arc<dyn WeatherProvider> = match settings.weather.api_key() {
        Some(api_key) => Arc::new(WeatherApiService::new(&settings.weather, api_key, utc_offset)?),
        None => {
            tracing::warn!("no weather API key configured, decisions use the fallback snapshot");
            Arc::new(OfflineWeather)
        }
    };

    let temperature_sensor = Arc::new(SimulatedTemperatureSensor::new(
        settings.health.min_temp_c,
        settings.health.max_temp_c,
    )?);

    let control = control_router(ControlState {
        controller: Arc::new(LampController::new(settings.policy.clone())?),
        weather_provider,
        temperature_sensor,
        clock: Arc::new(SystemClock::new(utc_offset)),
        location: settings.weather.location.clone(),
    });

    Ok(layered(control))
}

/// Middleware shared by every route. A panicking handler answers 500 with an
/// error id instead of dropping the connection.
pub fn layered(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
