use std::sync::Arc;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use lumilamp_analyser::{DecisionInput, LampController};
use lumilamp_api::models::*;
use time::PrimitiveDateTime;

use crate::errors::{ApiError, ControlError};
use crate::services::{Clock, TemperatureSensor, WeatherProvider};

#[derive(Clone)]
pub struct ControlState {
    pub controller: Arc<LampController>,
    pub weather_provider: Arc<dyn WeatherProvider>,
    pub temperature_sensor: Arc<dyn TemperatureSensor>,
    pub clock: Arc<dyn Clock>,
    /// Location reported when live weather is unavailable
    pub location: String,
}

pub fn control_router(control_state: ControlState) -> Router {
    Router::new()
        .route("/api/control_lamp", post(control_lamp))
        .with_state(control_state)
}

#[utoipa::path(
    post,
    path = "/api/control_lamp",
    tag = "control",
    request_body = ControlLampRequest,
    responses(
        (status = 200, description = "Lamp action decided", body = DecisionResult),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = ErrorResponse),
        (status = 422, description = "Missing or non-boolean `is_motion_detected`", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn control_lamp(
    State(state): State<ControlState>,
    body: Result<Json<ControlLampRequest>, JsonRejection>,
) -> Result<Json<DecisionResult>, ApiError> {
    let Json(body) = body.map_err(ControlError::from)?;

    let now = state.clock.now();

    let weather = match state.weather_provider.fetch().await {
        Ok(snapshot) if snapshot.is_valid() => snapshot,
        Ok(snapshot) => {
            tracing::warn!(?snapshot, "weather data out of range, using fallback snapshot");
            WeatherSnapshot::fallback(state.location.as_str(), now.ordinal())
        }
        Err(e) => {
            tracing::warn!("weather unavailable, using fallback snapshot: {}", e);
            WeatherSnapshot::fallback(state.location.as_str(), now.ordinal())
        }
    };

    let temperature_c = state.temperature_sensor.read_celsius();

    let result = state.controller.decide(&DecisionInput {
        is_motion_detected: body.is_motion_detected,
        now: PrimitiveDateTime::new(now.date(), now.time()),
        weather: Some(&weather),
        temperature_c,
    });

    if result.system_health.is_overheated {
        tracing::warn!(
            current_temp_c = ?result.system_health.current_temp_c,
            max_safe_temp_c = result.system_health.max_safe_temp_c,
            "overheat detected, forcing lamp {}",
            result.lamp_action
        );
    }

    tracing::info!(
        lamp_action = %result.lamp_action,
        brightness = result.brightness,
        reason = ?result.reason,
        is_motion_detected = body.is_motion_detected,
        is_night_time = result.inputs_used.is_night_time,
        "lamp decision"
    );

    Ok(Json(result))
}
