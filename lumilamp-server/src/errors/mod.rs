pub mod api;
pub mod control;
pub mod sensor;
pub mod weather;

pub use api::ApiError;
pub use control::ControlError;
pub use sensor::SensorError;
pub use weather::WeatherError;

use std::any::Any;

use anyhow::anyhow;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lumilamp_api::models::ErrorResponse;
use uuid::Uuid;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, error_id) = match self {
            ApiError::ControlError(e) => {
                tracing::debug!("rejected request: {}", e);
                (e.status_code(), e.to_string(), None)
            }
            ApiError::InternalError(e) => {
                let error_id = Uuid::new_v4();
                tracing::error!(error_id = ?error_id, "Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(error_id.to_string()),
                )
            }
        };

        (status, Json(ErrorResponse { error, error_id })).into_response()
    }
}

/// Turns a panicking handler into the regular 500 response.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::InternalError(anyhow!("handler panicked: {detail}")).into_response()
}
