use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("Request body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("Invalid request parameters: {0}")]
    InvalidRequest(String),

    #[error("Expected request with `Content-Type: application/json`")]
    UnsupportedMediaType,
}

impl ControlError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ControlError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ControlError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ControlError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }
}

impl From<JsonRejection> for ControlError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ControlError::InvalidRequest(e.body_text()),
            JsonRejection::MissingJsonContentType(_) => ControlError::UnsupportedMediaType,
            other => ControlError::MalformedBody(other.body_text()),
        }
    }
}
