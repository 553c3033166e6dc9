use super::ControlError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Control error: {0}")]
    ControlError(#[from] ControlError),

    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}
