use alloc::string::String;

use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "docs", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable failure description
    pub error: String,
    /// Correlation id of an internal failure, present only on 5xx
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_id: Option<String>,
}
