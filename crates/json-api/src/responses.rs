//! Response bodies shared across resources.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

/// Acknowledges a mutation that has nothing else to report.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub(crate) fn ok() -> Self {
        Self { success: true }
    }
}

/// A bare status message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every 4xx/5xx answer; the human-readable message is `error.brief`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorDetail {
    /// HTTP status code
    pub code: u16,

    /// Canonical reason phrase, e.g. `Not Found`
    pub name: String,

    /// What went wrong, e.g. `Promo code not found`
    pub brief: String,
}
