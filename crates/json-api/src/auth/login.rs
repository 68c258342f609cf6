//! Admin Login Handler

use std::fmt;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use medovik_app::auth::AuthServiceError;

use crate::{extensions::*, responses::ErrorResponse};

/// Admin Login Request
#[derive(Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// Admin Login Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Admin Login Handler
///
/// Checks a credential pair without issuing a session; admin requests keep
/// sending HTTP Basic credentials.
#[endpoint(
    tags("admin"),
    summary = "Check Admin Credentials",
    responses(
        (status_code = StatusCode::OK, description = "Credentials accepted"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid credentials", body = ErrorResponse),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<Json<LoginResponse>, StatusError> {
    let app = depot.app_context()?;
    let request = json.into_inner();

    app.auth
        .authenticate_admin(&request.username, &request.password)
        .await
        .map_err(|error| match error {
            AuthServiceError::InvalidCredentials => {
                StatusError::unauthorized().brief("Invalid credentials")
            }
        })?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Logged in".to_string(),
    }))
}
