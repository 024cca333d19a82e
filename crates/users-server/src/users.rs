use std::{panic::AssertUnwindSafe, sync::Arc};

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use futures::FutureExt;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use users_core::ErrorKind;
use users_manager::{Manager, NewUser};

use crate::error::{ApiError, panic_detail};

/// Body of `POST /v1/users`
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    /// Password; the wire name is kept for existing clients
    #[serde(rename = "phone", default = "empty_secret")]
    pub password: SecretString,
    #[serde(default)]
    pub email: String,
}

impl From<&CreateUserRequest> for NewUser {
    fn from(request: &CreateUserRequest) -> Self {
        Self {
            first_name: request.firstname.clone(),
            last_name: request.lastname.clone(),
            password: request.password.clone(),
            email: request.email.clone(),
        }
    }
}

/// Body returned when a user is created
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    #[serde(rename = "ID")]
    pub id: String,
}

fn empty_secret() -> SecretString {
    SecretString::from("")
}

/// Create the endpoint router for user management
pub fn endpoint_router() -> Router<Arc<dyn Manager>> {
    Router::new().route("/v1/users", post(create_user))
}

/// Short, value-free reason for a body that could not be decoded
fn decode_failure_reason(rejection: &JsonRejection) -> &'static str {
    match rejection {
        JsonRejection::JsonSyntaxError(_) => "request body is not valid JSON",
        JsonRejection::JsonDataError(_) => "request body does not match the expected fields",
        JsonRejection::MissingJsonContentType(_) => "expected `Content-Type: application/json`",
        _ => "failed to read request body",
    }
}

/// Handle user creation
///
/// Every failure, a panic in the manager included, is logged with the
/// request payload before the response is written. The password is
/// redacted from the log.
async fn create_user(
    State(manager): State<Arc<dyn Manager>>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<CreateUserResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "[user_create_v1] error decoding request params");
        ApiError::InvalidPayload(decode_failure_reason(&rejection).to_owned())
    })?;

    let outcome = AssertUnwindSafe(manager.create(NewUser::from(&request)))
        .catch_unwind()
        .await;

    match outcome {
        Ok(Ok(id)) => Ok(Json(CreateUserResponse { id: id.into_inner() })),
        Ok(Err(err)) => {
            tracing::error!(
                payload = ?request,
                kind = %err.kind(),
                error = %err.message(),
                "[user_create_v1] error creating the user"
            );
            Err(err.into())
        }
        Err(panic) => {
            tracing::error!(
                payload = ?request,
                kind = %ErrorKind::Unknown,
                error = panic_detail(&*panic),
                "[user_create_v1] error creating the user"
            );
            Err(ApiError::Unclassified)
        }
    }
}
