// Request identity.
//
// Token issuance lives upstream. The gateway forwards the authenticated user id in the
// `x-user-id` header; here it is resolved through the user directory into an Actor.
//
// - Missing, malformed or unknown ids are 401.
// - AdminActor additionally requires the ADMIN role (403).

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::shared::core::identity::Actor;
use crate::shared::infrastructure::user_directory::UserDirectory;
use crate::shell::http::ErrorBody;
use crate::shell::state::AppState;

pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityRejection {
    Unauthenticated,
    AdminRequired,
    DirectoryUnavailable,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            IdentityRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "unauthenticated",
                "a known user id is required",
            ),
            IdentityRejection::AdminRequired => (
                StatusCode::FORBIDDEN,
                "permission_denied",
                "admin role required",
            ),
            IdentityRejection::DirectoryUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                "failed to resolve the current user",
            ),
        };
        (status, Json(ErrorBody::new(error, message))).into_response()
    }
}

pub async fn resolve_actor(parts: &Parts, state: &AppState) -> Result<Actor, IdentityRejection> {
    let user_id = parts
        .headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .ok_or(IdentityRejection::Unauthenticated)?;

    let account = state
        .users
        .find_active(user_id)
        .await
        .map_err(|error| {
            tracing::error!(error = %error, %user_id, "user directory lookup failed");
            IdentityRejection::DirectoryUnavailable
        })?
        .ok_or(IdentityRejection::Unauthenticated)?;
    Ok(Actor::from(&account))
}

/// Any authenticated, active user.
pub struct CurrentActor(pub Actor);

impl FromRequestParts<AppState> for CurrentActor {
    type Rejection = IdentityRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        resolve_actor(parts, state).await.map(CurrentActor)
    }
}

/// An authenticated user with the ADMIN role.
pub struct AdminActor(pub Actor);

impl FromRequestParts<AppState> for AdminActor {
    type Rejection = IdentityRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor = resolve_actor(parts, state).await?;
        if !actor.is_admin() {
            tracing::warn!(user_id = %actor.id, "admin route refused");
            return Err(IdentityRejection::AdminRequired);
        }
        Ok(AdminActor(actor))
    }
}
