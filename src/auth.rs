use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use crate::error::ApiError;
use crate::session::SessionGate;

/// Checks the provided session token (Bearer header or `token` query
/// parameter) against the open session and returns the user identifier.
pub async fn verify_session(
    gate: &SessionGate,
    auth: Option<Authorization<Bearer>>,
    query_token: Option<&str>,
) -> Result<String, ApiError> {
    let provided = auth
        .map(|a| a.token().to_string())
        .or_else(|| query_token.map(|s| s.to_string()));
    match (provided, gate.current_user().await) {
        (Some(token), Some(user_id)) if token == user_id => Ok(user_id),
        _ => Err(ApiError::Unauthorized("Invalid session token".into())),
    }
}
