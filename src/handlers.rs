use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    AppState,
    auth::verify_session,
    error::ApiError,
    models::{CategoryFilter, GymClass, ToggleOutcome},
    stats::{TrainingStats, sample_stats},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    #[serde(default)]
    pub category: CategoryFilter,
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ToggleResponse {
    pub outcome: ToggleOutcome,
    pub class: GymClass,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub member_name: String,
    pub membership_tier: String,
    pub user_id: String,
    /// QR badge payload; always equals `user_id`.
    pub qr_payload: String,
    pub badge_png: String,
}

#[utoipa::path(get, path = "/", tag = "membership")]
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("{} Membership API", state.settings.club_name),
        "endpoints": {
            "/login": "Open a session (any email, password of 6+ characters)",
            "/logout": "Close the session",
            "/schedule": "List classes, optionally filtered by category",
            "/classes/{id}/registration": "Toggle registration for a class",
            "/stats": "Training statistics",
            "/profile": "Member profile with QR badge",
            "/profile/badge.png": "QR membership badge as PNG"
        }
    }))
}

#[utoipa::path(get, path = "/healthz/live", tag = "membership")]
pub async fn healthz_live() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(get, path = "/healthz/ready", tag = "membership")]
pub async fn healthz_ready() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 400, description = "Empty email or password shorter than 6 characters")
    ),
    tag = "membership"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = state.gate.login(&request.email, &request.password).await?;
    Ok(Json(LoginResponse { user_id }))
}

#[utoipa::path(
    post,
    path = "/logout",
    responses((status = 204, description = "Session closed (unconditional)")),
    tag = "membership"
)]
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.gate.logout().await;
    StatusCode::NO_CONTENT
}

#[utoipa::path(
    get,
    path = "/schedule",
    params(
        ("category" = Option<String>, Query, description = "Category filter: All, Cardio, Strength, Yoga, Dance or Functional"),
        ("token" = Option<String>, Query, description = "Session token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Classes matching the filter, in schedule order", body = [GymClass]),
        (status = 401, description = "Invalid session token")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "schedule"
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    axum::extract::Query(query): axum::extract::Query<ScheduleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_session(&state.gate, auth_header, query.token.as_deref()).await?;

    let classes = state.registry.schedule(query.category).await;
    Ok(Json(classes))
}

#[utoipa::path(
    post,
    path = "/classes/{id}/registration",
    params(
        ("id" = String, Path, description = "Class identifier"),
        ("token" = Option<String>, Query, description = "Session token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Toggle outcome and the resulting class state", body = ToggleResponse),
        (status = 401, description = "Invalid session token"),
        (status = 404, description = "Unknown class id")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "schedule"
)]
pub async fn toggle_registration(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    Path(id): Path<String>,
    axum::extract::Query(query): axum::extract::Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_session(&state.gate, auth_header, query.token.as_deref()).await?;

    let (outcome, class) = state.registry.toggle_registration(&id).await?;
    Ok(Json(ToggleResponse { outcome, class }))
}

#[utoipa::path(
    get,
    path = "/stats",
    params(
        ("token" = Option<String>, Query, description = "Session token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Training statistics", body = TrainingStats),
        (status = 401, description = "Invalid session token")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "schedule"
)]
pub async fn get_stats(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    axum::extract::Query(query): axum::extract::Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    verify_session(&state.gate, auth_header, query.token.as_deref()).await?;

    Ok(Json(sample_stats()))
}

#[utoipa::path(
    get,
    path = "/profile",
    params(
        ("token" = Option<String>, Query, description = "Session token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "Member profile with embedded QR badge", body = ProfileResponse),
        (status = 401, description = "Invalid session token")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "membership"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    axum::extract::Query(query): axum::extract::Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    let user_id = verify_session(&state.gate, auth_header, query.token.as_deref()).await?;

    let badge_png = state.badges.render_data_uri(&user_id)?;
    Ok(Json(ProfileResponse {
        member_name: state.settings.member_name.clone(),
        membership_tier: state.settings.membership_tier.clone(),
        qr_payload: user_id.clone(),
        user_id,
        badge_png,
    }))
}

#[utoipa::path(
    get,
    path = "/profile/badge.png",
    params(
        ("token" = Option<String>, Query, description = "Session token (alternative to Bearer header)")
    ),
    responses(
        (status = 200, description = "QR membership badge", content_type = "image/png"),
        (status = 401, description = "Invalid session token")
    ),
    security(("bearer_auth" = []), ("query_token" = [])),
    tag = "membership"
)]
pub async fn get_badge(
    State(state): State<AppState>,
    auth: Option<TypedHeader<Authorization<Bearer>>>,
    axum::extract::Query(query): axum::extract::Query<TokenQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = auth.map(|TypedHeader(a)| a);
    let user_id = verify_session(&state.gate, auth_header, query.token.as_deref()).await?;

    let body = state.badges.render_png(&user_id)?;
    Ok((
        StatusCode::OK,
        [
            ("content-type", "image/png"),
            ("content-disposition", "inline; filename=fitclub_badge.png"),
        ],
        body,
    ))
}
