use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::handlers::{LoginRequest, LoginResponse, ProfileResponse, ToggleResponse};
use crate::models::{Category, GymClass, Level, ToggleOutcome};
use crate::stats::{DayActivity, StatsSummary, TrainingStats};

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .build(),
            ),
        );
        components.add_security_scheme(
            "query_token",
            SecurityScheme::ApiKey(ApiKey::Query(ApiKeyValue::new("token"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::login,
        crate::handlers::logout,
        crate::handlers::get_schedule,
        crate::handlers::toggle_registration,
        crate::handlers::get_stats,
        crate::handlers::get_profile,
        crate::handlers::get_badge
    ),
    components(schemas(
        GymClass,
        Level,
        Category,
        ToggleOutcome,
        ToggleResponse,
        LoginRequest,
        LoginResponse,
        ProfileResponse,
        TrainingStats,
        StatsSummary,
        DayActivity
    )),
    tags(
        (name = "membership", description = "Session, profile and badge operations"),
        (name = "schedule", description = "Class schedule and registration operations")
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;
