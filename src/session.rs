use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use crate::validation::{ValidationError, validate_credentials};

/// Mock session gate: a two-state machine over a nullable user identifier.
/// Any non-empty email with a long-enough password opens a session; there is
/// no credential store behind it.
#[derive(Default)]
pub struct SessionGate {
    current: RwLock<Option<String>>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a session and returns the synthesized user identifier. A login
    /// while already authenticated replaces the previous session.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ValidationError> {
        validate_credentials(email, password)?;
        let user_id = format!("user-{}", Utc::now().timestamp_millis());
        *self.current.write().await = Some(user_id.clone());
        info!(%user_id, "session opened");
        Ok(user_id)
    }

    /// Unconditional; a logout without an open session is a no-op.
    pub async fn logout(&self) {
        if self.current.write().await.take().is_some() {
            info!("session closed");
        }
    }

    pub async fn current_user(&self) -> Option<String> {
        self.current.read().await.clone()
    }
}
