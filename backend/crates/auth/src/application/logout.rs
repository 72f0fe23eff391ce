//! Logout Use Case
//!
//! Sessions live entirely in the signed cookie, so logout only has to
//! validate that a session exists; clearing the cookie is the handler's
//! side of the contract.

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::session::parse_session_token;
use crate::error::{AuthError, AuthResult};

/// Logout use case
pub struct LogoutUseCase {
    config: Arc<AuthConfig>,
}

impl LogoutUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Validate the current session; `Unauthenticated` when there is none
    pub fn execute(&self, token: Option<&str>) -> AuthResult<UserId> {
        let token = token.ok_or(AuthError::Unauthenticated)?;
        let user_id = parse_session_token(&self.config, token)?;

        tracing::info!(user_id = %user_id, "User logged out");

        Ok(user_id)
    }
}
