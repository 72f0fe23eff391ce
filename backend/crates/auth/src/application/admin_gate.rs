//! Admin Gate
//!
//! The sole authorization rule in the system: only the user holding the
//! reserved administrator id may reach mutating routes. Called
//! explicitly at the top of each mutating handler.

use crate::application::config::AuthConfig;
use crate::domain::entity::User;
use crate::error::{AuthError, AuthResult};

/// Allow the request through only for the administrator account
///
/// Anonymous visitors and every other authenticated user are rejected
/// with `Forbidden` (HTTP 403).
pub fn require_admin(identity: Option<&User>, config: &AuthConfig) -> AuthResult<()> {
    match identity {
        Some(user) if user.id == config.admin_user_id => Ok(()),
        _ => Err(AuthError::Forbidden),
    }
}
