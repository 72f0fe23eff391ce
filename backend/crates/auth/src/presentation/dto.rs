//! API DTOs (Data Transfer Objects)
//!
//! Form payloads arrive as standard HTML form submissions; page DTOs are
//! the view-models a template layer renders.

use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::entity::User;

// ============================================================================
// Forms
// ============================================================================

/// Registration form submission
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Login form submission
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// ============================================================================
// View models
// ============================================================================

/// The visitor's identity as every page sees it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityView {
    pub authenticated: bool,
    pub user_id: Option<i64>,
    pub display_name: Option<String>,
    pub is_admin: bool,
}

impl IdentityView {
    pub fn from_identity(identity: Option<&User>, config: &AuthConfig) -> Self {
        match identity {
            Some(user) => Self {
                authenticated: true,
                user_id: Some(user.id.value()),
                display_name: Some(user.display_name.as_str().to_string()),
                is_admin: user.id == config.admin_user_id,
            },
            None => Self {
                authenticated: false,
                user_id: None,
                display_name: None,
                is_admin: false,
            },
        }
    }
}

/// Registration / login page view-model
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormPageView {
    pub identity: IdentityView,
    /// One-shot flash message left by a previous redirect
    pub flash: Option<String>,
}
