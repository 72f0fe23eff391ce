//! Current Identity Use Case
//!
//! Resolves the session cookie to the User it names. The identity is an
//! explicit value handed to each handler; there is no ambient
//! "current user".

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::parse_session_token;
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;

/// Current identity use case
pub struct CurrentIdentityUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CurrentIdentityUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Resolve the session to a user; `None` for anonymous visitors
    ///
    /// A missing cookie, a tampered token, or a token naming a user row
    /// that no longer exists all resolve to anonymous rather than an
    /// error: every public page tolerates anonymous visitors.
    pub async fn execute(&self, token: Option<&str>) -> AuthResult<Option<User>> {
        let Some(token) = token else {
            return Ok(None);
        };

        let Ok(user_id) = parse_session_token(&self.config, token) else {
            return Ok(None);
        };

        self.user_repo.find_by_id(user_id).await
    }
}
