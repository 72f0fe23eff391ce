//! Register Use Case
//!
//! Creates a new user account and logs it in.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::issue_session_token;
use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{DisplayName, Email};
use crate::error::{AuthError, AuthResult};
use platform::password::ClearTextPassword;

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Register output
pub struct RegisterOutput {
    pub user: User,
    /// Signed session token; the handler turns it into a cookie
    pub session_token: String,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let email =
            Email::new(input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::DuplicateUser);
        }

        let display_name = DisplayName::new(input.name)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        let raw_password = ClearTextPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;
        let password_hash = raw_password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let new_user = NewUser {
            email,
            password_hash,
            display_name,
        };

        // The unique index on email backstops the pre-check under races;
        // the repository maps that violation to DuplicateUser as well.
        let user = self.user_repo.create(&new_user).await?;

        let session_token = issue_session_token(&self.config, user.id);

        tracing::info!(user_id = %user.id, "User registered");

        Ok(RegisterOutput {
            user,
            session_token,
        })
    }
}
