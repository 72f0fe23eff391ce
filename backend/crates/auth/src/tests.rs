//! Unit tests for auth crate use cases
//!
//! Runs against an in-memory repository so no database is needed.

use std::sync::{Arc, Mutex};

use kernel::id::UserId;

use crate::application::config::AuthConfig;
use crate::application::session::{issue_session_token, parse_session_token};
use crate::application::{
    CurrentIdentityUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase, require_admin,
};
use crate::domain::entity::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::Email;
use crate::error::{AuthError, AuthResult};

/// In-memory user store assigning sequential ids starting at 1,
/// mirroring the database's BIGSERIAL behavior.
#[derive(Clone, Default)]
struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, user: &NewUser) -> AuthResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateUser);
        }
        let stored = User {
            id: UserId::from_db(users.len() as i64 + 1),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            display_name: user.display_name.clone(),
        };
        users.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, user_id: UserId) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| &u.email == email))
    }
}

fn test_config() -> Arc<AuthConfig> {
    Arc::new(AuthConfig::with_random_secret())
}

fn register_input(email: &str, password: &str, name: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_string(),
        password: password.to_string(),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod register_tests {
    use super::*;

    #[tokio::test]
    async fn first_registered_user_is_the_admin() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = test_config();
        let use_case = RegisterUseCase::new(repo.clone(), config.clone());

        let alice = use_case
            .execute(register_input("a@x.com", "pw1", "Alice"))
            .await
            .unwrap();
        assert_eq!(alice.user.id, UserId::from_db(1));
        assert!(require_admin(Some(&alice.user), &config).is_ok());

        let bob = use_case
            .execute(register_input("b@x.com", "pw2", "Bob"))
            .await
            .unwrap();
        assert_eq!(bob.user.id, UserId::from_db(2));
        assert!(matches!(
            require_admin(Some(&bob.user), &config),
            Err(AuthError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn duplicate_email_fails_exactly_once_registered() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = test_config();
        let use_case = RegisterUseCase::new(repo.clone(), config.clone());

        use_case
            .execute(register_input("a@x.com", "pw1", "Alice"))
            .await
            .unwrap();

        let second = use_case
            .execute(register_input("a@x.com", "other", "Alice Again"))
            .await;
        assert!(matches!(second, Err(AuthError::DuplicateUser)));

        // Email normalization: case-variant of the same address is still a duplicate
        let cased = use_case
            .execute(register_input("A@X.COM", "other", "Alice Cased"))
            .await;
        assert!(matches!(cased, Err(AuthError::DuplicateUser)));
    }

    #[tokio::test]
    async fn plaintext_password_is_not_stored() {
        let repo = Arc::new(InMemoryUsers::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        let output = use_case
            .execute(register_input("a@x.com", "pw1", "Alice"))
            .await
            .unwrap();

        assert!(!output.user.password_hash.as_phc_string().contains("pw1"));
        assert!(output.user.password_hash.as_phc_string().starts_with("$argon2"));
    }

    #[tokio::test]
    async fn blank_fields_are_rejected() {
        let repo = Arc::new(InMemoryUsers::default());
        let use_case = RegisterUseCase::new(repo.clone(), test_config());

        let bad_email = use_case.execute(register_input("not-an-email", "pw1", "A")).await;
        assert!(matches!(bad_email, Err(AuthError::Validation(_))));

        let blank_name = use_case.execute(register_input("a@x.com", "pw1", "   ")).await;
        assert!(matches!(blank_name, Err(AuthError::Validation(_))));

        let blank_password = use_case.execute(register_input("a@x.com", "", "Alice")).await;
        assert!(matches!(blank_password, Err(AuthError::Validation(_))));

        // Nothing was persisted along the way
        assert!(repo.users.lock().unwrap().is_empty());
    }
}

#[cfg(test)]
mod login_tests {
    use super::*;

    async fn registered_repo() -> (Arc<InMemoryUsers>, Arc<AuthConfig>) {
        let repo = Arc::new(InMemoryUsers::default());
        let config = test_config();
        RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("a@x.com", "pw1", "Alice"))
            .await
            .unwrap();
        (repo, config)
    }

    #[tokio::test]
    async fn login_succeeds_with_correct_password() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(repo, config);

        let output = use_case
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user.id, UserId::from_db(1));
        assert!(!output.session_token.is_empty());
    }

    #[tokio::test]
    async fn login_fails_with_wrong_password() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(repo, config);

        let result = use_case
            .execute(LoginInput {
                email: "a@x.com".to_string(),
                password: "pw2".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_fails_for_unknown_email() {
        let (repo, config) = registered_repo().await;
        let use_case = LoginUseCase::new(repo, config);

        let result = use_case
            .execute(LoginInput {
                email: "nobody@x.com".to_string(),
                password: "pw1".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::UserNotFound)));
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[tokio::test]
    async fn session_token_resolves_to_the_user() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = test_config();

        let output = RegisterUseCase::new(repo.clone(), config.clone())
            .execute(register_input("a@x.com", "pw1", "Alice"))
            .await
            .unwrap();

        let identity = CurrentIdentityUseCase::new(repo.clone(), config.clone())
            .execute(Some(&output.session_token))
            .await
            .unwrap();

        assert_eq!(identity.unwrap().id, output.user.id);
    }

    #[tokio::test]
    async fn missing_or_tampered_cookie_is_anonymous() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = test_config();
        let use_case = CurrentIdentityUseCase::new(repo.clone(), config.clone());

        assert!(use_case.execute(None).await.unwrap().is_none());
        assert!(use_case.execute(Some("1.garbage")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn token_for_a_missing_user_row_is_anonymous() {
        let repo = Arc::new(InMemoryUsers::default());
        let config = test_config();

        let token = issue_session_token(&config, UserId::from_db(99));
        assert!(parse_session_token(&config, &token).is_ok());

        let identity = CurrentIdentityUseCase::new(repo, config)
            .execute(Some(&token))
            .await
            .unwrap();
        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn logout_requires_an_active_session() {
        let config = test_config();
        let use_case = LogoutUseCase::new(config.clone());

        assert!(matches!(
            use_case.execute(None),
            Err(AuthError::Unauthenticated)
        ));
        assert!(matches!(
            use_case.execute(Some("not-a-token")),
            Err(AuthError::Unauthenticated)
        ));

        let token = issue_session_token(&config, UserId::from_db(1));
        assert_eq!(use_case.execute(Some(&token)).unwrap(), UserId::from_db(1));
    }
}
