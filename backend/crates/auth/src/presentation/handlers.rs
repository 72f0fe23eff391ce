//! HTTP Handlers
//!
//! Recoverable auth errors are surfaced the way the site does it: a
//! one-shot flash message plus a redirect to a sensible prior page.
//! Everything else propagates as a typed error response.

use axum::Form;
use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::{
    CookieConfig, clear_flash_cookie, extract_cookie, read_flash_cookie, set_flash_cookie,
};

use crate::application::config::AuthConfig;
use crate::application::{
    CurrentIdentityUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput,
    RegisterUseCase,
};
use crate::domain::entity::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{FormPageView, IdentityView, LoginForm, RegisterForm};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// GET /register
pub async fn register_page<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    form_page(&state, &headers).await
}

/// POST /register
pub async fn register_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<RegisterForm>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        email: form.email,
        password: form.password,
        name: form.name,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(login_redirect(&state.config, &output.session_token)),
        Err(AuthError::DuplicateUser) => Ok(flash_redirect(
            "An account with this email already exists. Please log in instead.",
            "/login",
        )),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Login
// ============================================================================

/// GET /login
pub async fn login_page<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    form_page(&state, &headers).await
}

/// POST /login
pub async fn login_submit<R>(
    State(state): State<AuthAppState<R>>,
    Form(form): Form<LoginForm>,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: form.email,
        password: form.password,
    };

    match use_case.execute(input).await {
        Ok(output) => Ok(login_redirect(&state.config, &output.session_token)),
        Err(AuthError::UserNotFound) => Ok(flash_redirect(
            "No account with this email exists. Please sign up instead.",
            "/register",
        )),
        Err(AuthError::InvalidCredentials) => Ok(flash_redirect(
            "The password was incorrect. Please try again.",
            "/login",
        )),
        Err(e) => Err(e),
    }
}

// ============================================================================
// Logout
// ============================================================================

/// GET /logout
pub async fn logout<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(&headers, &state.config.session_cookie_name);

    let use_case = LogoutUseCase::new(state.config.clone());

    match use_case.execute(token.as_deref()) {
        Ok(_) => Ok((
            [(
                header::SET_COOKIE,
                session_cookie_config(&state.config).build_delete_cookie(),
            )],
            Redirect::to("/"),
        )
            .into_response()),
        Err(AuthError::Unauthenticated) => {
            Ok(flash_redirect("You need to log in first.", "/login"))
        }
        Err(e) => Err(e),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the session cookie to the current user, if any
pub async fn current_user<R>(
    state: &AuthAppState<R>,
    headers: &HeaderMap,
) -> AuthResult<Option<User>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(headers, &state.config.session_cookie_name);

    let use_case = CurrentIdentityUseCase::new(state.repo.clone(), state.config.clone());
    use_case.execute(token.as_deref()).await
}

/// Render a form page view-model, consuming any pending flash message
async fn form_page<R>(state: &AuthAppState<R>, headers: &HeaderMap) -> AuthResult<Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(state, headers).await?;
    let flash = read_flash_cookie(headers);

    let view = FormPageView {
        identity: IdentityView::from_identity(identity.as_ref(), &state.config),
        flash,
    };

    Ok((
        [(header::SET_COOKIE, clear_flash_cookie())],
        Json(view),
    )
        .into_response())
}

/// Set the session cookie and land on the post list
fn login_redirect(config: &AuthConfig, token: &str) -> Response {
    (
        [(
            header::SET_COOKIE,
            session_cookie_config(config).build_set_cookie(token),
        )],
        Redirect::to("/"),
    )
        .into_response()
}

/// Leave a one-shot flash message and redirect
pub fn flash_redirect(message: &str, location: &str) -> Response {
    (
        [(header::SET_COOKIE, set_flash_cookie(message))],
        Redirect::to(location),
    )
        .into_response()
}

/// Session cookie shape shared by set and delete
fn session_cookie_config(config: &AuthConfig) -> CookieConfig {
    CookieConfig {
        name: config.session_cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        // Session-scoped: the cookie dies with the browser session
        max_age_secs: None,
    }
}
