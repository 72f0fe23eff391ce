//! Blog Router

use axum::{
    Router,
    routing::get,
};
use std::sync::Arc;

use auth::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::infra::postgres::PgUserRepository;

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostRepository;
use crate::presentation::handlers::{self, BlogAppState};

/// Create the Blog router with PostgreSQL repositories
pub fn blog_router(
    users: PgUserRepository,
    posts: PgPostRepository,
    config: AuthConfig,
) -> Router {
    blog_router_generic(users, posts, config)
}

/// Create a generic Blog router for any repository implementations
pub fn blog_router_generic<U, P>(users: U, posts: P, config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let state = BlogAppState {
        users: Arc::new(users),
        posts: Arc::new(posts),
        config: Arc::new(config),
    };

    Router::new()
        .route("/", get(handlers::index::<U, P>))
        .route(
            "/post/{id}",
            get(handlers::show_post::<U, P>).post(handlers::submit_comment::<U, P>),
        )
        .route("/about", get(handlers::about::<U, P>))
        .route("/contact", get(handlers::contact::<U, P>))
        .route(
            "/new-post",
            get(handlers::new_post_page::<U, P>).post(handlers::new_post_submit::<U, P>),
        )
        .route(
            "/edit-post/{id}",
            get(handlers::edit_post_page::<U, P>).post(handlers::edit_post_submit::<U, P>),
        )
        .route("/delete/{id}", get(handlers::delete_post::<U, P>))
        .with_state(state)
}
