//! HTTP Handlers
//!
//! The admin gate is invoked explicitly at the top of every mutating
//! handler; there is no route-level wrapping. Missing posts answer with
//! an explicit 404 on every route that takes an id.

use axum::Form;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Redirect, Response};
use std::sync::Arc;

use platform::cookie::{clear_flash_cookie, extract_cookie, read_flash_cookie};

use auth::application::{CurrentIdentityUseCase, require_admin};
use auth::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::models::{IdentityView, User};
use auth::presentation::handlers::flash_redirect;
use kernel::id::{PostId, UserId};

use crate::application::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, SubmitCommentUseCase,
    UpdatePostUseCase,
};
use crate::domain::entities::PostDraft;
use crate::domain::repository::PostRepository;
use crate::error::{BlogError, BlogResult};
use crate::presentation::dto::{
    CommentForm, PostDetailView, PostForm, PostFormView, PostListView, PostView, StaticPageView,
};

/// Shared state for blog handlers
///
/// Built once at startup and injected into every handler; there are no
/// module-level singletons.
#[derive(Clone)]
pub struct BlogAppState<U, P>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    pub users: Arc<U>,
    pub posts: Arc<P>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Public pages
// ============================================================================

/// GET /
pub async fn index<U, P>(
    State(state): State<BlogAppState<U, P>>,
    headers: HeaderMap,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;

    let posts = ListPostsUseCase::new(state.posts.clone()).execute().await?;

    let view = PostListView {
        identity: IdentityView::from_identity(identity.as_ref(), &state.config),
        flash: read_flash_cookie(&headers),
        posts: posts.iter().map(PostView::from).collect(),
    };

    Ok(page(view))
}

/// GET /post/{id}
pub async fn show_post<U, P>(
    State(state): State<BlogAppState<U, P>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;

    let post = GetPostUseCase::new(state.posts.clone())
        .execute(PostId::from_db(id))
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let view = PostDetailView {
        identity: IdentityView::from_identity(identity.as_ref(), &state.config),
        flash: read_flash_cookie(&headers),
        post: PostView::from(&post),
    };

    Ok(page(view))
}

/// POST /post/{id} - comment form submission
pub async fn submit_comment<U, P>(
    State(state): State<BlogAppState<U, P>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Form(form): Form<CommentForm>,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;

    let use_case = SubmitCommentUseCase::new(state.posts.clone());

    match use_case
        .execute(identity.as_ref(), PostId::from_db(id), &form.comment_text)
        .await
    {
        Ok(()) => Ok(Redirect::to(&format!("/post/{}", id)).into_response()),
        Err(BlogError::Unauthenticated) => Ok(flash_redirect(
            "You need to log in to comment.",
            "/login",
        )),
        Err(e) => Err(e),
    }
}

/// GET /about
pub async fn about<U, P>(
    State(state): State<BlogAppState<U, P>>,
    headers: HeaderMap,
) -> BlogResult<Json<StaticPageView>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    static_page(&state, &headers, "about").await
}

/// GET /contact
pub async fn contact<U, P>(
    State(state): State<BlogAppState<U, P>>,
    headers: HeaderMap,
) -> BlogResult<Json<StaticPageView>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    static_page(&state, &headers, "contact").await
}

// ============================================================================
// Admin-only mutations
// ============================================================================

/// GET /new-post
pub async fn new_post_page<U, P>(
    State(state): State<BlogAppState<U, P>>,
    headers: HeaderMap,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;
    require_admin(identity.as_ref(), &state.config)?;

    let view = PostFormView {
        identity: IdentityView::from_identity(identity.as_ref(), &state.config),
        flash: read_flash_cookie(&headers),
        post: None,
    };

    Ok(page(view))
}

/// POST /new-post
pub async fn new_post_submit<U, P>(
    State(state): State<BlogAppState<U, P>>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;
    require_admin(identity.as_ref(), &state.config)?;
    // The gate only passes for a resolved identity
    let author = identity.ok_or(BlogError::Forbidden)?;

    let draft = PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        body: form.body,
        img_url: form.img_url,
    };

    CreatePostUseCase::new(state.posts.clone())
        .execute(draft, &author)
        .await?;

    Ok(Redirect::to("/").into_response())
}

/// GET /edit-post/{id}
pub async fn edit_post_page<U, P>(
    State(state): State<BlogAppState<U, P>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;
    require_admin(identity.as_ref(), &state.config)?;

    let post = GetPostUseCase::new(state.posts.clone())
        .execute(PostId::from_db(id))
        .await?
        .ok_or(BlogError::PostNotFound)?;

    let view = PostFormView {
        identity: IdentityView::from_identity(identity.as_ref(), &state.config),
        flash: read_flash_cookie(&headers),
        post: Some(PostView::from(&post)),
    };

    Ok(page(view))
}

/// POST /edit-post/{id}
pub async fn edit_post_submit<U, P>(
    State(state): State<BlogAppState<U, P>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Form(form): Form<PostForm>,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;
    require_admin(identity.as_ref(), &state.config)?;

    let draft = PostDraft {
        title: form.title,
        subtitle: form.subtitle,
        body: form.body,
        img_url: form.img_url,
    };

    let post = UpdatePostUseCase::new(state.posts.clone())
        .execute(
            PostId::from_db(id),
            draft,
            form.author_id.map(UserId::from_db),
        )
        .await?;

    Ok(Redirect::to(&format!("/post/{}", post.id)).into_response())
}

/// GET /delete/{id}
pub async fn delete_post<U, P>(
    State(state): State<BlogAppState<U, P>>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> BlogResult<Response>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(&state, &headers).await?;
    require_admin(identity.as_ref(), &state.config)?;

    DeletePostUseCase::new(state.posts.clone())
        .execute(PostId::from_db(id))
        .await?;

    Ok(Redirect::to("/").into_response())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Resolve the session cookie to the current user, if any
async fn current_user<U, P>(
    state: &BlogAppState<U, P>,
    headers: &HeaderMap,
) -> BlogResult<Option<User>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let token = extract_cookie(headers, &state.config.session_cookie_name);

    let use_case = CurrentIdentityUseCase::new(state.users.clone(), state.config.clone());
    use_case
        .execute(token.as_deref())
        .await
        .map_err(BlogError::from)
}

/// Serialize a view-model, consuming any pending flash message
fn page<V: serde::Serialize>(view: V) -> Response {
    ([(header::SET_COOKIE, clear_flash_cookie())], Json(view)).into_response()
}

async fn static_page<U, P>(
    state: &BlogAppState<U, P>,
    headers: &HeaderMap,
    name: &str,
) -> BlogResult<Json<StaticPageView>>
where
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PostRepository + Clone + Send + Sync + 'static,
{
    let identity = current_user(state, headers).await?;

    Ok(Json(StaticPageView {
        identity: IdentityView::from_identity(identity.as_ref(), &state.config),
        page: name.to_string(),
    }))
}
