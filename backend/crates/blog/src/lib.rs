//! Blog (Posts) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, value objects, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Behavior
//! - Public post listing and detail views
//! - Admin-only create/edit/delete (admin gate from the `auth` crate,
//!   checked explicitly at the top of each mutating handler)
//! - Creation date is assigned server-side in long human-readable form
//!   and never changes afterwards
//! - Comment submissions are authenticated but not persisted: a known
//!   gap in the observed system, reproduced deliberately

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{BlogError, BlogResult};
pub use infra::postgres::PgPostRepository;
pub use presentation::router::blog_router;

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::domain::value_objects::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPostRepository as PostStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
