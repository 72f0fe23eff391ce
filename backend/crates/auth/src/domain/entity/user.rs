//! User Entity
//!
//! Registered account. Users are created at registration and never
//! updated or deleted afterwards; the record is read on every login and
//! on every post-authorship check.

use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{display_name::DisplayName, email::Email};

/// User entity
///
/// The identifier is assigned by the database. By convention the account
/// holding id 1 is the administrator; there is no role column.
#[derive(Debug, Clone)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    /// Login email (unique)
    pub email: Email,
    /// Argon2id hash of the password; the plaintext is never persisted
    pub password_hash: HashedPassword,
    /// Name shown next to posts and in the page header
    pub display_name: DisplayName,
}

/// A user about to be inserted (no id yet)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: HashedPassword,
    pub display_name: DisplayName,
}
