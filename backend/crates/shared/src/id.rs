//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities. Identifiers are assigned by
//! the database (`BIGSERIAL`), so there is no in-process constructor for
//! fresh IDs; values always originate from a persisted row.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper over a database-assigned integer key
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// let id = UserId::from_db(1);
/// assert_eq!(id.value(), 1);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a key read from the database
    pub const fn from_db(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// The underlying integer key
    pub const fn value(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would bound T, but the marker is phantom.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_db(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Post IDs
    pub struct Post;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type PostId = Id<markers::Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::from_db(1);
        let post_id: PostId = Id::from_db(1);

        // These are different types, cannot be mixed
        let _u: i64 = user_id.into();
        let _p: i64 = post_id.into();
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(UserId::from_db(7), UserId::from_db(7));
        assert_ne!(UserId::from_db(7), UserId::from_db(8));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PostId::from_db(42).to_string(), "42");
    }
}
