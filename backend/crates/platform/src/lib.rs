//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, Base64)
//! - Password hashing (Argon2id)
//! - Cookie management (session cookie, one-shot flash messages)

pub mod cookie;
pub mod crypto;
pub mod password;
