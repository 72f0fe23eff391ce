//! Session Token Codec
//!
//! The session is a stateless signed cookie: nothing is stored
//! server-side beyond the two persisted tables. The token is
//! `"<user_id>.<base64url(hmac_sha256(secret, user_id))>"`; parsing
//! verifies the signature before the id is trusted.

use base64::Engine;
use hmac::{Hmac, Mac};
use kernel::id::UserId;
use sha2::Sha256;

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Issue a signed session token for a user
pub fn issue_session_token(config: &AuthConfig, user_id: UserId) -> String {
    let id_str = user_id.value().to_string();

    let mut mac = Hmac::<Sha256>::new_from_slice(&config.session_secret)
        .expect("HMAC can take key of any size");
    mac.update(id_str.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!(
        "{}.{}",
        id_str,
        base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(signature)
    )
}

/// Parse and verify a session token, returning the user id it names
///
/// Any malformed or tampered token is `Unauthenticated`; callers that
/// tolerate anonymous visitors map that to `None`.
pub fn parse_session_token(config: &AuthConfig, token: &str) -> AuthResult<UserId> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 2 {
        return Err(AuthError::Unauthenticated);
    }

    let id_str = parts[0];
    let signature_b64 = parts[1];

    let mut mac = Hmac::<Sha256>::new_from_slice(&config.session_secret)
        .expect("HMAC can take key of any size");
    mac.update(id_str.as_bytes());

    let signature = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::Unauthenticated)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::Unauthenticated)?;

    let id: i64 = id_str.parse().map_err(|_| AuthError::Unauthenticated)?;

    Ok(UserId::from_db(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let config = AuthConfig::with_random_secret();
        let token = issue_session_token(&config, UserId::from_db(42));
        let parsed = parse_session_token(&config, &token).unwrap();
        assert_eq!(parsed, UserId::from_db(42));
    }

    #[test]
    fn test_tampered_id_rejected() {
        let config = AuthConfig::with_random_secret();
        let token = issue_session_token(&config, UserId::from_db(2));
        // Swap the claimed id to the admin's, keeping the signature
        let forged = token.replacen("2.", "1.", 1);
        assert!(matches!(
            parse_session_token(&config, &forged),
            Err(AuthError::Unauthenticated)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config_a = AuthConfig::with_random_secret();
        let config_b = AuthConfig::with_random_secret();
        let token = issue_session_token(&config_a, UserId::from_db(1));
        assert!(parse_session_token(&config_b, &token).is_err());
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let config = AuthConfig::with_random_secret();
        for bad in ["", "1", "1.", ".sig", "1.2.3", "abc.!!!"] {
            assert!(
                parse_session_token(&config, bad).is_err(),
                "token {:?} should be rejected",
                bad
            );
        }
    }
}
