//! Cookie Management Infrastructure
//!
//! Common cookie handling utilities: session cookie configuration and
//! one-shot flash messages carried in a dedicated cookie.

use axum::http::{HeaderMap, header};

use crate::crypto::{from_base64, to_base64};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }

    /// Build Set-Cookie header for deletion (expired)
    pub fn build_delete_cookie(&self) -> String {
        format!("{}=; HttpOnly; Path={}; Max-Age=0", self.name, self.path)
    }
}

/// Extract a cookie value from headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

// ============================================================================
// Flash messages
// ============================================================================

/// Name of the one-shot flash message cookie
pub const FLASH_COOKIE_NAME: &str = "flash";

/// Build a Set-Cookie header carrying a one-shot flash message
///
/// The message is base64-encoded so arbitrary text survives cookie
/// value syntax. Session-scoped: no Max-Age, cleared on read.
pub fn set_flash_cookie(message: &str) -> String {
    format!(
        "{}={}; HttpOnly; Path=/; SameSite=Lax",
        FLASH_COOKIE_NAME,
        to_base64(message.as_bytes())
    )
}

/// Read the flash message from request headers, if any
pub fn read_flash_cookie(headers: &HeaderMap) -> Option<String> {
    let raw = extract_cookie(headers, FLASH_COOKIE_NAME)?;
    let bytes = from_base64(&raw).ok()?;
    String::from_utf8(bytes).ok()
}

/// Build a Set-Cookie header clearing the flash cookie
pub fn clear_flash_cookie() -> String {
    format!("{}=; HttpOnly; Path=/; Max-Age=0", FLASH_COOKIE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_cookie_config_build() {
        let config = CookieConfig {
            name: "test".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/api".to_string(),
            max_age_secs: Some(3600),
        };

        let cookie = config.build_set_cookie("value123");
        assert!(cookie.contains("test=value123"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/api"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_delete_cookie_expires_immediately() {
        let config = CookieConfig::default();
        let cookie = config.build_delete_cookie();
        assert!(cookie.starts_with("session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; session=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "session"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_flash_roundtrip() {
        let set = set_flash_cookie("The password was incorrect. please try again.");
        let value = set
            .split(';')
            .next()
            .and_then(|kv| kv.split_once('='))
            .map(|(_, v)| v.to_string())
            .unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("{}={}", FLASH_COOKIE_NAME, value)).unwrap(),
        );

        assert_eq!(
            read_flash_cookie(&headers).as_deref(),
            Some("The password was incorrect. please try again.")
        );
    }

    #[test]
    fn test_flash_clear() {
        let cookie = clear_flash_cookie();
        assert!(cookie.starts_with("flash=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_flash_missing() {
        let headers = HeaderMap::new();
        assert_eq!(read_flash_cookie(&headers), None);
    }
}
