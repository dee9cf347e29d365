//! Static API key check.
//!
//! Responsibility:
//! - Decide whether a presented bearer credential may proceed.
//! - Pure: no I/O, no logging of the credential value.
//!
//! Escape hatch:
//! - When auth is disabled, or no key is configured, every request passes with
//!   `AuthorizedToken::Bypass`. Forgetting to set `API_KEY` therefore turns auth off.

use std::fmt;

use subtle::ConstantTimeEq;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("invalid or missing API key")]
    Unauthorized,
}

/// Result of a successful check. Stored in request extensions by the middleware.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthorizedToken {
    /// Auth is disabled or no key is configured.
    Bypass,
    /// The presented credential matched the configured key.
    Credential(String),
}

impl AuthorizedToken {
    pub fn is_bypass(&self) -> bool {
        matches!(self, Self::Bypass)
    }
}

// Never print the credential itself.
impl fmt::Debug for AuthorizedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bypass => f.write_str("Bypass"),
            Self::Credential(_) => f.write_str("Credential(<redacted>)"),
        }
    }
}

pub struct ApiKeyGuard {
    enabled: bool,
    secret: Option<String>,
}

impl fmt::Debug for ApiKeyGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyGuard")
            .field("enabled", &self.enabled)
            .field("secret_configured", &self.secret.is_some())
            .finish()
    }
}

impl ApiKeyGuard {
    pub fn new(enabled: bool, secret: Option<String>) -> Self {
        Self {
            enabled,
            secret: secret.filter(|s| !s.is_empty()),
        }
    }

    /// False when every request would be let through.
    pub fn is_enforcing(&self) -> bool {
        self.enabled && self.secret.is_some()
    }

    pub fn authorize(&self, presented: Option<&str>) -> Result<AuthorizedToken, AuthError> {
        let secret = match &self.secret {
            Some(secret) if self.enabled => secret,
            _ => return Ok(AuthorizedToken::Bypass),
        };

        let presented = presented.ok_or(AuthError::Unauthorized)?;

        if presented.as_bytes().ct_eq(secret.as_bytes()).into() {
            Ok(AuthorizedToken::Credential(presented.to_string()))
        } else {
            Err(AuthError::Unauthorized)
        }
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// Only the `Bearer` scheme (any case) is accepted. Anything else, including an
/// empty token, counts as no credential.
pub fn parse_bearer(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    if token.is_empty() { None } else { Some(token) }
}
