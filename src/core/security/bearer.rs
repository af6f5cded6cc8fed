//! Static bearer-token authentication.
//!
//! A single configured secret is accepted. A matching token yields an
//! [`AccessToken`] grant with no scopes and no expiry; anything else is
//! rejected. Comparison is constant-time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Client identifier attached to every grant. The gate has no notion of clients.
const UNKNOWN_CLIENT: &str = "unknown";

/// Errors produced while authenticating a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Missing authorization header")]
    MissingHeader,

    /// The header did not use the `Bearer` scheme.
    #[error("Authorization header must use the Bearer scheme")]
    UnsupportedScheme,

    /// The presented token does not match the configured secret.
    #[error("Invalid bearer token")]
    InvalidToken,
}

/// Access grant issued for one authenticated request.
#[derive(Clone, Serialize, PartialEq, Eq)]
pub struct AccessToken {
    pub token: String,
    pub client_id: String,
    pub scopes: Vec<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("client_id", &self.client_id)
            .field("scopes", &self.scopes)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Bearer auth provider holding the one accepted secret.
#[derive(Clone)]
pub struct BearerAuth {
    secret: String,
}

impl BearerAuth {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Issue a grant if `token` equals the configured secret.
    pub fn load_access_token(&self, token: &str) -> Option<AccessToken> {
        let matches: bool = token.as_bytes().ct_eq(self.secret.as_bytes()).into();
        matches.then(|| AccessToken {
            token: token.to_string(),
            client_id: UNKNOWN_CLIENT.to_string(),
            scopes: Vec::new(),
            expires_at: None,
        })
    }

    /// Authenticate the raw value of an `Authorization` header.
    pub fn authorize(&self, header: Option<&str>) -> Result<AccessToken, AuthError> {
        let header = header.ok_or(AuthError::MissingHeader)?;
        let token = extract_bearer(header).ok_or(AuthError::UnsupportedScheme)?;
        self.load_access_token(token).ok_or(AuthError::InvalidToken)
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme is matched case-insensitively.
fn extract_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    scheme
        .eq_ignore_ascii_case("bearer")
        .then(|| token.trim())
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> BearerAuth {
        BearerAuth::new("ca56dc8dffc0")
    }

    #[test]
    fn test_matching_token_is_granted() {
        let grant = auth().load_access_token("ca56dc8dffc0").unwrap();
        assert_eq!(grant.token, "ca56dc8dffc0");
        assert_eq!(grant.client_id, "unknown");
        assert!(grant.scopes.is_empty());
        assert!(grant.expires_at.is_none());
    }

    #[test]
    fn test_other_tokens_are_denied() {
        let auth = auth();
        for token in ["", "ca56dc8dffc", "ca56dc8dffc00", "CA56DC8DFFC0", " ca56dc8dffc0"] {
            assert!(auth.load_access_token(token).is_none(), "accepted {token:?}");
        }
    }

    #[test]
    fn test_authorize_header() {
        let auth = auth();
        assert!(auth.authorize(Some("Bearer ca56dc8dffc0")).is_ok());
        assert!(auth.authorize(Some("bearer ca56dc8dffc0")).is_ok());
        assert_eq!(auth.authorize(None), Err(AuthError::MissingHeader));
        assert_eq!(
            auth.authorize(Some("Basic ca56dc8dffc0")),
            Err(AuthError::UnsupportedScheme)
        );
        assert_eq!(auth.authorize(Some("Bearer")), Err(AuthError::UnsupportedScheme));
        assert_eq!(
            auth.authorize(Some("Bearer wrong")),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let grant = auth().load_access_token("ca56dc8dffc0").unwrap();
        let debug_str = format!("{:?} {:?}", grant, auth());
        assert!(!debug_str.contains("ca56dc8dffc0"));
    }
}
