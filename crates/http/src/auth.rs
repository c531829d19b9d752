//! Bearer-token gate for protected routes.
//!
//! The secret is handed to the router at construction time; each route group
//! is either wrapped with [`require_bearer`] or left public according to its
//! [`RouteAccess`].

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::api_error::ApiError;

/// Whether a route group needs the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected,
}

impl RouteAccess {
    #[must_use]
    pub const fn protected_if(flag: bool) -> Self {
        if flag { Self::Protected } else { Self::Public }
    }
}

/// Authentication settings injected into the router.
#[derive(Clone)]
pub struct AuthConfig {
    token: Arc<str>,
    /// Access for `GET /facts/all` and `GET /budgets/all`.
    pub list_access: RouteAccess,
}

impl AuthConfig {
    #[must_use]
    pub fn new(token: impl Into<Arc<str>>, list_access: RouteAccess) -> Self {
        Self { token: token.into(), list_access }
    }

    /// Checks a raw `Authorization` header value.
    #[must_use]
    pub fn accepts(&self, authorization: &str) -> bool {
        bearer_token(authorization)
            .is_some_and(|presented| tokens_match(presented.as_bytes(), self.token.as_bytes()))
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &"<redacted>")
            .field("list_access", &self.list_access)
            .finish()
    }
}

/// Extracts the credential from `Bearer <token>`; the scheme is case-insensitive.
fn bearer_token(authorization: &str) -> Option<&str> {
    let (scheme, token) = authorization.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Compares every byte regardless of where the first mismatch is.
fn tokens_match(presented: &[u8], expected: &[u8]) -> bool {
    if presented.len() != expected.len() {
        return false;
    }
    presented.iter().zip(expected).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
}

/// Middleware rejecting requests without a valid bearer token.
///
/// Runs before body extraction and before any storage access, so a rejected
/// caller learns nothing about which conversation ids exist.
pub async fn require_bearer(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(value) = request.headers().get(header::AUTHORIZATION) else {
        tracing::debug!(path = %request.uri().path(), "missing authorization header");
        return Err(ApiError::Unauthorized("Not authenticated"));
    };
    let accepted = value.to_str().is_ok_and(|v| auth.accepts(v));
    if !accepted {
        tracing::debug!(path = %request.uri().path(), "invalid bearer token");
        return Err(ApiError::Unauthorized("Invalid authentication token"));
    }
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_matching_token() {
        let auth = AuthConfig::new("s3cret", RouteAccess::Protected);
        assert!(auth.accepts("Bearer s3cret"));
        assert!(auth.accepts("bearer s3cret"));
    }

    #[test]
    fn test_rejects_wrong_or_malformed_credentials() {
        let auth = AuthConfig::new("s3cret", RouteAccess::Protected);
        assert!(!auth.accepts("Bearer s3cre"));
        assert!(!auth.accepts("Bearer s3cret-and-more"));
        assert!(!auth.accepts("Basic s3cret"));
        assert!(!auth.accepts("s3cret"));
        assert!(!auth.accepts("Bearer "));
        assert!(!auth.accepts(""));
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = AuthConfig::new("s3cret", RouteAccess::Public);
        assert!(!format!("{auth:?}").contains("s3cret"));
    }

    #[test]
    fn test_protected_if() {
        assert_eq!(RouteAccess::protected_if(true), RouteAccess::Protected);
        assert_eq!(RouteAccess::protected_if(false), RouteAccess::Public);
    }
}
