//! Request credential checks.
//!
//! [`FixedToken`] compares a header against a literal value. It is a
//! placeholder, not a credential scheme, and must not guard anything real.

use axum::http::HeaderMap;

pub trait CredentialCheck: Send + Sync {
    /// Returns `true` when the request may proceed.
    fn verify(&self, headers: &HeaderMap) -> bool;
}

/// Accepts a request only when `header` is present and equals `expected`.
#[derive(Debug, Clone)]
pub struct FixedToken {
    header: String,
    expected: String,
}

impl FixedToken {
    pub fn new(header: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            expected: expected.into(),
        }
    }
}

impl CredentialCheck for FixedToken {
    fn verify(&self, headers: &HeaderMap) -> bool {
        headers
            .get(self.header.as_str())
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == self.expected)
    }
}
