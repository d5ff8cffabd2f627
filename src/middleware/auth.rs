use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, request::Parts};
use subtle::ConstantTimeEq;

use crate::error::FolioError;
use crate::router::FolioState;

/// Check the admin key on an inbound request.
/// Accepts either:
/// - Header: `x-admin-key: ...`
/// - Header: `Authorization: Bearer ...`
pub fn ensure_authorized(headers: &HeaderMap, expected: &str) -> Result<(), FolioError> {
    let matches = |candidate: &str| bool::from(candidate.as_bytes().ct_eq(expected.as_bytes()));

    // 1) header: x-admin-key
    if let Some(hv) = headers.get("x-admin-key").and_then(|v| v.to_str().ok())
        && matches(hv.trim())
    {
        return Ok(());
    }

    // 2) header: Authorization: Bearer <key>
    if let Some(auth) = headers.get("authorization").and_then(|v| v.to_str().ok()) {
        let auth = auth.trim();
        if let Some(token) = auth
            .strip_prefix("Bearer ")
            .or_else(|| auth.strip_prefix("bearer "))
            && matches(token.trim())
        {
            return Ok(());
        }
    }

    Err(FolioError::Unauthorized)
}

/// Guards the admin surface when an admin key is configured; open otherwise.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdminKey;

impl FromRequestParts<FolioState> for RequireAdminKey {
    type Rejection = FolioError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &FolioState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(expected) = state.admin_key.as_deref() {
            ensure_authorized(&parts.headers, expected)?;
        }
        Ok(Self)
    }
}
