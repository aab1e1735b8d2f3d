//! Bearer authentication middleware.
//!
//! Extracts the JWT from `Authorization: Bearer <token>`, verifies it
//! against the auth service (signature, expiry, session revocation)
//! and resolves the caller's [`Identity`]. Both the claims and the
//! identity land in request extensions; downstream role gates and
//! handlers read the identity from there.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use campus_auth::service::AuthService;
use campus_core::ServiceError;

/// Middleware that authenticates every non-public request.
pub async fn auth_middleware(
    State(auth): State<Arc<AuthService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServiceError> {
    let path = request.uri().path().to_string();

    if is_public_path(&path) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| ServiceError::Unauthorized("Missing authorization token".into()))?;

    let claims = auth.verify_token(token).map_err(ServiceError::from)?;
    let identity = auth
        .get_identity(&claims.sub)
        .map_err(|_| ServiceError::Unauthorized("Token subject no longer exists".into()))?;

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Check if a request path is public (no auth required).
fn is_public_path(path: &str) -> bool {
    matches!(
        path,
        "/health" | "/version" | "/api/v1/auth/register" | "/api/v1/auth/login"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_paths() {
        assert!(is_public_path("/health"));
        assert!(is_public_path("/api/v1/auth/login"));
        assert!(!is_public_path("/api/v1/auth/me"));
        assert!(!is_public_path("/api/v1/messages"));
    }
}
