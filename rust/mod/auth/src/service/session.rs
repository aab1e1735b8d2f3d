use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use campus_core::new_id;
use campus_store::{Value, docs};

use crate::model::{Claims, Identity, Session};
use crate::service::{AuthError, AuthService, password};

impl AuthService {
    /// Verify credentials and issue a token.
    ///
    /// The same message covers unknown email and wrong password so the
    /// login endpoint cannot be used to probe registered emails.
    pub fn login(&self, email: &str, pass: &str) -> Result<(String, Identity), AuthError> {
        if email.is_empty() || pass.is_empty() {
            return Err(AuthError::Validation(
                "Please provide email and password".into(),
            ));
        }
        let (identity, hash) = self
            .find_identity_by_email(email)?
            .ok_or_else(|| AuthError::Unauthorized("Invalid email or password".into()))?;
        if !password::verify_password(pass, &hash) {
            return Err(AuthError::Unauthorized("Invalid email or password".into()));
        }
        let token = self.issue_token(&identity)?;
        Ok((token, identity))
    }

    /// Sign a JWT for an identity and record the session.
    pub fn issue_token(&self, identity: &Identity) -> Result<String, AuthError> {
        let session_id = new_id();
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::seconds(self.config.token_ttl);

        let claims = Claims {
            sub: identity.id.clone(),
            role: identity.role,
            sid: session_id.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("JWT encode failed: {e}")))?;

        let session = Session {
            id: session_id,
            identity_id: identity.id.clone(),
            issued_at: now.to_rfc3339(),
            expires_at: exp.to_rfc3339(),
            revoked: false,
        };
        docs::insert_doc(
            self.store.as_ref(),
            "sessions",
            &session.id,
            &[
                ("identity_id", Value::Text(session.identity_id.clone())),
                ("revoked", Value::Integer(0)),
                ("created_at", Value::Text(session.issued_at.clone())),
                ("expires_at", Value::Text(session.expires_at.clone())),
            ],
            &session,
        )?;

        Ok(token)
    }

    /// Verify and decode a token. Rejects expired tokens and revoked
    /// sessions.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::Unauthorized(format!("Invalid token: {e}")))?;

        let claims = token_data.claims;

        let session: Option<Session> = docs::get_doc(self.store.as_ref(), "sessions", &claims.sid)?;
        if let Some(session) = session {
            if session.revoked {
                return Err(AuthError::Unauthorized("Session has been revoked".into()));
            }
        }

        Ok(claims)
    }

    /// Revoke a session; its token stops verifying immediately.
    pub fn revoke_session(&self, session_id: &str) -> Result<(), AuthError> {
        let mut session: Session = docs::get_doc(self.store.as_ref(), "sessions", session_id)?
            .ok_or_else(|| AuthError::NotFound(format!("session {session_id}")))?;
        session.revoked = true;
        docs::update_doc(
            self.store.as_ref(),
            "sessions",
            session_id,
            &[("revoked", Value::Integer(1))],
            &session,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use campus_store::SqliteStore;

    use super::*;
    use crate::model::{RegisterIdentity, Role};
    use crate::service::AuthConfig;

    fn test_service() -> Arc<AuthService> {
        let store = Arc::new(SqliteStore::open_in_memory().unwrap());
        AuthService::new(store, AuthConfig::default()).unwrap()
    }

    fn register(svc: &AuthService, email: &str) -> Identity {
        svc.register_identity(RegisterIdentity {
            name: "Asha".into(),
            email: email.into(),
            password: "pass1234".into(),
            role: "student".into(),
            department: None,
            class_group: None,
            batch: None,
            year: None,
        })
        .unwrap()
    }

    #[test]
    fn test_login_and_verify() {
        let svc = test_service();
        let identity = register(&svc, "asha@campus.edu");

        let (token, returned) = svc.login("asha@campus.edu", "pass1234").unwrap();
        assert_eq!(returned.id, identity.id);

        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.sub, identity.id);
        assert_eq!(claims.role, Role::Student);
        // 7-day expiry.
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_login_wrong_password() {
        let svc = test_service();
        register(&svc, "asha@campus.edu");

        let err = svc.login("asha@campus.edu", "nope").unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));

        // Unknown email gets the same class of error.
        let err = svc.login("ghost@campus.edu", "pass1234").unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized(_)));
    }

    #[test]
    fn test_revoked_session_rejected() {
        let svc = test_service();
        register(&svc, "asha@campus.edu");
        let (token, _) = svc.login("asha@campus.edu", "pass1234").unwrap();

        let claims = svc.verify_token(&token).unwrap();
        svc.revoke_session(&claims.sid).unwrap();
        assert!(svc.verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let svc = test_service();
        assert!(svc.verify_token("this.is.not.a.jwt").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let svc = test_service();
        let identity = register(&svc, "asha@campus.edu");
        let token = svc.issue_token(&identity).unwrap();

        let other = AuthService::new(
            Arc::new(SqliteStore::open_in_memory().unwrap()),
            AuthConfig {
                jwt_secret: "different-secret".into(),
                ..AuthConfig::default()
            },
        )
        .unwrap();
        assert!(other.verify_token(&token).is_err());
    }
}
