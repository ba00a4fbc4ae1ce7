//! Bearer-token authentication.
//!
//! Tokens are HS256 JWTs signed with the configured secret; the `sub` claim is
//! the actor id. Handlers receive the authenticated actor through the
//! [`AuthActor`] extractor, which rejects missing, malformed or expired tokens
//! with 401 before the handler body runs.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vidgate_core::AppError;

use crate::error::HttpAppError;
use crate::state::AppState;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: Uuid, // actor id
    pub exp: i64,  // expiration timestamp
    pub iat: i64,  // issued at timestamp
}

/// HS256 token service over the shared secret.
#[derive(Clone)]
pub struct JwtService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        JwtService {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for an actor. Used by tests and token provisioning tools;
    /// the upload pipeline itself only validates.
    pub fn issue(&self, actor_id: Uuid, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: actor_id,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Validate a token and return the actor id.
    pub fn validate(&self, token: &str) -> Result<Uuid, AppError> {
        let data = decode::<JwtClaims>(
            token,
            &self.decoding,
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;
        Ok(data.claims.sub)
    }
}

/// Authenticated actor extracted from the Authorization header.
#[derive(Debug, Clone, Copy)]
pub struct AuthActor(pub Uuid);

impl FromRequestParts<Arc<AppState>> for AuthActor {
    type Rejection = HttpAppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing Authorization header".to_string(),
                ))
            })?;

        let token = header_value.strip_prefix("Bearer ").ok_or_else(|| {
            HttpAppError(AppError::Unauthorized(
                "Authorization header must be a Bearer token".to_string(),
            ))
        })?;

        let actor_id = state.jwt.validate(token)?;
        Ok(AuthActor(actor_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_validate_round_trips() {
        let service = JwtService::new("test-secret");
        let actor = Uuid::new_v4();
        let token = service.issue(actor, Duration::hours(1)).unwrap();
        assert_eq!(service.validate(&token).unwrap(), actor);
    }

    #[test]
    fn expired_token_is_rejected() {
        let service = JwtService::new("test-secret");
        let token = service
            .issue(Uuid::new_v4(), Duration::seconds(-120))
            .unwrap();
        let err = service.validate(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = JwtService::new("secret-a");
        let verifier = JwtService::new("secret-b");
        let token = issuer.issue(Uuid::new_v4(), Duration::hours(1)).unwrap();
        assert!(verifier.validate(&token).is_err());
    }
}
