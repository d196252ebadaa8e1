//! Session tokens handed out on sign-up and sign-in.
//!
//! A session is a signed JWT whose claims carry the user's id and email; the
//! bearer of a valid token is that user until `exp`.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{auth::error::AuthError, config::SessionConfig, state::AppState, users::User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: Uuid,
    pub email: String,
    pub iss: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub expires_at: OffsetDateTime,
}

#[derive(Clone)]
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    issuer: String,
    audience: String,
    ttl: Duration,
}

impl SessionSigner {
    pub fn new(cfg: &SessionConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&cfg.issuer]);
        validation.set_audience(&[&cfg.audience]);
        validation.set_required_spec_claims(&["exp", "sub", "iss", "aud"]);

        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            validation,
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl: Duration::seconds(cfg.ttl_minutes.max(0).saturating_mul(60)),
        }
    }

    pub fn issue(&self, user: &User) -> Result<Session, AuthError> {
        let now = OffsetDateTime::now_utc();
        let expires_at = now
            .checked_add(self.ttl)
            .ok_or_else(|| anyhow::anyhow!("session lifetime out of range"))?;

        let claims = SessionClaims {
            sub: user.id,
            email: user.email.clone(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now.unix_timestamp(),
            exp: expires_at.unix_timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(anyhow::Error::from)?;
        debug!(user_id = %user.id, %expires_at, "session issued");

        Ok(Session { token, expires_at })
    }

    pub fn authenticate(&self, token: &str) -> Result<SessionClaims, AuthError> {
        decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                warn!(error = %e, "session rejected");
                AuthError::Unauthorized("Invalid or expired session".into())
            })
    }
}

impl FromRef<AppState> for SessionSigner {
    fn from_ref(state: &AppState) -> Self {
        Self::new(&state.config.session)
    }
}

/// Token from an `Authorization: Bearer <token>` header; the scheme is
/// matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AuthError::Unauthorized("Missing Authorization header".into()))?;

    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err(AuthError::Unauthorized("Invalid Authorization header".into())),
    }
}

/// The signed-in user behind the request's session token.
pub struct SessionUser(pub SessionClaims);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    SessionSigner: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        SessionSigner::from_ref(state).authenticate(token).map(SessionUser)
    }
}
