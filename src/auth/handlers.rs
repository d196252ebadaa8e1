use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use crate::{
    auth::{
        dto::{AuthResponse, PublicUser, SignInEmailRequest, SignUpEmailRequest},
        error::AuthError,
        service,
        session::{SessionSigner, SessionUser},
    },
    state::AppState,
    users::ProfileUpdate,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up/email", post(sign_up_email))
        .route("/auth/sign-in/email", post(sign_in_email))
}

pub fn me_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_me).patch(patch_me))
}

#[instrument(skip_all)]
pub async fn sign_up_email(
    State(state): State<AppState>,
    State(signer): State<SessionSigner>,
    Json(payload): Json<SignUpEmailRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    service::sign_up_email(state.users.as_ref(), &signer, payload)
        .await
        .map(Json)
}

#[instrument(skip_all)]
pub async fn sign_in_email(
    State(state): State<AppState>,
    State(signer): State<SessionSigner>,
    Json(payload): Json<SignInEmailRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    service::sign_in_email(state.users.as_ref(), &signer, payload)
        .await
        .map(Json)
}

#[instrument(skip_all, fields(user_id = %session.sub))]
pub async fn get_me(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
) -> Result<Json<PublicUser>, AuthError> {
    service::current_user(state.users.as_ref(), session.sub)
        .await
        .map(Json)
}

#[instrument(skip_all, fields(user_id = %session.sub))]
pub async fn patch_me(
    State(state): State<AppState>,
    SessionUser(session): SessionUser,
    Json(payload): Json<ProfileUpdate>,
) -> Result<Json<PublicUser>, AuthError> {
    service::update_profile(state.users.as_ref(), session.sub, payload)
        .await
        .map(Json)
}
