use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    auth::{
        dto::{AuthResponse, PublicUser, SignInEmailRequest, SignUpEmailRequest},
        error::AuthError,
        password,
        session::SessionSigner,
    },
    signup::{validate_registration, ValidationError},
    users::{NewUser, ProfileUpdate, User, UserStore},
};

fn start_session(signer: &SessionSigner, user: User) -> Result<AuthResponse, AuthError> {
    let session = signer.issue(&user)?;
    Ok(AuthResponse {
        token: session.token,
        expires_at: session.expires_at,
        user: user.into(),
    })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub async fn sign_up_email(
    users: &dyn UserStore,
    signer: &SessionSigner,
    req: SignUpEmailRequest,
) -> Result<AuthResponse, AuthError> {
    let email = normalize_email(&req.email);
    let name = req.name.trim().to_string();
    if let Err(e) = validate_registration(&name, &email, &req.password) {
        warn!(error = %e, "sign-up rejected");
        return Err(e.into());
    }

    if users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(AuthError::UserExists);
    }

    let hash = password::hash(&req.password)?;
    let user = users
        .create_with_password(NewUser { email, name }, &hash)
        .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    start_session(signer, user)
}

pub async fn sign_in_email(
    users: &dyn UserStore,
    signer: &SessionSigner,
    req: SignInEmailRequest,
) -> Result<AuthResponse, AuthError> {
    let email = normalize_email(&req.email);

    let Some(user) = users.find_by_email(&email).await? else {
        warn!(email = %email, "sign-in unknown email");
        return Err(AuthError::InvalidCredentials);
    };
    let Some(stored) = users.password_hash(user.id).await? else {
        warn!(user_id = %user.id, "sign-in without credential account");
        return Err(AuthError::InvalidCredentials);
    };
    if !password::verify(&req.password, &stored)? {
        warn!(user_id = %user.id, "sign-in invalid password");
        return Err(AuthError::InvalidCredentials);
    }

    info!(user_id = %user.id, "user signed in");
    start_session(signer, user)
}

pub async fn current_user(users: &dyn UserStore, user_id: Uuid) -> Result<PublicUser, AuthError> {
    users
        .find_by_id(user_id)
        .await?
        .map(PublicUser::from)
        .ok_or(AuthError::UserNotFound)
}

pub async fn update_profile(
    users: &dyn UserStore,
    user_id: Uuid,
    mut update: ProfileUpdate,
) -> Result<PublicUser, AuthError> {
    if update.is_empty() {
        return Err(AuthError::BadRequest("Nothing to update"));
    }
    if let Some(name) = update.name.as_mut() {
        *name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::NameRequired.into());
        }
    }

    let user = users
        .update_profile(user_id, update)
        .await?
        .ok_or(AuthError::UserNotFound)?;
    info!(user_id = %user.id, "profile updated");
    Ok(user.into())
}
