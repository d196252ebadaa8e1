use tracing::{info, warn};

use crate::{
    auth::dto::{AuthResponse, SignUpEmailRequest},
    signup::{
        client::AuthClient,
        validate::{validate_sign_up, ValidationError},
    },
};

/// Shown for every remote failure, whatever the cause.
pub const GENERIC_ERROR: &str = "Something went wrong";
pub const SUCCESS_ACK: &str = "Success";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    /// A validation rule failed; nothing was sent.
    Invalid(ValidationError),
    /// The authentication client reported an error.
    Failed,
    Succeeded(AuthResponse),
}

impl SubmitOutcome {
    /// Text for the blocking acknowledgment shown after a successful sign-up.
    pub fn acknowledgement(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Succeeded(_) => Some(SUCCESS_ACK),
            _ => None,
        }
    }
}

/// Transient state of the sign-up page.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input change. Typing into any field dismisses the current error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
        self.error = None;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    pub fn validate(&mut self) -> Result<(), ValidationError> {
        validate_sign_up(&self.name, &self.email, &self.password, &self.confirm_password).map_err(|e| {
            self.error = Some(e.to_string());
            e
        })
    }

    /// Validates, then hands the input to `client`. The request cannot be
    /// cancelled once sent.
    pub async fn submit<C>(&mut self, client: &C) -> SubmitOutcome
    where
        C: AuthClient + ?Sized,
    {
        if let Err(e) = self.validate() {
            return SubmitOutcome::Invalid(e);
        }

        self.is_loading = true;
        self.error = None;

        let request = SignUpEmailRequest {
            email: self.email.clone(),
            name: self.name.clone(),
            password: self.password.clone(),
        };

        match client.sign_up_email(request).await {
            Ok(res) => {
                self.error = None;
                self.is_loading = false;
                info!(user_id = %res.user.id, "signed up");
                SubmitOutcome::Succeeded(res)
            }
            Err(e) => {
                warn!(error = %e, "sign-up failed");
                self.error = Some(GENERIC_ERROR.to_string());
                self.is_loading = false;
                SubmitOutcome::Failed
            }
        }
    }
}
