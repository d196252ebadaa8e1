//! Client-side sign-up page: form state, validation and the view derived
//! from it.

pub mod client;
pub mod form;
pub mod validate;
pub mod view;

pub use client::{AuthClient, AuthClientError, HttpAuthClient};
pub use form::{Field, SignUpForm, SubmitOutcome};
pub use validate::{validate_registration, validate_sign_up, ValidationError};
pub use view::PageView;
