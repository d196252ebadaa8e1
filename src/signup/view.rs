//! What the sign-up page shows for a given form state.

use crate::signup::{
    form::{Field, SignUpForm},
    validate::PASSWORD_MIN_LEN,
};

pub const SIGN_IN_HREF: &str = "/signin";
pub const TERMS_HREF: &str = "/terms";
pub const PRIVACY_HREF: &str = "/privacy";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
        }
    }

    fn secret(visible: bool) -> Self {
        if visible {
            InputType::Text
        } else {
            InputType::Password
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: Field,
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub input_type: InputType,
    pub value: String,
    pub disabled: bool,
    /// Only the password fields carry a show/hide toggle.
    pub visibility_toggle: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Social sign-up buttons. Rendered only; no handler is wired to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    GitHub,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Google, SocialProvider::GitHub];

    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::GitHub => "GitHub",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialButton {
    pub provider: SocialProvider,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: &'static str,
    pub alert: Option<String>,
    pub fields: Vec<FieldView>,
    pub password_hint: String,
    pub submit_label: &'static str,
    pub submit_disabled: bool,
    pub show_spinner: bool,
    pub sign_in: Link,
    pub social_buttons: Vec<SocialButton>,
    pub legal_links: [Link; 2],
}

impl PageView {
    pub fn of(form: &SignUpForm) -> Self {
        let loading = form.is_loading;
        let field = |field, id, label, placeholder, input_type, value: &str, toggle| FieldView {
            field,
            id,
            label,
            placeholder,
            input_type,
            value: value.to_string(),
            disabled: loading,
            visibility_toggle: toggle,
        };

        Self {
            title: "Create Account",
            alert: form.error.clone().filter(|e| !e.is_empty()),
            fields: vec![
                field(Field::Name, "name", "Full Name", "Enter your full name", InputType::Text, &form.name, None),
                field(Field::Email, "email", "Email", "Enter your email", InputType::Email, &form.email, None),
                field(
                    Field::Password,
                    "password",
                    "Password",
                    "Create a password",
                    InputType::secret(form.show_password),
                    &form.password,
                    Some(form.show_password),
                ),
                field(
                    Field::ConfirmPassword,
                    "confirmPassword",
                    "Confirm Password",
                    "Confirm your password",
                    InputType::secret(form.show_confirm_password),
                    &form.confirm_password,
                    Some(form.show_confirm_password),
                ),
            ],
            password_hint: format!("Password must be at least {PASSWORD_MIN_LEN} characters long"),
            submit_label: if loading {
                "Creating Account..."
            } else {
                "Create Account"
            },
            submit_disabled: loading,
            show_spinner: loading,
            sign_in: Link {
                label: "Sign in",
                href: SIGN_IN_HREF,
            },
            social_buttons: SocialProvider::ALL
                .into_iter()
                .map(|provider| SocialButton {
                    provider,
                    disabled: loading,
                })
                .collect(),
            legal_links: [
                Link {
                    label: "Terms of Service",
                    href: TERMS_HREF,
                },
                Link {
                    label: "Privacy Policy",
                    href: PRIVACY_HREF,
                },
            ],
        }
    }

    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_form() {
        let view = PageView::of(&SignUpForm::new());
        assert_eq!(view.alert, None);
        assert!(view.fields.iter().all(|f| !f.disabled));
        assert!(!view.submit_disabled);
        assert_eq!(view.submit_label, "Create Account");
        assert_eq!(view.password_hint, "Password must be at least 8 characters long");
        assert!(view.social_buttons.iter().all(|b| !b.disabled));
    }

    #[test]
    fn fields_carry_labels_and_placeholders() {
        let mut form = SignUpForm::new();
        form.set(Field::Email, "ada@example.com");
        let view = PageView::of(&form);

        let labels: Vec<_> = view.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, ["Full Name", "Email", "Password", "Confirm Password"]);

        let email = view.field(Field::Email).unwrap();
        assert_eq!(email.id, "email");
        assert_eq!(email.placeholder, "Enter your email");
        assert_eq!(email.input_type.as_str(), "email");
        assert_eq!(email.value, "ada@example.com");
        assert_eq!(email.visibility_toggle, None);

        let confirm = view.field(Field::ConfirmPassword).unwrap();
        assert_eq!(confirm.id, "confirmPassword");
        assert_eq!(confirm.placeholder, "Confirm your password");
    }

    #[test]
    fn links_point_at_external_routes() {
        let view = PageView::of(&SignUpForm::new());
        assert_eq!(view.sign_in, Link { label: "Sign in", href: "/signin" });
        assert_eq!(
            view.legal_links.map(|l| l.href),
            ["/terms", "/privacy"]
        );
        assert_eq!(view.legal_links[0].label, "Terms of Service");
    }

    #[test]
    fn loading_disables_everything() {
        let form = SignUpForm {
            is_loading: true,
            ..SignUpForm::new()
        };
        let view = PageView::of(&form);
        assert!(view.fields.iter().all(|f| f.disabled));
        assert!(view.submit_disabled);
        assert!(view.show_spinner);
        assert_eq!(view.submit_label, "Creating Account...");
        assert!(view.social_buttons.iter().all(|b| b.disabled));
        assert_eq!(
            view.social_buttons.iter().map(|b| b.provider.label()).collect::<Vec<_>>(),
            ["Google", "GitHub"]
        );
    }

    #[test]
    fn toggles_switch_input_types_independently() {
        let mut form = SignUpForm::new();
        form.toggle_confirm_password_visibility();
        let view = PageView::of(&form);

        let password = view.field(Field::Password).unwrap();
        assert_eq!(password.input_type, InputType::Password);
        assert_eq!(password.visibility_toggle, Some(false));

        let confirm = view.field(Field::ConfirmPassword).unwrap();
        assert_eq!(confirm.input_type, InputType::Text);
        assert_eq!(confirm.visibility_toggle, Some(true));
    }

    #[test]
    fn alert_follows_error() {
        let form = SignUpForm {
            error: Some("Passwords do not match".into()),
            ..SignUpForm::new()
        };
        assert_eq!(PageView::of(&form).alert.as_deref(), Some("Passwords do not match"));
    }
}
