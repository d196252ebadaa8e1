use devrank::{
    app::build_app,
    config::AppConfig,
    signup::{Field, HttpAuthClient, PageView, SignUpForm, SubmitOutcome},
    state::AppState,
};

/// Starts the service on an ephemeral port and returns its base URL.
async fn spawn_service() -> String {
    let app = build_app(AppState::in_memory(AppConfig::local("flow-secret")));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn filled(email: &str) -> SignUpForm {
    let mut form = SignUpForm::new();
    form.set(Field::Name, "Linus");
    form.set(Field::Email, email);
    form.set(Field::Password, "penguins!");
    form.set(Field::ConfirmPassword, "penguins!");
    form
}

#[tokio::test]
async fn form_signs_up_against_running_service() {
    let client = HttpAuthClient::new(spawn_service().await);

    let mut form = filled("linus@example.com");
    let outcome = form.submit(&client).await;

    let SubmitOutcome::Succeeded(session) = &outcome else {
        panic!("expected success, got {outcome:?}");
    };
    assert_eq!(session.user.email, "linus@example.com");
    assert_eq!(outcome.acknowledgement(), Some("Success"));

    let view = PageView::of(&form);
    assert_eq!(view.alert, None);
    assert!(view.fields.iter().all(|f| !f.disabled));
    assert_eq!(view.submit_label, "Create Account");
}

#[tokio::test]
async fn remote_rejection_surfaces_generic_error() {
    let client = HttpAuthClient::new(spawn_service().await);

    let mut first = filled("linus@example.com");
    assert!(matches!(first.submit(&client).await, SubmitOutcome::Succeeded(_)));

    let mut second = filled("linus@example.com");
    let outcome = second.submit(&client).await;

    assert!(matches!(outcome, SubmitOutcome::Failed));
    assert!(!second.is_loading);
    assert_eq!(second.error.as_deref(), Some("Something went wrong"));
    assert_eq!(PageView::of(&second).alert.as_deref(), Some("Something went wrong"));
}

#[tokio::test]
async fn unreachable_service_is_a_remote_failure() {
    // nothing listens on the discard port
    let client = HttpAuthClient::new("http://127.0.0.1:9");
    let mut form = filled("linus@example.com");

    assert!(matches!(form.submit(&client).await, SubmitOutcome::Failed));
    assert_eq!(form.error.as_deref(), Some("Something went wrong"));
}
