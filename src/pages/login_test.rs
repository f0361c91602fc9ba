use super::*;

// =============================================================
// validate_credentials
// =============================================================

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  ana@lumi.com ", " s3cret "),
        Ok(Credentials { email: "ana@lumi.com".to_owned(), password: " s3cret ".to_owned() })
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    let expected = Err(ApiError::Validation(EMPTY_FIELDS_MESSAGE));
    assert_eq!(validate_credentials("", "pw"), expected);
    assert_eq!(validate_credentials("   ", "pw"), expected);
    assert_eq!(validate_credentials("ana@lumi.com", ""), expected);
}

// =============================================================
// LoginForm
// =============================================================

#[test]
fn empty_fields_never_begin_submission() {
    let mut form = LoginForm::default();
    assert_eq!(form.begin_submit("", ""), None);
    assert!(!form.is_submitting());
    assert_eq!(form.error(), Some(EMPTY_FIELDS_MESSAGE));
}

#[test]
fn valid_fields_enter_submitting() {
    let mut form = LoginForm::default();
    let credentials = form.begin_submit("ana@lumi.com", "pw").unwrap();
    assert_eq!(credentials.email, "ana@lumi.com");
    assert!(form.is_submitting());
    assert_eq!(form.error(), None);
}

#[test]
fn second_submit_while_submitting_is_ignored() {
    let mut form = LoginForm::default();
    assert!(form.begin_submit("ana@lumi.com", "pw").is_some());
    assert!(form.begin_submit("ana@lumi.com", "pw").is_none());
    assert!(form.is_submitting());
}

#[test]
fn failure_shows_fixed_message_and_allows_retry() {
    let mut form = LoginForm::default();
    form.begin_submit("ana@lumi.com", "wrong");
    form.fail();
    assert_eq!(form.error(), Some(INVALID_CREDENTIALS_MESSAGE));
    assert!(form.begin_submit("ana@lumi.com", "right").is_some());
}

#[test]
fn success_returns_to_idle() {
    let mut form = LoginForm::default();
    form.begin_submit("ana@lumi.com", "pw");
    form.succeed();
    assert_eq!(form.status, LoginStatus::Idle);
}
