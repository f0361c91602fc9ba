//! Login page: email + password exchanged for a bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. An authenticated visitor is redirected straight to
//! `/dashboard`. Submission is validated locally first; any backend
//! rejection collapses into one fixed message so the form never reveals
//! which credential was wrong.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
#[cfg(feature = "csr")]
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::routes::Route;
use crate::util::auth::{replace_options, use_auth};

pub const EMPTY_FIELDS_MESSAGE: &str = "Por favor preencha todos os campos";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciais inválidas";

/// Credentials ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Trim the email and require both fields. The password is sent verbatim.
///
/// # Errors
///
/// [`ApiError::Validation`] when either field is empty.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, ApiError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(EMPTY_FIELDS_MESSAGE));
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Submitting,
    Failed(&'static str),
}

/// Form-level state machine: `idle → submitting → (success | failed)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub status: LoginStatus,
}

impl LoginForm {
    pub fn is_submitting(&self) -> bool {
        self.status == LoginStatus::Submitting
    }

    pub fn error(&self) -> Option<&'static str> {
        match self.status {
            LoginStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Validate and enter `Submitting`. Returns the credentials to send, or
    /// `None` when the form is invalid or already submitting.
    pub fn begin_submit(&mut self, email: &str, password: &str) -> Option<Credentials> {
        if self.is_submitting() {
            return None;
        }
        match validate_credentials(email, password) {
            Ok(credentials) => {
                self.status = LoginStatus::Submitting;
                Some(credentials)
            }
            Err(err) => {
                self.status = LoginStatus::Failed(validation_message(&err));
                None
            }
        }
    }

    pub fn succeed(&mut self) {
        self.status = LoginStatus::Idle;
    }

    /// Any failed exchange shows the same message.
    pub fn fail(&mut self) {
        self.status = LoginStatus::Failed(INVALID_CREDENTIALS_MESSAGE);
    }
}

fn validation_message(err: &ApiError) -> &'static str {
    match err {
        ApiError::Validation(message) => message,
        _ => INVALID_CREDENTIALS_MESSAGE,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || !auth.is_authenticated()
            fallback=|| view! { <Redirect path=Route::Dashboard.path() options=replace_options() /> }
        >
            <LoginCard />
        </Show>
    }
}

#[component]
fn LoginCard() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form = RwSignal::new(LoginForm::default());
    #[cfg(feature = "csr")]
    let auth = use_auth();
    #[cfg(feature = "csr")]
    let client = crate::net::http::use_api();
    #[cfg(feature = "csr")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form
            .try_update(|f| f.begin_submit(&email.get_untracked(), &password.get_untracked()))
            .flatten()
        else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(client, &credentials.email, &credentials.password).await {
                    Ok(token) => {
                        form.update(LoginForm::succeed);
                        auth.login(token, &navigate);
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        form.update(LoginForm::fail);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = credentials;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login Lumi Energia"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Senha"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || form.with(|f| f.error().is_some())>
                        <p class="login-message login-message--error">
                            {move || form.with(|f| f.error().unwrap_or_default())}
                        </p>
                    </Show>
                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || form.with(LoginForm::is_submitting)
                    >
                        {move || if form.with(LoginForm::is_submitting) { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
