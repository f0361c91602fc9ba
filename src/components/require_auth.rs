//! Route guard wrapping every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the parent of `/dashboard` and `/faturas`. The guard re-reads
//! the session reactively, so a `401` teardown anywhere in the app sends the
//! user back to `/login` without the failing page having to navigate.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use crate::components::navbar::Navbar;
use crate::util::auth::{GuardDecision, use_auth};

/// Render the protected shell, or follow the redirect the session calls for.
#[component]
pub fn RequireAuth() -> impl IntoView {
    let auth = use_auth();
    // Re-runs only when the decision itself changes.
    let decision = Memo::new(move |_| auth.decision());

    move || match decision.get() {
        GuardDecision::Render => view! {
            <div class="app-shell">
                <Navbar />
                <main class="app-shell__content">
                    <Outlet />
                </main>
            </div>
        }
        .into_any(),
        redirect @ GuardDecision::Redirect { to, .. } => {
            view! { <Redirect path=to.path() options=redirect.navigate_options() /> }.into_any()
        }
    }
}
