//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::require_auth::RequireAuth;
use crate::config::ApiConfig;
use crate::net::http::provide_api_client;
use crate::pages::{dashboard::DashboardPage, faturas::FaturasPage, login::LoginPage};
use crate::routes::Route as AppRoute;
use crate::state::session::SessionStore;
use crate::util::auth::provide_auth;

/// Root application component.
///
/// Restores the persisted session, provides the session façade and the REST
/// client, and mounts the route table. `/` and unknown paths land on
/// `/dashboard`; the guard takes it from there.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth(SessionStore::browser());
    let config = ApiConfig::from_build_env();
    log::info!("api base url: {}", config.base_url);
    provide_api_client(config, auth);

    view! {
        <Title text="Lumi Energia"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=RequireAuth>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("faturas") view=FaturasPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
