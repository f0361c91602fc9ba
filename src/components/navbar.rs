//! Top navigation bar for the protected views.
//!
//! On narrow screens the links collapse behind a menu toggle; choosing a
//! link or logging out closes it again.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{NAV_ROUTES, Route};
use crate::util::auth::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let current = move || Route::from_path(&pathname.get());

    let on_logout = move |_| {
        menu_open.set(false);
        auth.logout(&navigate);
    };

    view! {
        <nav class="navbar" class:navbar--open=move || menu_open.get()>
            <span class="navbar__brand">"Lumi Energia"</span>
            <button
                class="navbar__menu-toggle"
                title="Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="navbar__links">
                {NAV_ROUTES
                    .into_iter()
                    .map(|route| {
                        view! {
                            <span
                                class="navbar__link"
                                class:navbar__link--active=move || current() == Some(route)
                                on:click=move |_| menu_open.set(false)
                            >
                                <A href=route.path()>{route.label()}</A>
                            </span>
                        }
                    })
                    .collect_view()}
                <button class="btn navbar__logout" on:click=on_logout>
                    "Sair"
                </button>
            </div>
        </nav>
    }
}
