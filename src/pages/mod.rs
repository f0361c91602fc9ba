//! Route-level views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page owns its view-local signals (filters, fetch state, action
//! markers), so remounting a route always starts from a fresh state. Only
//! the session is shared, through `AuthContext`.

pub mod dashboard;
pub mod faturas;
pub mod login;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::state::clientes::ClientesState;

/// Secondary fetch feeding the customer select. Failures are logged and
/// leave the list empty; they never touch the page's primary state.
pub(crate) fn spawn_clientes_load(client: ApiClient, clientes: RwSignal<ClientesState>) {
    clientes.update(ClientesState::begin);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_clientes(client).await;
        if let Some(Some(err)) = clientes.try_update(|c| c.finish(outcome)) {
            log::warn!("failed to load clientes: {err}");
        }
    });
    #[cfg(not(feature = "csr"))]
    let _ = client;
}
