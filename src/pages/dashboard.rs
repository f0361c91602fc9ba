//! Dashboard page: headline totals and monthly series for a filter selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected landing route. On mount it issues the primary fetch (summary
//! plus both series) and the customer list side by side. Filters only reach
//! the backend through Aplicar/Limpar; each fetch takes a ticket so a slow
//! answer for old filters is dropped.

use leptos::prelude::*;

use crate::components::cliente_select::ClienteSelect;
use crate::components::filter_actions::FilterActions;
use crate::components::series_chart::SeriesChart;
use crate::components::summary_card::SummaryCard;
use crate::net::http::{ApiClient, use_api};
use crate::pages::spawn_clientes_load;
use crate::state::clientes::ClientesState;
use crate::state::dashboard::{DashboardData, energy_chart, financial_chart, summary_cards};
use crate::state::fetch::{FetchState, FetchTicket};
use crate::state::filters::DashboardFilters;
use crate::util::format::{format_kwh, format_money};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = use_api();
    let filters = RwSignal::new(DashboardFilters::default());
    let clientes = RwSignal::new(ClientesState::default());
    let mut initial_state = FetchState::<DashboardData>::default();
    let initial = initial_state.begin(Vec::new());
    let data = RwSignal::new(initial_state);

    spawn_clientes_load(client, clientes);
    load_dashboard(client, data, initial);

    let on_apply = Callback::new(move |()| {
        if let Some(ticket) = data.try_update(|d| filters.with_untracked(|f| d.apply_filters(f))) {
            load_dashboard(client, data, ticket);
        }
    });
    let on_clear = Callback::new(move |()| {
        let ticket = filters.try_update(|f| data.try_update(|d| d.clear_filters(f))).flatten();
        if let Some(ticket) = ticket {
            load_dashboard(client, data, ticket);
        }
    });

    view! {
        <div class="page dashboard-page">
            <h2 class="page__title">"Dashboard de Energia"</h2>

            <div class="filter-bar">
                <ClienteSelect
                    clientes=clientes
                    value=Signal::derive(move || filters.with(|f| f.cliente_id.clone()))
                    on_change=Callback::new(move |id: String| filters.update(|f| f.cliente_id = id))
                />
                <label class="filter-field">
                    <span class="filter-field__label">"Data Início (MM/YYYY)"</span>
                    <input
                        class="filter-field__input"
                        placeholder="MM/YYYY"
                        prop:value=move || filters.with(|f| f.data_inicio.clone())
                        on:input=move |ev| filters.update(|f| f.data_inicio = event_target_value(&ev))
                    />
                </label>
                <label class="filter-field">
                    <span class="filter-field__label">"Data Fim (MM/YYYY)"</span>
                    <input
                        class="filter-field__input"
                        placeholder="MM/YYYY"
                        prop:value=move || filters.with(|f| f.data_fim.clone())
                        on:input=move |ev| filters.update(|f| f.data_fim = event_target_value(&ev))
                    />
                </label>
                <FilterActions
                    busy=Signal::derive(move || data.with(FetchState::is_loading))
                    on_apply=on_apply
                    on_clear=on_clear
                />
            </div>

            {move || {
                data.with(|d| {
                    if d.is_loading() {
                        return view! { <p class="page__loading">"Carregando..."</p> }.into_any();
                    }
                    if let Some(message) = d.error() {
                        return view! { <p class="page__error">{message.to_owned()}</p> }.into_any();
                    }
                    match d.data() {
                        Some(loaded) => dashboard_content(loaded.clone()).into_any(),
                        None => ().into_any(),
                    }
                })
            }}
        </div>
    }
}

fn dashboard_content(data: DashboardData) -> impl IntoView {
    let cards = summary_cards(&data.summary);
    let energy = energy_chart(&data.energy);
    let financial = financial_chart(&data.financial);

    view! {
        <div class="summary-grid">
            {cards.into_iter().map(|card| view! { <SummaryCard card=card /> }).collect_view()}
        </div>
        <div class="chart-grid">
            <SeriesChart title="Consumo vs Compensação" rows=energy format_value=format_kwh />
            <SeriesChart title="Evolução Financeira" rows=financial format_value=format_money />
        </div>
    }
}

/// Run the primary fetch for `ticket` and apply it unless superseded.
fn load_dashboard(client: ApiClient, data: RwSignal<FetchState<DashboardData>>, ticket: FetchTicket) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_dashboard(client, &ticket.query)
            .await
            .map_err(|err| {
                log::error!("dashboard load failed: {err}");
                crate::state::dashboard::DASHBOARD_LOAD_ERROR.to_owned()
            });
        if data.try_update(|d| d.finish(ticket.seq, outcome)) == Some(false) {
            log::debug!("dropped stale dashboard response #{}", ticket.seq);
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, data, ticket);
    }
}
