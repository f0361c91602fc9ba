//! Customer picker shared by both filter bars.

use leptos::prelude::*;

use crate::state::clientes::ClientesState;

/// Select bound to a customer id; the empty option means no customer filter.
#[component]
pub fn ClienteSelect(
    clientes: RwSignal<ClientesState>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="filter-field">
            <span class="filter-field__label">"Número do Cliente"</span>
            <select
                class="filter-field__input"
                disabled=move || clientes.with(|c| c.loading)
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">"Selecione"</option>
                {move || {
                    clientes
                        .with(|c| c.items.clone())
                        .into_iter()
                        .map(|cliente| {
                            view! { <option value=cliente.id>{cliente.num_cliente}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
