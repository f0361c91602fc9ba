//! Apply/clear buttons closing a filter bar.

use leptos::prelude::*;

#[component]
pub fn FilterActions(
    #[prop(into)] busy: Signal<bool>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-actions">
            <button
                class="btn btn--primary"
                type="button"
                disabled=move || busy.get()
                on:click=move |_| on_apply.run(())
            >
                "Aplicar"
            </button>
            <button
                class="btn"
                type="button"
                disabled=move || busy.get()
                on:click=move |_| on_clear.run(())
            >
                "Limpar"
            </button>
        </div>
    }
}
