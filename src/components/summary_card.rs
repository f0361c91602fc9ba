use leptos::prelude::*;

use crate::state::dashboard::SummaryCard as CardData;

/// Headline total on the dashboard.
#[component]
pub fn SummaryCard(card: CardData) -> impl IntoView {
    view! {
        <div class="summary-card">
            <span class="summary-card__title">{card.title}</span>
            <span class="summary-card__value">{card.value}</span>
        </div>
    }
}
