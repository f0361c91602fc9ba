//! Grouped horizontal bar chart rendered with plain markup.
//!
//! DESIGN
//! ======
//! Bar lengths are percentages precomputed by the dashboard state, so the
//! component only sizes `div`s. Values are printed next to each bar with the
//! caller's formatter.

use leptos::prelude::*;

use crate::state::dashboard::ChartRow;

#[component]
pub fn SeriesChart(
    title: &'static str,
    rows: Vec<ChartRow>,
    format_value: fn(f64) -> String,
) -> impl IntoView {
    let empty = rows.is_empty();

    view! {
        <section class="chart">
            <h3 class="chart__title">{title}</h3>
            <Show when=move || empty>
                <p class="chart__empty">"Sem dados para o período"</p>
            </Show>
            {rows
                .into_iter()
                .map(|row| {
                    view! {
                        <div class="chart__row">
                            <span class="chart__label">{row.label}</span>
                            <div class="chart__bars">
                                {row
                                    .bars
                                    .into_iter()
                                    .map(|bar| {
                                        view! {
                                            <div class="chart__bar-line">
                                                <span
                                                    class="chart__bar"
                                                    class:chart__bar--negative={bar.value < 0.0}
                                                    data-series=bar.series
                                                    style={format!("width: {:.1}%", bar.percent)}
                                                ></span>
                                                <span class="chart__value">
                                                    {bar.series} ": " {format_value(bar.value)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </section>
    }
}
