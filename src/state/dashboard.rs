//! Dashboard data and its render-ready projections.
//!
//! SYSTEM CONTEXT
//! ==============
//! The primary dashboard fetch loads three resources with the same filter
//! parameters (summary totals, energy series, financial series). Cards and
//! charts are derived here so the page only maps strings and percentages to
//! markup.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::{DashboardSummary, EnergyPoint, FinancialPoint};
use crate::util::format::{format_brl, format_economia, format_kwh};

/// Inline message when the primary dashboard fetch fails.
pub const DASHBOARD_LOAD_ERROR: &str = "Erro ao carregar dados do dashboard";

/// Everything the dashboard renders for one filter selection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub summary: DashboardSummary,
    pub energy: Vec<EnergyPoint>,
    pub financial: Vec<FinancialPoint>,
}

/// A headline card: title and formatted value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
}

pub fn summary_cards(summary: &DashboardSummary) -> [SummaryCard; 4] {
    [
        SummaryCard { title: "Consumo Total", value: format_kwh(summary.consumo_total) },
        SummaryCard { title: "Energia Compensada", value: format_kwh(summary.energia_compensada) },
        SummaryCard { title: "Valor Total sem GD", value: format_brl(summary.valor_total_sem_gd) },
        SummaryCard { title: "Economia GD", value: format_economia(summary.economia_gd) },
    ]
}

/// One bar of a grouped bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartBar {
    pub series: &'static str,
    pub value: f64,
    /// Bar length relative to the largest magnitude in the chart, `0..=100`.
    pub percent: f64,
}

/// One month of a grouped bar chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub bars: Vec<ChartBar>,
}

pub fn energy_chart(points: &[EnergyPoint]) -> Vec<ChartRow> {
    build_chart(
        points
            .iter()
            .map(|p| (p.month.clone(), vec![("consumo", p.consumo), ("compensada", p.compensada)]))
            .collect(),
    )
}

pub fn financial_chart(points: &[FinancialPoint]) -> Vec<ChartRow> {
    build_chart(
        points
            .iter()
            .map(|p| (p.month.clone(), vec![("total", p.total), ("economia", p.economia)]))
            .collect(),
    )
}

fn build_chart(rows: Vec<(String, Vec<(&'static str, f64)>)>) -> Vec<ChartRow> {
    let max = rows
        .iter()
        .flat_map(|(_, values)| values.iter().map(|(_, v)| v.abs()))
        .fold(0.0_f64, f64::max);
    rows.into_iter()
        .map(|(label, values)| ChartRow {
            label,
            bars: values
                .into_iter()
                .map(|(series, value)| ChartBar {
                    series,
                    value,
                    percent: if max > 0.0 { value.abs() / max * 100.0 } else { 0.0 },
                })
                .collect(),
        })
        .collect()
}
