use super::*;
use crate::state::filters::{DashboardFilters, FaturaFilters};

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn fetch_state_starts_idle() {
    let state = FetchState::<u32>::default();
    assert_eq!(state.status(), &LoadState::Idle);
    assert!(!state.is_loading());
    assert!(state.data().is_none());
    assert!(state.error().is_none());
}

#[test]
fn begin_enters_loading_and_finish_loads() {
    let mut state = FetchState::default();
    let ticket = state.begin(Vec::new());
    assert!(state.is_loading());
    assert!(state.finish(ticket.seq, Ok(7)));
    assert_eq!(state.data(), Some(&7));
}

#[test]
fn failure_replaces_content_with_message() {
    let mut state = FetchState::<u32>::default();
    let ticket = state.begin(Vec::new());
    state.finish(ticket.seq, Err("Erro ao carregar faturas".to_owned()));
    assert_eq!(state.error(), Some("Erro ao carregar faturas"));
    assert!(state.data().is_none());
}

#[test]
fn retry_after_failure_clears_error() {
    let mut state = FetchState::<u32>::default();
    let first = state.begin(Vec::new());
    state.finish(first.seq, Err("boom".to_owned()));
    let second = state.begin(Vec::new());
    assert!(state.error().is_none());
    state.finish(second.seq, Ok(1));
    assert_eq!(state.data(), Some(&1));
}

// =============================================================
// Supersession
// =============================================================

#[test]
fn stale_completion_is_discarded() {
    let mut state = FetchState::default();
    let slow = state.begin(vec![("clienteId", "a".to_owned())]);
    let fast = state.begin(vec![("clienteId", "b".to_owned())]);
    assert!(fast.seq > slow.seq);

    assert!(state.finish(fast.seq, Ok("b")));
    assert!(!state.finish(slow.seq, Ok("a")));
    assert_eq!(state.data(), Some(&"b"));
}

#[test]
fn stale_failure_does_not_clobber_loading() {
    let mut state = FetchState::<u32>::default();
    let old = state.begin(Vec::new());
    let _new = state.begin(Vec::new());
    assert!(!state.finish(old.seq, Err("late".to_owned())));
    assert!(state.is_loading());
}

// =============================================================
// Filters
// =============================================================

#[test]
fn apply_filters_sends_only_non_empty_params() {
    let mut state = FetchState::<()>::default();
    let filters = DashboardFilters { cliente_id: "abc".to_owned(), ..DashboardFilters::default() };
    let ticket = state.apply_filters(&filters);
    assert_eq!(ticket.query, vec![("clienteId", "abc".to_owned())]);
    assert!(ticket.query.iter().all(|(name, _)| *name != "dataInicio" && *name != "dataFim"));
}

#[test]
fn apply_filters_on_invoices_omits_empty_month() {
    let mut state = FetchState::<()>::default();
    let filters = FaturaFilters { cliente_id: "abc".to_owned(), mes_referencia: String::new() };
    let ticket = state.apply_filters(&filters);
    assert_eq!(ticket.query, vec![("clienteId", "abc".to_owned())]);
}

#[test]
fn clear_filters_resets_form_and_fetches_unfiltered() {
    let mut state = FetchState::<()>::default();
    let mut filters = DashboardFilters {
        cliente_id: "abc".to_owned(),
        data_inicio: "01/2024".to_owned(),
        data_fim: "03/2024".to_owned(),
    };
    let ticket = state.clear_filters(&mut filters);
    assert_eq!(filters, DashboardFilters::default());
    assert!(ticket.query.is_empty());
    assert!(state.is_loading());
}

#[test]
fn clear_filters_supersedes_filtered_fetch() {
    let mut state = FetchState::default();
    let mut filters = FaturaFilters { cliente_id: "abc".to_owned(), mes_referencia: "JAN/2024".to_owned() };
    let filtered = state.apply_filters(&filters);
    let cleared = state.clear_filters(&mut filters);
    assert!(!state.finish(filtered.seq, Ok("filtered")));
    assert!(state.finish(cleared.seq, Ok("all")));
    assert_eq!(state.data(), Some(&"all"));
}

// =============================================================
// refresh
// =============================================================

#[test]
fn refresh_reissues_last_applied_query() {
    let mut state = FetchState::<u32>::default();
    let filters = FaturaFilters { cliente_id: "abc".to_owned(), mes_referencia: "JAN/2024".to_owned() };
    let applied = state.apply_filters(&filters);
    state.finish(applied.seq, Ok(1));
    let refreshed = state.refresh();
    assert_eq!(refreshed.query, applied.query);
    assert!(refreshed.seq > applied.seq);
    assert!(state.is_loading());
}

#[test]
fn refresh_after_clear_stays_unfiltered() {
    let mut state = FetchState::<u32>::default();
    let mut filters = FaturaFilters { cliente_id: "abc".to_owned(), mes_referencia: String::new() };
    state.apply_filters(&filters);
    state.clear_filters(&mut filters);
    assert!(state.refresh().query.is_empty());
}
