//! Shared `idle → loading → (loaded | failed)` machine for view data.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket carrying a monotonically increasing sequence
//! number. Only the completion holding the latest sequence is applied, so a
//! slow response for superseded filters never overwrites a newer one.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use super::filters::{FilterSet, QueryParam};

/// Render-facing status of a view's primary data.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Handle for one issued fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: Vec<QueryParam>,
}

#[derive(Clone, Debug)]
pub struct FetchState<T> {
    status: LoadState<T>,
    seq: u64,
    query: Vec<QueryParam>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self { status: LoadState::Idle, seq: 0, query: Vec::new() }
    }
}

impl<T> FetchState<T> {
    pub fn status(&self) -> &LoadState<T> {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.status {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading` and issue a ticket superseding any in-flight one.
    pub fn begin(&mut self, query: Vec<QueryParam>) -> FetchTicket {
        self.seq += 1;
        self.status = LoadState::Loading;
        self.query.clone_from(&query);
        FetchTicket { seq: self.seq, query }
    }

    /// Re-issue the most recent query, e.g. after the data changed server-side.
    pub fn refresh(&mut self) -> FetchTicket {
        let query = self.query.clone();
        self.begin(query)
    }

    /// Fetch with the current filter values.
    pub fn apply_filters<F: FilterSet>(&mut self, filters: &F) -> FetchTicket {
        self.begin(filters.query_params())
    }

    /// Reset the filters and fetch unfiltered.
    pub fn clear_filters<F: FilterSet>(&mut self, filters: &mut F) -> FetchTicket {
        *filters = F::default();
        self.begin(filters.query_params())
    }

    /// Apply a completion. Returns `false` when `seq` was superseded.
    pub fn finish(&mut self, seq: u64, outcome: Result<T, String>) -> bool {
        if seq != self.seq {
            return false;
        }
        self.status = match outcome {
            Ok(data) => LoadState::Loaded(data),
            Err(message) => LoadState::Failed(message),
        };
        true
    }
}
