//! Customer list feeding the filter selects.
//!
//! Secondary data: a failed load leaves the list empty and never blocks the
//! primary view.

#[cfg(test)]
#[path = "clientes_test.rs"]
mod clientes_test;

use crate::net::error::ApiError;
use crate::net::types::Cliente;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientesState {
    pub items: Vec<Cliente>,
    pub loading: bool,
}

impl ClientesState {
    pub fn begin(&mut self) {
        self.loading = true;
    }

    /// Store the loaded list. On failure the list is emptied and the error
    /// handed back for logging.
    pub fn finish(&mut self, outcome: Result<Vec<Cliente>, ApiError>) -> Option<ApiError> {
        self.loading = false;
        match outcome {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(err) => {
                self.items.clear();
                Some(err)
            }
        }
    }
}
