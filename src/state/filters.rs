//! Per-view filter forms and their query-string encoding.
//!
//! Filter values are edited freely; only an explicit apply/clear turns them
//! into request parameters. Empty values are never sent.

#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

/// A single `name=value` query parameter.
pub type QueryParam = (&'static str, String);

/// A filter form that can be encoded as query parameters.
pub trait FilterSet: Default {
    fn query_params(&self) -> Vec<QueryParam>;
}

/// Dashboard filters: customer plus an `MM/YYYY` period.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardFilters {
    pub cliente_id: String,
    pub data_inicio: String,
    pub data_fim: String,
}

impl FilterSet for DashboardFilters {
    fn query_params(&self) -> Vec<QueryParam> {
        let mut params = Vec::new();
        push_non_empty(&mut params, "clienteId", &self.cliente_id);
        push_non_empty(&mut params, "dataInicio", &self.data_inicio);
        push_non_empty(&mut params, "dataFim", &self.data_fim);
        params
    }
}

/// Invoice filters: customer plus a reference month (`JAN/2024`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FaturaFilters {
    pub cliente_id: String,
    pub mes_referencia: String,
}

impl FilterSet for FaturaFilters {
    fn query_params(&self) -> Vec<QueryParam> {
        let mut params = Vec::new();
        push_non_empty(&mut params, "clienteId", &self.cliente_id);
        push_non_empty(&mut params, "mesReferencia", &self.mes_referencia);
        params
    }
}

fn push_non_empty(params: &mut Vec<QueryParam>, name: &'static str, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        params.push((name, value.to_owned()));
    }
}
