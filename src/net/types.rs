//! Typed REST contracts for the billing backend.
//!
//! DESIGN
//! ======
//! Every endpoint response is wrapped in `{ "data": ... }`; list endpoints
//! nest once more (`{ "data": { "data": [...] } }`). Payloads are validated
//! here at the boundary so views never inspect raw JSON.
//!
//! Invoice money and consumption fields travel as decimal strings. They stay
//! strings on the struct and are parsed through fallible accessors, so a
//! malformed value surfaces as an error instead of rendering as zero.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// Top-level `{ "data": T }` response wrapper.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Nested `{ "data": [T] }` list wrapper used by series and invoice listings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Listing<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// `data` payload of a successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginPayload {
    pub access_token: String,
}

/// Headline totals for the dashboard cards.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Total consumption in kWh.
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub consumo_total: f64,
    /// Compensated energy in kWh.
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub energia_compensada: f64,
    /// Amount in BRL the customer would pay without distributed generation.
    #[serde(rename = "valorTotalSemGD", deserialize_with = "deserialize_f64_from_number_or_string")]
    pub valor_total_sem_gd: f64,
    /// Savings in BRL from distributed generation; may be negative.
    #[serde(rename = "economiaGD", deserialize_with = "deserialize_f64_from_number_or_string")]
    pub economia_gd: f64,
}

/// One month of the consumption vs. compensation series.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct EnergyPoint {
    pub month: String,
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub consumo: f64,
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub compensada: f64,
}

/// One month of the financial series.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FinancialPoint {
    pub month: String,
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub total: f64,
    #[serde(deserialize_with = "deserialize_f64_from_number_or_string")]
    pub economia: f64,
}

/// Billing customer, used to populate the filter select.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Cliente {
    pub id: String,
    pub num_cliente: String,
    pub nome: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// An ingested energy invoice.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Fatura {
    pub id: String,
    pub cliente_id: String,
    /// Reference month, e.g. `JAN/2024`.
    pub mes_referencia: String,
    pub energia_eletrica_kwh: String,
    pub energia_eletrica_valor: String,
    pub energia_scee_kwh: String,
    pub energia_scee_valor: String,
    pub energia_compensada_kwh: String,
    pub energia_compensada_valor: String,
    pub contrib_ilum_pub_municipal: String,
    pub consumo_energia_eletrica_kwh: String,
    pub valor_total_sem_gd: String,
    pub total_a_pagar: String,
    pub pdf_path: Option<String>,
    pub numero_instalacao: String,
    pub data_vencimento: String,
    pub cliente: Cliente,
}

impl Fatura {
    /// Billed consumption in kWh.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidDecimal`] when the field is not a decimal.
    pub fn consumo_kwh(&self) -> Result<f64, ApiError> {
        parse_decimal("consumo_energia_eletrica_kwh", &self.consumo_energia_eletrica_kwh)
    }

    /// Amount due in BRL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidDecimal`] when the field is not a decimal.
    pub fn total_a_pagar_brl(&self) -> Result<f64, ApiError> {
        parse_decimal("total_a_pagar", &self.total_a_pagar)
    }
}

/// Parse a decimal string (`"1234.56"`) into a finite `f64`.
///
/// # Errors
///
/// Empty, non-numeric, and non-finite inputs are rejected.
pub fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, ApiError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| !trimmed.is_empty() && value.is_finite())
        .ok_or_else(|| ApiError::InvalidDecimal { field, value: raw.to_owned() })
}

fn deserialize_f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => {
            parse_decimal("number", &raw).map_err(|_| D::Error::custom(format!("invalid decimal string {raw:?}")))
        }
        _ => Err(D::Error::custom("expected number or decimal string")),
    }
}
