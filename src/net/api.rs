//! REST endpoints of the billing backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these functions through the context-provided [`ApiClient`].
//! Each one decodes its typed envelope and hands back plain domain data.
//! Outside the browser build every call resolves to
//! [`ApiError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::{DashboardSummary, EnergyPoint, Envelope, FinancialPoint, Listing, LoginRequest};
use super::types::{Cliente, Fatura, LoginPayload};
use super::http::ApiClient;
use crate::state::dashboard::DashboardData;
use crate::state::filters::QueryParam;

pub const LOGIN_ENDPOINT: &str = "/auth/login";
pub const DASHBOARD_ENDPOINT: &str = "/dashboard";
pub const DASHBOARD_ENERGY_ENDPOINT: &str = "/dashboard/energy";
pub const DASHBOARD_FINANCIAL_ENDPOINT: &str = "/dashboard/financial";
pub const CUSTOMERS_ENDPOINT: &str = "/customer";
pub const FATURAS_ENDPOINT: &str = "/faturas";
pub const FATURAS_UPLOAD_ENDPOINT: &str = "/faturas/upload";

/// Download path for one invoice; the id is percent-encoded as a single
/// path segment.
pub fn fatura_download_endpoint(id: &str) -> String {
    format!("/faturas/download/{}", urlencoding::encode(id))
}

/// Token carried by a successful login.
///
/// # Errors
///
/// [`ApiError::Decode`] when the backend answered without a usable token.
pub fn access_token(payload: LoginPayload) -> Result<String, ApiError> {
    if payload.access_token.trim().is_empty() {
        return Err(ApiError::Decode("login response carried an empty access_token".to_owned()));
    }
    Ok(payload.access_token)
}

/// Collapse any rejected credential exchange into one variant.
///
/// Transport and decode failures keep their own tags for logging.
pub fn classify_login_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Request { .. } | ApiError::Unauthorized => ApiError::InvalidCredentials,
        other => other,
    }
}

/// Exchange credentials for an access token.
///
/// # Errors
///
/// [`ApiError::InvalidCredentials`] when the backend rejects them; transport
/// and decode failures otherwise.
pub async fn login(client: ApiClient, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = LoginRequest { email, password };
        let payload: Envelope<LoginPayload> = client
            .post_json(LOGIN_ENDPOINT, &body)
            .await
            .map_err(classify_login_error)?;
        access_token(payload.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Load summary, energy, and financial series for one filter selection.
///
/// The three requests run concurrently; the first failure fails the whole
/// load.
///
/// # Errors
///
/// Any [`ApiError`] from the three requests.
pub async fn fetch_dashboard(client: ApiClient, query: &[QueryParam]) -> Result<DashboardData, ApiError> {
    #[cfg(feature = "csr")]
    {
        let (summary, energy, financial) = futures::try_join!(
            client.get_json::<Envelope<DashboardSummary>>(DASHBOARD_ENDPOINT, query),
            client.get_json::<Envelope<Listing<EnergyPoint>>>(DASHBOARD_ENERGY_ENDPOINT, query),
            client.get_json::<Envelope<Listing<FinancialPoint>>>(DASHBOARD_FINANCIAL_ENDPOINT, query),
        )?;
        Ok(DashboardData {
            summary: summary.data,
            energy: energy.data.data,
            financial: financial.data.data,
        })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, query);
        Err(ApiError::Unavailable)
    }
}

/// Customers for the filter select.
///
/// # Errors
///
/// Any [`ApiError`] from the request.
pub async fn fetch_clientes(client: ApiClient) -> Result<Vec<Cliente>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload: Envelope<Vec<Cliente>> = client.get_json(CUSTOMERS_ENDPOINT, &[]).await?;
        Ok(payload.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
        Err(ApiError::Unavailable)
    }
}

/// Invoices matching `query`.
///
/// # Errors
///
/// Any [`ApiError`] from the request.
pub async fn fetch_faturas(client: ApiClient, query: &[QueryParam]) -> Result<Vec<Fatura>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload: Envelope<Listing<Fatura>> = client.get_json(FATURAS_ENDPOINT, query).await?;
        Ok(payload.data.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, query);
        Err(ApiError::Unavailable)
    }
}

/// Raw PDF bytes of one invoice.
///
/// # Errors
///
/// Any [`ApiError`] from the request.
pub async fn download_fatura(client: ApiClient, id: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        client.get_bytes(&fatura_download_endpoint(id)).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, id);
        Err(ApiError::Unavailable)
    }
}

/// Send every selected file as one multipart request.
///
/// # Errors
///
/// [`ApiError::Browser`] when the form cannot be built; request failures
/// otherwise.
#[cfg(feature = "csr")]
pub async fn upload_faturas(client: ApiClient, files: Vec<web_sys::File>) -> Result<(), ApiError> {
    use crate::state::faturas::upload_form_entries;
    use crate::util::download::browser_error;

    let form = web_sys::FormData::new().map_err(browser_error)?;
    for (field, file) in upload_form_entries(files) {
        form.append_with_blob_and_filename(field, &file, &file.name())
            .map_err(browser_error)?;
    }
    let _: Envelope<serde_json::Value> = client.post_form(FATURAS_UPLOAD_ENDPOINT, form).await?;
    Ok(())
}
