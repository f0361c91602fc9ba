//! Single point of egress for backend calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request reads the current token from `AuthContext` and carries it
//! as `Authorization: Bearer {token}` when one exists. Every non-2xx answer
//! is normalized into [`ApiError`]; a `401` from any endpoint also expires the
//! session, after which the route guard sends the user to `/login`.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`. Native builds only
//! compile the pure interceptors used by tests.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use super::error::ApiError;
use crate::config::ApiConfig;
use crate::state::filters::QueryParam;
use crate::util::auth::AuthContext;

/// `Authorization` header value for `token`, if any.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

/// Absolute request URL with empty query values omitted.
pub fn build_url(config: &ApiConfig, path: &str, query: &[QueryParam]) -> String {
    let endpoint = config.endpoint(path);
    let mut pairs = query.iter().filter(|(_, value)| !value.is_empty()).peekable();
    if pairs.peek().is_none() {
        return endpoint;
    }
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.map(|(name, value)| (*name, value.as_str())))
        .finish();
    format!("{endpoint}?{encoded}")
}

/// Decode a JSON body against its typed contract.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the body does not match `T`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Copyable REST client provided through context.
#[derive(Clone, Copy)]
pub struct ApiClient {
    config: StoredValue<ApiConfig>,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(config: ApiConfig, auth: AuthContext) -> Self {
        Self { config: StoredValue::new(config), auth }
    }

    pub fn url(&self, path: &str, query: &[QueryParam]) -> String {
        self.config.with_value(|config| build_url(config, path, query))
    }

    /// Response interceptor for a non-2xx answer: classify it and, on `401`,
    /// tear down the session so the route guard redirects to `/login`.
    pub fn reject(&self, status: u16, body: &str) -> ApiError {
        let err = ApiError::from_status(status, body);
        if err.is_unauthorized() {
            self.auth.expire();
        }
        err
    }

    /// `GET` a JSON resource.
    ///
    /// # Errors
    ///
    /// Transport, status, and decode failures as [`ApiError`].
    #[cfg(feature = "csr")]
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[QueryParam]) -> Result<T, ApiError> {
        let request = self
            .authorize(gloo_net::http::Request::get(&self.url(path, query)))
            .build()
            .map_err(transport_error)?;
        let response = self.dispatch(request).await?;
        let body = response.text().await.map_err(transport_error)?;
        decode_json(&body)
    }

    /// `POST` a JSON body and decode the JSON answer.
    ///
    /// # Errors
    ///
    /// Transport, status, and decode failures as [`ApiError`].
    #[cfg(feature = "csr")]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(gloo_net::http::Request::post(&self.url(path, &[])))
            .json(body)
            .map_err(transport_error)?;
        let response = self.dispatch(request).await?;
        let text = response.text().await.map_err(transport_error)?;
        decode_json(&text)
    }

    /// `GET` a binary payload.
    ///
    /// # Errors
    ///
    /// Transport and status failures as [`ApiError`].
    #[cfg(feature = "csr")]
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>, ApiError> {
        let request = self
            .authorize(gloo_net::http::Request::get(&self.url(path, &[])))
            .build()
            .map_err(transport_error)?;
        let response = self.dispatch(request).await?;
        response.binary().await.map_err(transport_error)
    }

    /// `POST` multipart form data; the browser sets the boundary header.
    ///
    /// # Errors
    ///
    /// Transport, status, and decode failures as [`ApiError`].
    #[cfg(feature = "csr")]
    pub async fn post_form<T: DeserializeOwned>(&self, path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
        let request = self
            .authorize(gloo_net::http::Request::post(&self.url(path, &[])))
            .body(form)
            .map_err(transport_error)?;
        let response = self.dispatch(request).await?;
        let text = response.text().await.map_err(transport_error)?;
        decode_json(&text)
    }

    #[cfg(feature = "csr")]
    fn authorize(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        match bearer_header(self.auth.token().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    #[cfg(feature = "csr")]
    async fn dispatch(&self, request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
        let response = request.send().await.map_err(transport_error)?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let err = self.reject(status, &body);
        log::debug!("{} failed: {err}", response.url());
        Err(err)
    }
}

/// Create the REST client for `config` and provide it to descendants.
pub fn provide_api_client(config: ApiConfig, auth: AuthContext) -> ApiClient {
    let client = ApiClient::new(config, auth);
    provide_context(client);
    client
}

/// Fetch the REST client.
///
/// # Panics
///
/// Panics outside the tree below [`provide_api_client`].
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}
