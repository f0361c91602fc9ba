//! Save a binary payload as a browser download.
//!
//! The payload becomes a `Blob`, gets a temporary object URL, and is
//! handed to a detached `<a download>` click. The object URL is revoked when
//! its guard drops, on every exit path.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::error::ApiError;

/// Trigger a download of `bytes` named `file_name`.
///
/// # Errors
///
/// Returns [`ApiError::Browser`] when a DOM call fails and
/// [`ApiError::Unavailable`] outside the browser.
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/pdf");
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(browser_error)?;
        let url = ObjectUrl::create(&blob)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ApiError::Unavailable)?;
        let body = document.body().ok_or(ApiError::Unavailable)?;
        let link: web_sys::HtmlAnchorElement = document
            .create_element("a")
            .map_err(browser_error)?
            .dyn_into()
            .map_err(|_| ApiError::Browser("created element is not an anchor".to_owned()))?;
        link.set_href(&url.0);
        link.set_download(file_name);

        body.append_child(&link).map_err(browser_error)?;
        link.click();
        let _ = body.remove_child(&link);
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, file_name);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
pub(crate) fn browser_error(err: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{err:?}"))
}

#[cfg(feature = "csr")]
struct ObjectUrl(String);

#[cfg(feature = "csr")]
impl ObjectUrl {
    fn create(blob: &web_sys::Blob) -> Result<Self, ApiError> {
        web_sys::Url::create_object_url_with_blob(blob)
            .map(Self)
            .map_err(browser_error)
    }
}

#[cfg(feature = "csr")]
impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.0);
    }
}
