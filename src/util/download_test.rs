#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn save_pdf_is_unavailable_outside_browser() {
    assert_eq!(save_pdf(b"%PDF-1.4", "fatura_123_JAN/2024.pdf"), Err(ApiError::Unavailable));
}
