use super::*;
use crate::routes::Route;
use crate::state::session::SessionStore;
use crate::util::auth::GuardDecision;

// =============================================================
// bearer_header
// =============================================================

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header(Some("abc.def")), Some("Bearer abc.def".to_owned()));
}

#[test]
fn bearer_header_absent_without_token() {
    assert_eq!(bearer_header(None), None);
    assert_eq!(bearer_header(Some("")), None);
}

// =============================================================
// build_url
// =============================================================

fn config() -> ApiConfig {
    ApiConfig::resolve(Some("http://localhost:3000"))
}

#[test]
fn build_url_without_query_is_plain_endpoint() {
    assert_eq!(build_url(&config(), "/dashboard", &[]), "http://localhost:3000/dashboard");
}

#[test]
fn build_url_encodes_query_values() {
    let query = vec![("clienteId", "7".to_owned()), ("dataInicio", "01/2024".to_owned())];
    assert_eq!(
        build_url(&config(), "/dashboard", &query),
        "http://localhost:3000/dashboard?clienteId=7&dataInicio=01%2F2024"
    );
}

#[test]
fn build_url_skips_empty_values() {
    let query = vec![("clienteId", String::new()), ("mesReferencia", "JAN/2024".to_owned())];
    assert_eq!(
        build_url(&config(), "/faturas", &query),
        "http://localhost:3000/faturas?mesReferencia=JAN%2F2024"
    );
}

#[test]
fn build_url_all_empty_has_no_question_mark() {
    let query = vec![("clienteId", String::new())];
    assert_eq!(build_url(&config(), "/faturas", &query), "http://localhost:3000/faturas");
}

#[test]
fn build_url_with_relative_base() {
    let config = ApiConfig::resolve(Some("/api/"));
    assert_eq!(build_url(&config, "customer", &[]), "/api/customer");
}

// =============================================================
// decode_json
// =============================================================

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Token {
    access_token: String,
}

#[test]
fn decode_json_reads_matching_body() {
    let token: Token = decode_json(r#"{"access_token":"jwt"}"#).unwrap();
    assert_eq!(token, Token { access_token: "jwt".to_owned() });
}

#[test]
fn decode_json_reports_contract_mismatch() {
    let err = decode_json::<Token>(r#"{"token":"jwt"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// ApiClient::reject
// =============================================================

fn signed_in_client(store: &SessionStore) -> ApiClient {
    store.set("jwt");
    ApiClient::new(config(), AuthContext::new(store.clone()))
}

#[test]
fn reject_401_clears_session_and_redirects_to_login() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::in_memory();
        let client = signed_in_client(&store);

        let err = client.reject(401, "");
        assert_eq!(err, ApiError::Unauthorized);
        assert_eq!(store.get(), None);
        assert_eq!(
            client.auth.decision(),
            GuardDecision::Redirect { to: Route::Login, replace: true }
        );
    });
}

#[test]
fn reject_other_status_keeps_session() {
    let owner = Owner::new();
    owner.with(|| {
        let store = SessionStore::in_memory();
        let client = signed_in_client(&store);

        let err = client.reject(500, r#"{"message":"falha interna"}"#);
        assert_eq!(err, ApiError::Request { status: 500, message: "falha interna".to_owned() });
        assert_eq!(store.get().as_deref(), Some("jwt"));
        assert_eq!(client.auth.decision(), GuardDecision::Render);
    });
}
