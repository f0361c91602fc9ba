use super::*;

// =============================================================
// Helpers
// =============================================================

fn cliente_json() -> serde_json::Value {
    serde_json::json!({
        "id": "c-1",
        "num_cliente": "7202788969",
        "nome": null,
        "createdAt": "2024-05-01T10:00:00.000Z",
        "updatedAt": "2024-05-01T10:00:00.000Z"
    })
}

fn fatura_json() -> serde_json::Value {
    serde_json::json!({
        "id": "f-1",
        "cliente_id": "c-1",
        "mes_referencia": "JAN/2024",
        "energia_eletrica_kwh": "50",
        "energia_eletrica_valor": "47.75",
        "energia_scee_kwh": "476",
        "energia_scee_valor": "242.99",
        "energia_compensada_kwh": "476",
        "energia_compensada_valor": "-231.97",
        "contrib_ilum_pub_municipal": "49.43",
        "consumo_energia_eletrica_kwh": "526",
        "valor_total_sem_gd": "340.17",
        "total_a_pagar": "108.20",
        "pdf_path": null,
        "numero_instalacao": "3001116735",
        "data_vencimento": "12/02/2024",
        "cliente": cliente_json()
    })
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn login_response_unwraps_access_token() {
    let body = serde_json::json!({ "data": { "access_token": "jwt-abc" } });
    let parsed: Envelope<LoginPayload> = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.data.access_token, "jwt-abc");
}

#[test]
fn login_request_serializes_both_fields() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.com", password: "pw" }).unwrap();
    assert_eq!(body, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

#[test]
fn fatura_listing_unwraps_double_data() {
    let body = serde_json::json!({ "data": { "data": [fatura_json()] } });
    let parsed: Envelope<Listing<Fatura>> = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.data.data.len(), 1);
    assert_eq!(parsed.data.data[0].cliente.num_cliente, "7202788969");
    assert_eq!(parsed.data.data[0].pdf_path, None);
}

#[test]
fn listing_without_data_is_empty() {
    let parsed: Envelope<Listing<EnergyPoint>> = serde_json::from_value(serde_json::json!({ "data": {} })).unwrap();
    assert!(parsed.data.data.is_empty());
}

#[test]
fn clientes_response_is_flat_list() {
    let body = serde_json::json!({ "data": [cliente_json()] });
    let parsed: Envelope<Vec<Cliente>> = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.data[0].id, "c-1");
    assert_eq!(parsed.data[0].nome, None);
}

// =============================================================
// Numeric boundary validation
// =============================================================

#[test]
fn dashboard_summary_accepts_numbers_and_decimal_strings() {
    let body = serde_json::json!({
        "consumoTotal": 1526,
        "energiaCompensada": "952.5",
        "valorTotalSemGD": 680.34,
        "economiaGD": "-12.10"
    });
    let summary: DashboardSummary = serde_json::from_value(body).unwrap();
    assert_eq!(summary.consumo_total, 1526.0);
    assert_eq!(summary.energia_compensada, 952.5);
    assert_eq!(summary.valor_total_sem_gd, 680.34);
    assert_eq!(summary.economia_gd, -12.10);
}

#[test]
fn dashboard_summary_rejects_malformed_string() {
    let body = serde_json::json!({
        "consumoTotal": "lots",
        "energiaCompensada": 0,
        "valorTotalSemGD": 0,
        "economiaGD": 0
    });
    assert!(serde_json::from_value::<DashboardSummary>(body).is_err());
}

#[test]
fn energy_point_rejects_null() {
    let body = serde_json::json!({ "month": "JAN/2024", "consumo": null, "compensada": 1 });
    assert!(serde_json::from_value::<EnergyPoint>(body).is_err());
}

// =============================================================
// Fatura decimal accessors
// =============================================================

#[test]
fn fatura_accessors_parse_decimal_strings() {
    let fatura: Fatura = serde_json::from_value(fatura_json()).unwrap();
    assert_eq!(fatura.consumo_kwh(), Ok(526.0));
    assert_eq!(fatura.total_a_pagar_brl(), Ok(108.20));
}

#[test]
fn fatura_accessor_surfaces_malformed_value() {
    let mut fatura: Fatura = serde_json::from_value(fatura_json()).unwrap();
    fatura.total_a_pagar = "R$ 10".to_owned();
    assert_eq!(
        fatura.total_a_pagar_brl(),
        Err(ApiError::InvalidDecimal { field: "total_a_pagar", value: "R$ 10".to_owned() })
    );
}

#[test]
fn parse_decimal_rejects_empty_and_non_finite() {
    assert!(parse_decimal("x", "").is_err());
    assert!(parse_decimal("x", "   ").is_err());
    assert!(parse_decimal("x", "NaN").is_err());
    assert!(parse_decimal("x", "inf").is_err());
    assert_eq!(parse_decimal("x", " 12.5 "), Ok(12.5));
}
