//! One invoice in the library table.

use leptos::prelude::*;

use crate::net::types::Fatura;
use crate::util::format::{format_cell, format_money, format_number};

/// Column headers, in row order.
pub const FATURA_COLUMNS: [&str; 7] = [
    "Nº Cliente",
    "Nº Instalação",
    "Mês Referência",
    "Data Vencimento",
    "Consumo (kWh)",
    "Valor Total (R$)",
    "Ações",
];

#[component]
pub fn FaturaRow(
    fatura: Fatura,
    #[prop(into)] downloading: Signal<bool>,
    on_download: Callback<Fatura>,
) -> impl IntoView {
    let consumo = format_cell(fatura.consumo_kwh(), format_number);
    let total = format_cell(fatura.total_a_pagar_brl(), format_money);
    let num_cliente = fatura.cliente.num_cliente.clone();
    let numero_instalacao = fatura.numero_instalacao.clone();
    let mes_referencia = fatura.mes_referencia.clone();
    let data_vencimento = fatura.data_vencimento.clone();

    view! {
        <tr class="fatura-row">
            <td>{num_cliente}</td>
            <td>{numero_instalacao}</td>
            <td>{mes_referencia}</td>
            <td>{data_vencimento}</td>
            <td class="fatura-row__number">{consumo}</td>
            <td class="fatura-row__number">{total}</td>
            <td>
                <button
                    class="btn btn--small"
                    disabled=move || downloading.get()
                    on:click=move |_| on_download.run(fatura.clone())
                >
                    {move || if downloading.get() { "Baixando..." } else { "Download PDF" }}
                </button>
            </td>
        </tr>
    }
}
