//! Invoice library: filtered table, per-row PDF download, bulk upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. The list follows the same ticketed fetch as the
//! dashboard. Download and upload are actions: their failures raise a
//! transient notice and never replace the table with an error.

use leptos::prelude::*;

use crate::components::cliente_select::ClienteSelect;
use crate::components::fatura_row::{FATURA_COLUMNS, FaturaRow};
use crate::components::filter_actions::FilterActions;
use crate::components::notification::Notification;
use crate::net::http::{ApiClient, use_api};
use crate::net::types::Fatura;
use crate::pages::spawn_clientes_load;
use crate::state::clientes::ClientesState;
use crate::state::faturas::FaturasState;
use crate::state::fetch::{FetchState, FetchTicket};
use crate::state::filters::FaturaFilters;

type FaturaList = RwSignal<FetchState<Vec<Fatura>>>;

#[component]
pub fn FaturasPage() -> impl IntoView {
    let client = use_api();
    let filters = RwSignal::new(FaturaFilters::default());
    let clientes = RwSignal::new(ClientesState::default());
    let actions = RwSignal::new(FaturasState::default());
    let mut initial_state = FetchState::<Vec<Fatura>>::default();
    let initial = initial_state.begin(Vec::new());
    let list: FaturaList = RwSignal::new(initial_state);
    let file_input = NodeRef::<leptos::html::Input>::new();

    spawn_clientes_load(client, clientes);
    load_faturas(client, list, initial);

    let on_apply = Callback::new(move |()| {
        if let Some(ticket) = list.try_update(|l| filters.with_untracked(|f| l.apply_filters(f))) {
            load_faturas(client, list, ticket);
        }
    });
    let on_clear = Callback::new(move |()| {
        let ticket = filters.try_update(|f| list.try_update(|l| l.clear_filters(f))).flatten();
        if let Some(ticket) = ticket {
            load_faturas(client, list, ticket);
        }
    });
    let on_download = Callback::new(move |fatura: Fatura| start_download(client, actions, fatura));
    let on_close_notice = Callback::new(move |seq: u64| actions.update(|a| a.dismiss_notice(seq)));

    let on_upload_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };
    let on_files_selected = move |_| start_upload(client, actions, list, file_input);
    let uploading = move || actions.with(|a| a.upload.in_flight);

    view! {
        <div class="page faturas-page">
            <div class="page__header">
                <h2 class="page__title">"Biblioteca de Faturas"</h2>
                <input
                    node_ref=file_input
                    type="file"
                    multiple=true
                    accept=".pdf"
                    class="visually-hidden"
                    on:change=on_files_selected
                />
                <button
                    class="btn btn--primary"
                    title="Fazer upload de faturas"
                    disabled=uploading
                    on:click=on_upload_click
                >
                    {move || if uploading() { "Enviando..." } else { "Upload de Faturas" }}
                </button>
            </div>

            <Notification
                notice=Signal::derive(move || actions.with(|a| a.notice.clone()))
                on_close=on_close_notice
            />

            <div class="filter-bar">
                <ClienteSelect
                    clientes=clientes
                    value=Signal::derive(move || filters.with(|f| f.cliente_id.clone()))
                    on_change=Callback::new(move |id: String| filters.update(|f| f.cliente_id = id))
                />
                <label class="filter-field">
                    <span class="filter-field__label">"Mês de Referência"</span>
                    <input
                        class="filter-field__input"
                        placeholder="MMM/AAAA"
                        prop:value=move || filters.with(|f| f.mes_referencia.clone())
                        on:input=move |ev| filters.update(|f| f.mes_referencia = event_target_value(&ev))
                    />
                </label>
                <FilterActions
                    busy=Signal::derive(move || list.with(FetchState::is_loading))
                    on_apply=on_apply
                    on_clear=on_clear
                />
            </div>

            {move || {
                list.with(|l| {
                    if l.is_loading() {
                        return view! { <p class="page__loading">"Carregando..."</p> }.into_any();
                    }
                    if let Some(message) = l.error() {
                        return view! { <p class="page__error">{message.to_owned()}</p> }.into_any();
                    }
                    let rows = l.data().cloned().unwrap_or_default();
                    faturas_table(rows, actions, on_download).into_any()
                })
            }}
        </div>
    }
}

fn faturas_table(rows: Vec<Fatura>, actions: RwSignal<FaturasState>, on_download: Callback<Fatura>) -> impl IntoView {
    let empty = rows.is_empty();

    view! {
        <div class="table-container">
            <table class="fatura-table">
                <thead>
                    <tr>
                        {FATURA_COLUMNS.into_iter().map(|column| view! { <th>{column}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show when=move || empty>
                        <tr>
                            <td class="fatura-table__empty" colspan=FATURA_COLUMNS.len().to_string()>
                                "Nenhuma fatura encontrada"
                            </td>
                        </tr>
                    </Show>
                    {rows
                        .into_iter()
                        .map(|fatura| {
                            let id = fatura.id.clone();
                            view! {
                                <FaturaRow
                                    fatura=fatura
                                    downloading=Signal::derive(move || actions.with(|a| a.is_downloading(&id)))
                                    on_download=on_download
                                />
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn load_faturas(client: ApiClient, list: FaturaList, ticket: FetchTicket) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::api::fetch_faturas(client, &ticket.query)
            .await
            .map_err(|err| {
                log::error!("faturas load failed: {err}");
                crate::state::faturas::FATURAS_LOAD_ERROR.to_owned()
            });
        if list.try_update(|l| l.finish(ticket.seq, outcome)) == Some(false) {
            log::debug!("dropped stale faturas response #{}", ticket.seq);
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, list, ticket);
    }
}

/// Busy marker for one download; released when dropped.
#[cfg(feature = "csr")]
struct DownloadMark {
    actions: RwSignal<FaturasState>,
    id: String,
}

#[cfg(feature = "csr")]
impl Drop for DownloadMark {
    fn drop(&mut self) {
        self.actions.try_update(|a| a.finish_download(&self.id));
    }
}

fn start_download(client: ApiClient, actions: RwSignal<FaturasState>, fatura: Fatura) {
    if actions.try_update(|a| a.begin_download(&fatura.id)) != Some(true) {
        return;
    }
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::state::faturas::{DOWNLOAD_ERROR, NoticeKind, download_file_name};

        let _mark = DownloadMark { actions, id: fatura.id.clone() };
        let outcome = match crate::net::api::download_fatura(client, &fatura.id).await {
            Ok(bytes) => crate::util::download::save_pdf(&bytes, &download_file_name(&fatura)),
            Err(err) => Err(err),
        };
        if let Err(err) = outcome {
            log::error!("download of fatura {} failed: {err}", fatura.id);
            if let Some(seq) = actions.try_update(|a| a.notify(NoticeKind::Error, DOWNLOAD_ERROR)) {
                schedule_dismiss(actions, seq);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
        actions.update(|a| a.finish_download(&fatura.id));
    }
}

fn start_upload(
    client: ApiClient,
    actions: RwSignal<FaturasState>,
    list: FaturaList,
    file_input: NodeRef<leptos::html::Input>,
) {
    #[cfg(feature = "csr")]
    {
        let Some(input) = file_input.get_untracked() else {
            return;
        };
        let files = selected_files(&input);
        let names: Vec<String> = files.iter().map(web_sys::File::name).collect();
        if actions.try_update(|a| a.begin_upload(names)) != Some(true) {
            input.set_value("");
            return;
        }
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::upload_faturas(client, files).await;
            if let Err(err) = &outcome {
                log::error!("upload failed: {err}");
            }
            input.set_value("");
            let Some(refetch) = actions.try_update(|a| a.finish_upload(&outcome)) else {
                return;
            };
            if let Some(seq) = actions.with_untracked(|a| a.notice.as_ref().map(|n| n.seq)) {
                schedule_dismiss(actions, seq);
            }
            if refetch {
                if let Some(ticket) = list.try_update(FetchState::refresh) {
                    load_faturas(client, list, ticket);
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (client, actions, list, file_input);
    }
}

#[cfg(feature = "csr")]
fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<web_sys::File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[cfg(feature = "csr")]
fn schedule_dismiss(actions: RwSignal<FaturasState>, seq: u64) {
    use crate::state::faturas::NOTICE_TIMEOUT_MS;

    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        actions.try_update(|a| a.dismiss_notice(seq));
    });
}
