//! Invoice-library action state: per-row downloads, bulk upload, notices.
//!
//! DESIGN
//! ======
//! Busy markers are plain set membership. Each completion removes only its
//! own id, so independent downloads finishing in any order never interfere.
//! Action failures surface as a transient notice scoped to the action; they
//! never touch the list's load state.

#[cfg(test)]
#[path = "faturas_test.rs"]
mod faturas_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::Fatura;

/// Inline message when the invoice list fails to load.
pub const FATURAS_LOAD_ERROR: &str = "Erro ao carregar faturas";
pub const DOWNLOAD_ERROR: &str = "Não foi possível fazer o download da fatura. Tente novamente mais tarde.";
pub const UPLOAD_ERROR: &str = "Falha ao processar os arquivos. Por favor, tente novamente.";
pub const UPLOAD_SUCCESS: &str = "Arquivos processados com sucesso!";

/// How long a notice stays up before auto-dismissing.
pub const NOTICE_TIMEOUT_MS: u32 = 6_000;

/// Multipart field every uploaded file is appended under.
pub const UPLOAD_FIELD: &str = "files";

/// `fatura_{num_cliente}_{mes_referencia}.pdf`
pub fn download_file_name(fatura: &Fatura) -> String {
    format!("fatura_{}_{}.pdf", fatura.cliente.num_cliente, fatura.mes_referencia)
}

/// Pair every selected file with the upload form field.
pub fn upload_form_entries<F>(files: impl IntoIterator<Item = F>) -> Vec<(&'static str, F)> {
    files.into_iter().map(|file| (UPLOAD_FIELD, file)).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient snackbar message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: &'static str,
    pub seq: u64,
}

/// Files picked in the hidden input and the upload in flight for them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selection: Vec<String>,
    pub in_flight: bool,
}

#[derive(Clone, Debug, Default)]
pub struct FaturasState {
    pub downloading: BTreeSet<String>,
    pub upload: UploadState,
    pub notice: Option<Notice>,
    notice_seq: u64,
}

impl FaturasState {
    pub fn is_downloading(&self, id: &str) -> bool {
        self.downloading.contains(id)
    }

    /// Mark `id` busy. Returns `false` if a download for it is already running.
    pub fn begin_download(&mut self, id: &str) -> bool {
        self.downloading.insert(id.to_owned())
    }

    pub fn finish_download(&mut self, id: &str) {
        self.downloading.remove(id);
    }

    /// Record the selected file names and mark the upload in flight.
    ///
    /// Returns `false` for an empty selection or while another upload runs.
    pub fn begin_upload(&mut self, file_names: Vec<String>) -> bool {
        if file_names.is_empty() || self.upload.in_flight {
            return false;
        }
        self.upload = UploadState { selection: file_names, in_flight: true };
        true
    }

    /// Reset the selection and raise a notice. Returns `true` when the list
    /// should be refetched.
    pub fn finish_upload(&mut self, outcome: &Result<(), ApiError>) -> bool {
        self.upload = UploadState::default();
        match outcome {
            Ok(()) => {
                self.notify(NoticeKind::Success, UPLOAD_SUCCESS);
                true
            }
            Err(_) => {
                self.notify(NoticeKind::Error, UPLOAD_ERROR);
                false
            }
        }
    }

    /// Show a notice, replacing any current one. Returns its sequence for
    /// a later [`Self::dismiss_notice`].
    pub fn notify(&mut self, kind: NoticeKind, message: &'static str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { kind, message, seq: self.notice_seq });
        self.notice_seq
    }

    /// Dismiss the notice if it is still the one identified by `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }
}
