//! Transient snackbar for action outcomes.

use leptos::prelude::*;

use crate::state::faturas::{Notice, NoticeKind};

#[component]
pub fn Notification(#[prop(into)] notice: Signal<Option<Notice>>, on_close: Callback<u64>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let seq = notice.seq;
            view! {
                <div
                    class="notification"
                    class:notification--success={notice.kind == NoticeKind::Success}
                    class:notification--error={notice.kind == NoticeKind::Error}
                    role="status"
                >
                    <span class="notification__message">{notice.message}</span>
                    <button class="notification__close" on:click=move |_| on_close.run(seq) title="Fechar">
                        "×"
                    </button>
                </div>
            }
        })
    }
}
