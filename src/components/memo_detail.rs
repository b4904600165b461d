//! Memo Detail Component
//!
//! Right column: title and body fields, editable only in edit mode, and the
//! rendered preview shown while viewing.

use chrono::{Local, TimeZone};
use leptos::prelude::*;

use crate::store::{store_set_draft_body, store_set_draft_title, use_app_store, AppStateStoreFields};

/// Epoch milliseconds as local `YYYY-MM-DD HH:MM`
fn format_timestamp(ms: i64) -> String {
    match Local.timestamp_millis_opt(ms).single() {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

#[component]
pub fn MemoDetail() -> impl IntoView {
    let store = use_app_store();
    // Memoized views of the pad; draft keystrokes only reach the fields
    let editing = Memo::new(move |_| store.pad().read().mode().is_editing());
    let stamps = Memo::new(move |_| {
        let pad = store.pad().read();
        let memo = pad.selected_memo();
        (memo.created_at, memo.updated_at)
    });
    let preview_html = Memo::new(move |_| store.pad().read().preview_html().to_string());

    let timestamps = move || {
        let (created, updated) = stamps.get();
        format!(
            "Created {} · Updated {}",
            format_timestamp(created),
            format_timestamp(updated)
        )
    };

    view! {
        <section class="memo-detail">
            <input
                id="memoTitle"
                class="memo-title-input"
                type="text"
                prop:value=move || store.pad().read().draft().title.clone()
                prop:disabled=move || !editing.get()
                on:input=move |ev| store_set_draft_title(store, event_target_value(&ev))
            />
            <div class="memo-timestamps">{timestamps}</div>

            <textarea
                id="memoBody"
                class="memo-textarea"
                prop:value=move || store.pad().read().draft().body.clone()
                prop:disabled=move || !editing.get()
                prop:hidden=move || !editing.get()
                on:input=move |ev| store_set_draft_body(store, event_target_value(&ev))
                placeholder="Write markdown..."
            ></textarea>

            <div
                id="preview"
                class="memo-preview-content"
                prop:hidden=move || editing.get()
                inner_html=move || preview_html.get()
            ></div>
        </section>
    }
}
