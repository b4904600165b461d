//! Toolbar Component
//!
//! Edit and save are separate buttons; only the one valid for the current
//! mode is shown.

use leptos::prelude::*;

use crate::store::{
    store_begin_edit, store_delete_memo, store_download_memo, store_save_memo, use_app_store,
    AppStateStoreFields,
};

#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();
    let buttons = Memo::new(move |_| store.pad().read().buttons());

    view! {
        <div class="memo-toolbar">
            <button
                id="edit"
                class="toolbar-btn"
                prop:hidden=move || !buttons.get().edit
                on:click=move |_| store_begin_edit(store)
            >
                "Edit"
            </button>
            <button
                id="save"
                class="toolbar-btn primary"
                prop:hidden=move || !buttons.get().save
                on:click=move |_| store_save_memo(store)
            >
                "Save"
            </button>
            <button id="delete" class="toolbar-btn danger" on:click=move |_| store_delete_memo(store)>
                "Delete"
            </button>
            <button id="download" class="toolbar-btn" on:click=move |_| store_download_memo(store)>
                "Download"
            </button>
        </div>
    }
}
