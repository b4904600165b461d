//! Application State Store
//!
//! The memo pad lives in a reactive_stores `Store` provided via context.
//! Every user action goes through one of the helpers below.

use leptos::prelude::*;
use memo_pad_core::{DomainError, MemoPad, SystemClock};
use reactive_stores::Store;

use crate::download;
use crate::preview::schedule_render;
use crate::storage::BrowserStorage;

pub type Pad = MemoPad<BrowserStorage, SystemClock>;

/// Global application state
#[derive(Store)]
pub struct AppState {
    /// Memos, selection, edit mode, draft and preview
    pub pad: Pad,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Select the memo whose list entry was clicked
pub fn store_select_memo(store: AppStore, id: &str) {
    let result = store.pad().write().select_by_id(id);
    match result {
        Ok(()) => schedule_render(store),
        Err(e) => log::error!("[Store] Select failed: {}", e),
    }
}

/// Append a new memo and open it for editing
pub fn store_add_memo(store: AppStore) {
    let result = store.pad().write().add().map(|memo| memo.id.clone());
    match result {
        Ok(id) => {
            log::info!("[Store] Added memo {}", id);
            schedule_render(store);
        }
        Err(e) => {
            // The new memo is selected in memory even when persisting fails
            log::error!("[Store] Add failed: {}", e);
            schedule_render(store);
        }
    }
}

pub fn store_begin_edit(store: AppStore) {
    if let Err(e) = store.pad().write().begin_edit() {
        log::warn!("[Store] Edit ignored: {}", e);
    }
}

pub fn store_set_draft_title(store: AppStore, title: String) {
    if let Err(e) = store.pad().write().set_draft_title(&title) {
        log::warn!("[Store] Title change ignored: {}", e);
    }
}

pub fn store_set_draft_body(store: AppStore, body: String) {
    if let Err(e) = store.pad().write().set_draft_body(&body) {
        log::warn!("[Store] Body change ignored: {}", e);
    }
}

/// Commit the draft and return to the preview
pub fn store_save_memo(store: AppStore) {
    let result = store.pad().write().save();
    match result {
        Ok(()) => schedule_render(store),
        Err(e @ DomainError::InvalidState(_)) => log::warn!("[Store] Save ignored: {}", e),
        Err(e) => {
            // The edit is applied in memory even when persisting fails
            log::error!("[Store] Save failed: {}", e);
            schedule_render(store);
        }
    }
}

/// Delete the selected memo; the last memo is refused with an alert
pub fn store_delete_memo(store: AppStore) {
    let result = store.pad().write().delete_selected();
    match result {
        Ok(removed) => {
            log::info!("[Store] Deleted memo {}", removed.id);
            schedule_render(store);
        }
        Err(DomainError::LastMemo) => {
            let message = store.pad().read().config().delete_last_message.clone();
            alert(&message);
        }
        Err(e) => {
            log::error!("[Store] Delete failed: {}", e);
            schedule_render(store);
        }
    }
}

/// Download the selected memo's body as a markdown file
pub fn store_download_memo(store: AppStore) {
    let export = store.pad().read().export_selected();
    if let Err(e) = download::download_export(&export) {
        log::error!("[Store] Download of {} failed: {}", export.file_name, e);
    }
}

fn alert(message: &str) {
    let shown = web_sys::window().map(|window| window.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("[Store] Could not show alert: {}", message);
    }
}
