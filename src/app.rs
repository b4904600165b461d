//! Memo Pad Frontend App
//!
//! Two-column layout: memo list on the left, toolbar and detail on the right.

use leptos::prelude::*;
use memo_pad_core::{MemoPad, PadConfig, SystemClock};
use reactive_stores::Store;

use crate::components::{MemoDetail, MemoList, Toolbar};
use crate::preview::schedule_render;
use crate::storage::BrowserStorage;
use crate::store::AppState;

#[component]
pub fn App(config: PadConfig) -> impl IntoView {
    let key = config.storage_key.clone();
    match MemoPad::init(BrowserStorage, SystemClock, config) {
        Ok(pad) => {
            log::info!("[APP] Loaded {} memos from '{}'", pad.len(), key);
            let store = Store::new(AppState { pad });
            provide_context(store);
            schedule_render(store);

            view! {
                <div class="app-layout">
                    <MemoList />
                    <main class="main-content">
                        <Toolbar />
                        <MemoDetail />
                    </main>
                </div>
            }
            .into_any()
        }
        Err(e) => {
            log::error!("[APP] Failed to open memo storage '{}': {}", key, e);
            view! {
                <div class="load-error">
                    <h1>"Memo Pad"</h1>
                    <p>{format!("Memos could not be loaded: {}", e)}</p>
                </div>
            }
            .into_any()
        }
    }
}
