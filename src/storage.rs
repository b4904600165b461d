//! Browser Storage Backend
//!
//! `KeyValueStore` over `window.localStorage`. The storage handle is looked
//! up on every call, which keeps this type `Send + Sync` for the app store.

use memo_pad_core::{DomainError, DomainResult, KeyValueStore};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> DomainResult<web_sys::Storage> {
        let window = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("localStorage unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> DomainResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> DomainResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> DomainError {
    DomainError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
