//! File Download
//!
//! Hands an `Export` to the browser as a Blob behind a temporary object URL.

use gloo_timers::future::TimeoutFuture;
use js_sys::Array;
use leptos::task::spawn_local;
use memo_pad_core::Export;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Object URLs are released after the browser has picked up the download
const REVOKE_DELAY_MS: u32 = 1_000;

pub fn download_export(export: &Export) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = Array::of1(&JsValue::from_str(&export.contents));
    let options = BlobPropertyBag::new();
    options.set_type(&export.mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&export.file_name);
    anchor.click();

    spawn_local(async move {
        TimeoutFuture::new(REVOKE_DELAY_MS).await;
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("[Download] Failed to revoke {}: {}", url, js_error(e));
        }
    });
    Ok(())
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
