//! Preview Rendering
//!
//! Markdown is converted on the next browser task so highlighting never
//! blocks the click that triggered it. Results for a superseded request are
//! dropped by the pad.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use memo_pad_core::{Clock, KeyValueStore, MemoPad, RenderTicket};

use crate::markdown::{render_markdown, MarkdownError};
use crate::store::{AppStateStoreFields, AppStore};

/// Render the selected memo's body into the preview pane
pub fn schedule_render(store: AppStore) {
    let request = store.pad().write().request_render();
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        let result = render_markdown(&request.markdown);
        let pad_field = store.pad();
        let mut pad = pad_field.write();
        apply_render(&mut *pad, &request.ticket, result);
    });
}

/// Hand a finished render to the pad. Returns whether the preview changed.
pub fn apply_render<S: KeyValueStore, C: Clock>(
    pad: &mut MemoPad<S, C>,
    ticket: &RenderTicket,
    result: Result<String, MarkdownError>,
) -> bool {
    match result {
        Ok(html) => {
            let applied = pad.complete_render(ticket, html);
            if !applied {
                log::debug!("[Preview] Dropped stale render for memo {}", ticket.memo_id());
            }
            applied
        }
        Err(e) => {
            // Previous preview stays in place
            pad.fail_render(ticket, &e.to_string());
            false
        }
    }
}
