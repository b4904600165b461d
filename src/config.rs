//! Config Loading
//!
//! Overrides come from an inline JSON block in `index.html`:
//! `<script id="memo-pad-config" type="application/json">{...}</script>`

use memo_pad_core::PadConfig;

const CONFIG_ELEMENT_ID: &str = "memo-pad-config";

/// Read the inline config, falling back to defaults
pub fn load_config() -> PadConfig {
    let Some(raw) = inline_config_text() else {
        return PadConfig::default();
    };
    match PadConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            // The logger is not installed yet, write straight to the console
            web_sys::console::warn_1(&format!("[Config] Using defaults: {}", e).into());
            PadConfig::default()
        }
    }
}

fn inline_config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
    if text.trim().is_empty() { None } else { Some(text) }
}
