//! Page-supplied demo configuration.
//!
//! A page may embed overrides as JSON:
//!
//! ```html
//! <script type="application/json" id="circle-field-config">{ "count": 400 }</script>
//! ```
//!
//! Missing elements mean defaults. Malformed or invalid JSON is logged and
//! also falls back to defaults, so a bad override never blanks the demo.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use canvas::config::{BoardConfig, ConfigError, FieldConfig};

/// Element id holding circle field overrides.
pub const FIELD_CONFIG_ID: &str = "circle-field-config";

/// Element id holding drag board overrides.
pub const BOARD_CONFIG_ID: &str = "drag-board-config";

/// Text content of the element with `id`, if present and non-blank.
#[must_use]
pub fn read_config_json(id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(id)?.text_content()?;
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Parse `raw` with `parse`, falling back to `T::default()` on absence or error.
pub fn resolve<T, F>(label: &str, raw: Option<&str>, parse: F) -> T
where
    T: Default,
    F: FnOnce(&str) -> Result<T, ConfigError>,
{
    let Some(raw) = raw else {
        return T::default();
    };
    match parse(raw) {
        Ok(config) => {
            log::debug!("{label}: using page config");
            config
        }
        Err(e) => {
            log::warn!("{label}: ignoring page config ({e}); using defaults");
            T::default()
        }
    }
}

/// Circle field settings for the current page.
#[must_use]
pub fn field_config() -> FieldConfig {
    resolve("circle field", read_config_json(FIELD_CONFIG_ID).as_deref(), FieldConfig::from_json)
}

/// Drag board settings for the current page.
#[must_use]
pub fn board_config() -> BoardConfig {
    resolve("drag board", read_config_json(BOARD_CONFIG_ID).as_deref(), BoardConfig::from_json)
}
