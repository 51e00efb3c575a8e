//! Leaflet page assembly via placeholder replacement.

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;

use crate::maps::templates::PAGE_TEMPLATE;

/// Renders a standalone map page from the shared template.
///
/// `payload` is serialized to JSON and spliced in place of the quoted
/// `__PAYLOAD__` token so the page's JS sees a plain object literal.
pub fn render_page(
    page_title: &str,
    header_html: &str,
    overlay_html: &str,
    payload: &impl Serialize,
    view_js: &str,
) -> Result<String> {
    let json = serde_json::to_string(payload)?;

    Ok(PAGE_TEMPLATE
        .replace("__PAGE_TITLE__", page_title)
        .replace("__HEADER_HTML__", header_html)
        .replace("__OVERLAY_HTML__", overlay_html)
        .replace("\"__PAYLOAD__\"", &json)
        .replace("__VIEW_JS__", view_js)
        .replace("__GENERATED_AT__", &Utc::now().to_rfc3339()))
}
