//! Site and device enrichment of an outbound auction request.
//!
//! Publisher-configured `site` and `device` objects are forwarded as-is; the
//! adapter only fills in fields that are missing or falsy.

use serde_json::{json, Map, Value};

use crate::config::AdapterConfig;
use crate::openrtb::AuctionRequest;

/// Loose truthiness of a JSON value as host frameworks evaluate bidder params
/// and config fields: `null`, `false`, `0` and `""` are falsy.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn has_truthy(object: &Map<String, Value>, key: &str) -> bool {
    object.get(key).is_some_and(is_truthy)
}

/// Populate `site` and `device` on `request`.
///
/// `page_url` is the referring page; when the site has no page of its own it
/// becomes `site.page` (JSON null when unknown) and the publisher is set to
/// the host's exchange account. Device dimensions fall back to the configured
/// viewport.
pub fn append_site_device(
    request: Option<&mut AuctionRequest>,
    page_url: Option<&str>,
    config: &AdapterConfig,
) {
    let Some(request) = request else {
        return;
    };

    let mut site = config.site.clone().unwrap_or_default();
    if !has_truthy(&site, "page") {
        site.insert("page".to_string(), page_url.map_or(Value::Null, |url| json!(url)));
        site.insert("publisher".to_string(), json!({ "id": config.publisher_id }));
    }
    request.site = Some(site);

    let mut device = config.device.clone().unwrap_or_default();
    if let Some(viewport) = config.viewport {
        if !has_truthy(&device, "w") {
            device.insert("w".to_string(), json!(viewport.width));
        }
        if !has_truthy(&device, "h") {
            device.insert("h".to_string(), json!(viewport.height));
        }
    }
    request.device = Some(device);
}
