//! Locating and filtering list items inside the source payload.
//!
//! The source wraps the item collection under an unpredictable top-level key
//! (an opaque session/list identifier it picks), so extraction is an explicit
//! scan over the top-level entries rather than a fixed schema. The first
//! entry whose value contains the collection wins; `serde_json` is built
//! with `preserve_order`, so "first" means document order.

use serde_json::Value;

/// Sub-key holding the item collection inside the matching top-level entry.
pub const LIST_ITEMS_KEY: &str = "listItems";

/// Field holding an item's human-readable text.
pub const ITEM_NAME_KEY: &str = "value";

/// Find the list-item collection inside an arbitrarily-keyed payload.
///
/// Scans top-level entries in document order and returns the `listItems`
/// array of the first value carrying one. `None` is a normal outcome (empty
/// or unrecognized payload), not an error. If several entries match, the
/// first wins — a deliberate tie-break, since the source does not promise
/// which keys appear.
pub fn extract_list_items(payload: &Value) -> Option<&[Value]> {
    payload
        .as_object()?
        .values()
        .find_map(|entry| entry.get(LIST_ITEMS_KEY).and_then(Value::as_array))
        .map(Vec::as_slice)
}

/// Keep the items still actionable: `completed` false, absent, or non-boolean.
///
/// Missing flags count as incomplete — forwarding twice is recoverable,
/// silently dropping an item is not. Source order is preserved.
pub fn filter_incomplete(items: &[Value]) -> Vec<Value> {
    items
        .iter()
        .filter(|item| {
            !item
                .get("completed")
                .and_then(Value::as_bool)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// The item's human-readable name, empty when absent.
///
/// Nameless items are still forwarded with an empty name; the engine does no
/// hidden filtering.
pub fn item_name(item: &Value) -> &str {
    item.get(ITEM_NAME_KEY).and_then(Value::as_str).unwrap_or("")
}
