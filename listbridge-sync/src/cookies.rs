//! Cookie jar loader.
//!
//! The jar is produced by an out-of-band login flow and persisted as JSON at
//! a configured path. Two shapes are accepted:
//!
//! - flat: `{ "session-id": "abc", "at-main": "def" }`
//! - legacy nested, keyed by domain:
//!   `{ ".example.com": { "session-id": { "name": "session-id", "value": "abc" } } }`
//!
//! The nested shape is flattened by merging every domain's (name, value)
//! pairs into one map. Later domains overwrite earlier ones on name
//! collision; that is accepted, not guarded.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{SyncError, SyncResult};

/// Load the cookie jar from `path` into a flat name→value map.
///
/// A missing file, unreadable bytes, or an unrecognized shape all mean "no
/// credentials available" — never "empty but valid". An empty-but-valid jar
/// is rejected later, by the client's pre-request check.
pub fn load_cookies(path: &Path) -> SyncResult<HashMap<String, String>> {
    let raw = fs::read_to_string(path).map_err(|e| {
        SyncError::CookieJar(format!("failed to read {}: {e}", path.display()))
    })?;

    let doc: Value = serde_json::from_str(&raw).map_err(|e| {
        SyncError::CookieJar(format!("failed to parse {}: {e}", path.display()))
    })?;

    let Some(top) = doc.as_object() else {
        return Err(SyncError::CookieJar(format!(
            "{} is not a JSON object",
            path.display()
        )));
    };

    // Flat shape: every top-level value is already a string.
    if top.values().all(Value::is_string) {
        return Ok(top
            .iter()
            .filter_map(|(name, v)| v.as_str().map(|s| (name.clone(), s.to_string())))
            .collect());
    }

    // Legacy nested shape: domain → { cookie name → entry with a value }.
    let mut flat = HashMap::new();
    for (domain, collection) in top {
        let Some(entries) = collection.as_object() else {
            return Err(SyncError::CookieJar(format!(
                "unrecognized cookie collection for domain {domain:?}"
            )));
        };

        for (key, entry) in entries {
            let value = match entry {
                Value::String(s) => s.clone(),
                other => other
                    .get("value")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        SyncError::CookieJar(format!(
                            "cookie {key:?} under domain {domain:?} has no value"
                        ))
                    })?,
            };

            // The entry's own name field wins over its map key when present.
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or(key)
                .to_string();

            flat.insert(name, value);
        }
    }

    Ok(flat)
}

/// Render a flat cookie map as a `Cookie` header value.
pub fn cookie_header(cookies: &HashMap<String, String>) -> String {
    cookies
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn jar_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn flat_jar_returned_unchanged() {
        let file = jar_file(r#"{"session-id": "abc", "at-main": "def"}"#);
        let cookies = load_cookies(file.path()).unwrap();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies["session-id"], "abc");
        assert_eq!(cookies["at-main"], "def");
    }

    #[test]
    fn nested_jar_flattens_across_domains() {
        let file = jar_file(
            r#"{
                ".example.com": {
                    "session-id": { "name": "session-id", "value": "abc" }
                },
                "www.example.com": {
                    "at-main": { "name": "at-main", "value": "def" }
                }
            }"#,
        );
        let cookies = load_cookies(file.path()).unwrap();
        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies["session-id"], "abc");
        assert_eq!(cookies["at-main"], "def");
    }

    #[test]
    fn nested_jar_later_domain_overwrites_on_collision() {
        let file = jar_file(
            r#"{
                ".example.com": {
                    "session-id": { "name": "session-id", "value": "old" }
                },
                "www.example.com": {
                    "session-id": { "name": "session-id", "value": "new" }
                }
            }"#,
        );
        let cookies = load_cookies(file.path()).unwrap();
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies["session-id"], "new");
    }

    #[test]
    fn nested_entry_name_field_wins_over_key() {
        let file = jar_file(
            r#"{".example.com": {"whatever": {"name": "real-name", "value": "v"}}}"#,
        );
        let cookies = load_cookies(file.path()).unwrap();
        assert_eq!(cookies["real-name"], "v");
    }

    #[test]
    fn nested_entry_plain_string_value_accepted() {
        let file = jar_file(r#"{".example.com": {"session-id": "abc"}}"#);
        let cookies = load_cookies(file.path()).unwrap();
        assert_eq!(cookies["session-id"], "abc");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_cookies(Path::new("/nonexistent/cookies.json")).unwrap_err();
        assert!(matches!(err, SyncError::CookieJar(_)));
    }

    #[test]
    fn malformed_json_is_a_load_error() {
        let file = jar_file("not json at all");
        assert!(matches!(
            load_cookies(file.path()).unwrap_err(),
            SyncError::CookieJar(_)
        ));
    }

    #[test]
    fn non_object_document_is_a_load_error() {
        let file = jar_file(r#"["a", "b"]"#);
        assert!(matches!(
            load_cookies(file.path()).unwrap_err(),
            SyncError::CookieJar(_)
        ));
    }

    #[test]
    fn entry_without_value_is_a_load_error() {
        let file = jar_file(r#"{".example.com": {"session-id": {"name": "session-id"}}}"#);
        assert!(matches!(
            load_cookies(file.path()).unwrap_err(),
            SyncError::CookieJar(_)
        ));
    }

    #[test]
    fn empty_jar_loads_as_empty_map() {
        let file = jar_file("{}");
        assert!(load_cookies(file.path()).unwrap().is_empty());
    }

    #[test]
    fn cookie_header_joins_pairs() {
        let mut cookies = HashMap::new();
        cookies.insert("session-id".to_string(), "abc".to_string());
        assert_eq!(cookie_header(&cookies), "session-id=abc");
    }
}
