//! Raw CMS entry model.
//!
//! Entries are the loosely-typed input to the mapping layer: a content-type
//! tag plus an arbitrary JSON field bag. The loose shape stops at this
//! module's boundary — everything downstream works with the typed sections
//! in `folio-types`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ContentError, ContentResult};

/// One unit of content retrieved from the delivery API.
///
/// Only `sys.contentType.sys.id` and `fields` matter to the mapper; any
/// other `sys` metadata the API sends is tolerated and ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// System metadata (id, content type link)
    #[serde(default)]
    pub sys: Sys,
    /// Untrusted field bag; values may be missing or wrong-typed
    #[serde(default)]
    pub fields: Map<String, Value>,
}

/// System metadata carried by every entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sys {
    /// Opaque entry identifier
    #[serde(default)]
    pub id: String,
    /// Link to the entry's content type
    #[serde(default)]
    pub content_type: Option<ContentTypeLink>,
}

/// Indirection wrapper around the content-type identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeLink {
    /// Nested system metadata holding the type id
    pub sys: ContentTypeSys,
}

/// The content-type identifier itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentTypeSys {
    /// Content-type tag, e.g. `"sectionHero"`
    pub id: String,
}

impl Entry {
    /// The entry's content-type tag, if the link is present.
    pub fn content_type_tag(&self) -> Option<&str> {
        self.sys
            .content_type
            .as_ref()
            .map(|link| link.sys.id.as_str())
    }

    /// Borrow a raw field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Extract a field as an owned string.
    ///
    /// Non-string values degrade to `None`; no coercion is attempted.
    pub fn string_field(&self, name: &str) -> Option<String> {
        self.field(name)?.as_str().map(str::to_string)
    }

    /// Extract a field as an ordered list of strings.
    ///
    /// A non-array value degrades to `None`; non-string items within an
    /// array are skipped individually.
    pub fn string_list_field(&self, name: &str) -> Option<Vec<String>> {
        let items = self.field(name)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
        )
    }

    /// Resolve an asset-reference field to an absolute URL.
    ///
    /// Asset references are a field-bag wrapper around a file descriptor:
    /// `{"fields": {"file": {"url": "//host/path"}}}`. The protocol-relative
    /// URL is normalized to `https:`. Anything missing or wrong-shaped along
    /// the way degrades to `None`, never to an empty string.
    pub fn asset_url_field(&self, name: &str) -> Option<String> {
        let url = self
            .field(name)?
            .get("fields")?
            .get("file")?
            .get("url")?
            .as_str()?;
        Some(normalize_asset_url(url))
    }
}

/// Normalize a CMS asset URL to an absolute secure URL.
///
/// The delivery API serves protocol-relative URLs (`//images...`); those are
/// prefixed with `https:`. Already-absolute URLs pass through unchanged.
pub fn normalize_asset_url(url: &str) -> String {
    if let Some(rest) = url.strip_prefix("//") {
        format!("https://{}", rest)
    } else {
        url.to_string()
    }
}

/// Delivery-API collection wrapper (`{"items": [...]}`).
#[derive(Debug, Deserialize)]
struct EntryCollection {
    #[serde(default)]
    items: Vec<Entry>,
}

/// Decode a delivery-API response body into entries.
///
/// Accepts either a collection object (`{"items": [...]}`) or a bare entry
/// array, which is what local snapshots written by the CLI contain.
pub fn entries_from_json(json: &str) -> ContentResult<Vec<Entry>> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(_) => {
            let collection: EntryCollection = serde_json::from_value(value)?;
            Ok(collection.items)
        }
        other => Err(ContentError::Shape(format!(
            "expected an entry array or collection object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Decode a single entry.
pub fn entry_from_json(json: &str) -> ContentResult<Entry> {
    Ok(serde_json::from_str(json)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
