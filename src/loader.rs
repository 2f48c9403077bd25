use std::path::Path;

use crate::error::{Error, Result};

/// Decoded input: category name -> property map. Key order follows the
/// source file (serde_json `preserve_order`).
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Reads and decodes a system-inventory record. PowerShell's JSON export
/// prefixes a UTF-8 BOM, so one is stripped if present.
pub fn load_record(path: &Path) -> Result<Record> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let text = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| Error::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        other => Err(Error::Decode {
            path: path.to_path_buf(),
            reason: format!("expected a top-level object, got {}", kind_of(&other)),
        }),
    }
}

fn kind_of(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
