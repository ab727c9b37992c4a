// File: kickwire-cli/src/headers.rs
//
// Captured request headers, stored as a flat JSON object: {"Kick-Event-Type": "...", ...}

use std::path::Path;

use anyhow::{Context, Result, bail};
use http::{HeaderMap, HeaderName, HeaderValue};
use serde_json::{Map, Value};

pub fn load_headers(path: &Path) -> Result<HeaderMap> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading headers from {}", path.display()))?;
    parse_headers(&raw).with_context(|| format!("parsing headers in {}", path.display()))
}

pub fn parse_headers(raw: &str) -> Result<HeaderMap> {
    let object: Map<String, Value> = serde_json::from_str(raw)?;

    let mut headers = HeaderMap::with_capacity(object.len());
    for (name, value) in object {
        let value = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            other => bail!("header '{}' must be a string, found {}", name, other),
        };
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("invalid header name '{}'", name))?;
        let value = HeaderValue::from_str(&value)
            .with_context(|| format!("invalid value for header '{}'", name))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
