//! Path-expression evaluation over JSON values.
//!
//! A path is a dotted sequence of object keys where array indices may appear
//! bracketed (`items[0]`) or bare (`items.0`). Evaluation is total: any step
//! that fails to resolve yields [`Extracted::Absent`], never a panic.

use serde::Serialize;
use serde_json::Value;

/// Outcome of evaluating a path expression against a JSON value.
///
/// Serializes as `{"value": <json>}` or `"absent"` for presentation layers
/// that ship snapshots as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Extracted {
    /// The value found at the path.
    Value(Value),
    /// The path did not resolve at some step.
    Absent,
}

impl Extracted {
    pub fn is_absent(&self) -> bool {
        matches!(self, Extracted::Absent)
    }

    /// Render for display: pretty-printed JSON for containers, bare text for
    /// scalars (strings unquoted), `"not found"` for [`Extracted::Absent`].
    pub fn render(&self) -> String {
        match self {
            Extracted::Absent => "not found".to_string(),
            Extracted::Value(Value::String(s)) => s.clone(),
            Extracted::Value(v @ (Value::Object(_) | Value::Array(_))) => {
                serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string())
            }
            Extracted::Value(v) => v.to_string(),
        }
    }
}

impl std::fmt::Display for Extracted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Walk `root` along `path` and return the value found there.
///
/// Bracketed integer indices are normalized to dotted segments before
/// splitting, so `a.b[0].c` and `a.b.0.c` are equivalent. At each step a
/// missing key, out-of-range index, non-numeric segment against an array, or
/// non-container current value short-circuits to [`Extracted::Absent`].
pub fn extract(root: &Value, path: &str) -> Extracted {
    let normalized = normalize_brackets(path);
    let mut current = root;
    for segment in normalized.split('.') {
        current = match current {
            Value::Object(map) => match map.get(segment) {
                Some(next) => next,
                None => return Extracted::Absent,
            },
            Value::Array(items) => {
                match segment.parse::<usize>().ok().and_then(|i| items.get(i)) {
                    Some(next) => next,
                    None => return Extracted::Absent,
                }
            }
            _ => return Extracted::Absent,
        };
    }
    Extracted::Value(current.clone())
}

/// Rewrite `[N]` index segments to `.N` so the path splits uniformly on `.`.
///
/// Only digit-only bracket contents are rewritten; anything else (including
/// unmatched brackets) is kept verbatim and treated as literal key text.
fn normalize_brackets(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;
    while let Some(open) = rest.find('[') {
        let (head, tail) = rest.split_at(open);
        out.push_str(head);
        match tail[1..].find(']') {
            Some(close) => {
                let inner = &tail[1..1 + close];
                if !inner.is_empty() && inner.bytes().all(|b| b.is_ascii_digit()) {
                    out.push('.');
                    out.push_str(inner);
                } else {
                    out.push_str(&tail[..close + 2]);
                }
                rest = &tail[close + 2..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}
