//! Construction from, and export to, JSON text, delimited strings and
//! numeric ranges.

use std::fmt::Write as _;

use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    Result,
    container::{Container, Value},
    errors::CollectionError,
};

/// Encoding options for JSON export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonOptions {
    /// Emit non-ASCII characters as is instead of `\uXXXX` escapes
    pub unescaped_unicode: bool,
    /// Indent the output
    pub pretty: bool,
}

impl JsonOptions {
    /// Compact output with literal Unicode.
    pub fn unescaped() -> Self {
        Self {
            unescaped_unicode: true,
            pretty: false,
        }
    }
}

/// Decodes a JSON object or array into a container.
pub fn from_json(json: &str) -> Result<Container> {
    let value = decode_json(json)?;
    let actual = value.type_name();
    value.into_container().ok_or_else(|| {
        CollectionError::TypeMismatch {
            expected: "JSON object or array".to_string(),
            actual: actual.to_string(),
        }
        .into()
    })
}

/// Splits `text` on `delimiter` into a list of text values.
///
/// An empty `text` yields a single empty string.
pub fn from_string(text: &str, delimiter: &str) -> Result<Container> {
    if delimiter.is_empty() {
        return Err(CollectionError::invalid_argument("from_string", "delimiter is empty").into());
    }
    Ok(text.split(delimiter).map(Value::from).collect())
}

/// Builds the inclusive integer range from `start` to `end`.
///
/// The range descends when `start > end`; the sign of `step` is ignored.
pub fn from_range(start: i64, end: i64, step: i64) -> Result<Container> {
    if step == 0 {
        return Err(
            CollectionError::invalid_argument("from_range", "step must not be zero").into(),
        );
    }
    let step = step.unsigned_abs();
    let span = start.abs_diff(end);
    let descending = start > end;
    debug!(start, end, step, "Building range");

    let mut out = Container::new();
    let mut offset = 0u64;
    while offset <= span {
        let value = if descending {
            start.wrapping_sub_unsigned(offset)
        } else {
            start.wrapping_add_unsigned(offset)
        };
        out.push(value);
        match offset.checked_add(step) {
            Some(next) => offset = next,
            None => break,
        }
    }
    Ok(out)
}

/// Encodes the container as JSON. Lists become arrays, anything else an
/// object.
pub fn to_json(container: &Container, options: JsonOptions) -> Result<String> {
    encode_json(container, options)
}

/// Joins the values with `delimiter`.
///
/// `null` and `false` render as the empty string, `true` as `1`. Nested
/// containers cannot be joined.
pub fn to_string(container: &Container, delimiter: &str) -> Result<String> {
    let mut out = String::new();
    for (i, value) in container.values().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        match value {
            Value::Null | Value::Bool(false) => {}
            Value::Bool(true) => out.push('1'),
            Value::Container(_) => {
                return Err(CollectionError::TypeMismatch {
                    expected: "scalar".to_string(),
                    actual: value.type_name().to_string(),
                }
                .into());
            }
            scalar => {
                let _ = write!(out, "{scalar}");
            }
        }
    }
    Ok(out)
}

pub(crate) fn decode_json(text: &str) -> Result<Value> {
    serde_json::from_str::<Value>(text).map_err(|err| {
        warn!(error = %err, len = text.len(), "Rejected malformed JSON");
        CollectionError::InvalidJson {
            reason: err.to_string(),
        }
        .into()
    })
}

pub(crate) fn encode_json<T>(value: &T, options: JsonOptions) -> Result<String>
where
    T: Serialize + ?Sized,
{
    let encoded = if options.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    if options.unescaped_unicode {
        Ok(encoded)
    } else {
        Ok(escape_non_ascii(&encoded))
    }
}

/// Rewrites every non-ASCII character as `\uXXXX` UTF-16 escapes.
fn escape_non_ascii(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut units = [0u16; 2];
    for c in encoded.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                let _ = write!(out, "\\u{unit:04x}");
            }
        }
    }
    out
}
