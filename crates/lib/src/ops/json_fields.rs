//! JSON encoding and decoding of selected fields.
//!
//! Both functions work on one row; run them at depth 1 to process a list of
//! rows. Listed fields that are absent from the row are ignored.

use super::convert::{JsonOptions, decode_json, encode_json};
use crate::{
    Result,
    container::{Container, Key, Value},
};

/// Replaces each listed field with its JSON text.
pub fn json_encode_fields(
    container: &Container,
    fields: &[Key],
    options: JsonOptions,
) -> Result<Container> {
    let mut out = container.clone();
    for field in fields {
        if let Some(value) = out.get_mut(field) {
            *value = Value::Text(encode_json(&*value, options)?);
        }
    }
    Ok(out)
}

/// Replaces each listed text field with its decoded JSON value.
///
/// Fields holding anything other than text are left unchanged; malformed
/// JSON fails the whole call.
pub fn json_decode_fields(container: &Container, fields: &[Key]) -> Result<Container> {
    let mut out = container.clone();
    for field in fields {
        if let Some(Value::Text(text)) = out.get(field) {
            let decoded = decode_json(text)?;
            out.insert(field, decoded);
        }
    }
    Ok(out)
}
