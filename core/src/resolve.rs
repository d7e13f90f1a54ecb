//! Flag token resolution.
//!
//! Applies one token at a time against a [`SchemaDescriptor`], assigning
//! resolved values straight into the instance being populated. Later
//! tokens overwrite earlier assignments to the same field; the engine
//! preserves token order to keep that last-write-wins behavior.

use crate::error::ParseError;
use crate::schema::{FieldKind, FieldValue, Schema, SchemaDescriptor};

/// Routes one token through long or short resolution.
///
/// Bare tokens are rejected here: by the time resolution runs, the router
/// has already claimed the single subcommand token, so anything without a
/// dash prefix matches no concept this grammar has.
pub(crate) fn apply_token<S: Schema>(
    desc: &SchemaDescriptor,
    inst: &mut S,
    token: &str,
) -> Result<(), ParseError> {
    if let Some(body) = token.strip_prefix("--") {
        resolve_long(desc, inst, token, body)
    } else if let Some(body) = token.strip_prefix('-') {
        resolve_short(desc, inst, token, body)
    } else {
        Err(ParseError::UnknownFlag(token.to_string()))
    }
}

/// Resolves `--name` / `--name=value`.
///
/// The name is matched against the effective long names of the schema.
/// Boolean fields are set true regardless of a supplied value; text
/// fields take the text after `=`, or the empty string if absent.
fn resolve_long<S: Schema>(
    desc: &SchemaDescriptor,
    inst: &mut S,
    token: &str,
    body: &str,
) -> Result<(), ParseError> {
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let field = desc
        .flag_by_long(name)
        .ok_or_else(|| ParseError::UnknownFlag(token.to_string()))?;

    if field.kind == FieldKind::Bool {
        inst.assign(field.ident, FieldValue::Bool(true));
    } else {
        inst.assign(field.ident, FieldValue::Text(value.unwrap_or("")));
    }
    Ok(())
}

/// Resolves `-x`, `-xvalue`, and batched `-xyz`.
///
/// Characters are scanned left to right. A boolean match sets its field
/// and continues, which is what makes batched groups like `-vde` work. A
/// text match consumes the remainder of the token as its value and ends
/// the scan; if it is not the first character, the value cannot be
/// separated from the preceding boolean letters and the token is
/// malformed.
fn resolve_short<S: Schema>(
    desc: &SchemaDescriptor,
    inst: &mut S,
    token: &str,
    body: &str,
) -> Result<(), ParseError> {
    for (pos, ch) in body.char_indices() {
        let field = desc
            .flag_by_short(ch)
            .ok_or_else(|| ParseError::UnknownFlag(token.to_string()))?;

        if field.kind == FieldKind::Bool {
            inst.assign(field.ident, FieldValue::Bool(true));
            continue;
        }

        if pos > 0 {
            return Err(ParseError::MalformedFlag(token.to_string()));
        }

        let value = &body[ch.len_utf8()..];
        inst.assign(field.ident, FieldValue::Text(value));
        break;
    }
    Ok(())
}
