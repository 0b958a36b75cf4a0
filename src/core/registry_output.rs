// src/core/registry_output.rs

//! Decoding `reg query` output.

use crate::{constants::REGISTRY_FIELD_SEPARATOR, errors::EnvError, models::RegistryRecord};

/// Decodes the output of `reg query <path> /v <name>` into a [`RegistryRecord`].
///
/// The expected shape is a header line, a blank line, then one record line:
///
/// ```text
/// HKEY_CURRENT_USER\Environment
///     globalEnv    REG_SZ    Hello Global Environment!
/// ```
///
/// Only the first two separators on the record line delimit fields, so the
/// value may itself contain runs of four spaces.
///
/// # Errors
/// Returns [`EnvError::MalformedResponse`] if the output does not have three
/// segments, or its record line does not have three fields, and
/// [`EnvError::InvalidUtf8`] if the output is not valid UTF-8.
pub fn parse_query_output(output: &[u8]) -> Result<RegistryRecord, EnvError> {
    let text = std::str::from_utf8(output).map_err(|source| EnvError::InvalidUtf8 {
        what: "reg query output".to_string(),
        source,
    })?;
    let mut segments = text.splitn(3, '\n');
    let (Some(first), Some(second), Some(record)) =
        (segments.next(), segments.next(), segments.next())
    else {
        return Err(EnvError::MalformedResponse);
    };

    let mut fields = record.trim().splitn(3, REGISTRY_FIELD_SEPARATOR);
    let (Some(name), Some(_value_type), Some(value)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(EnvError::MalformedResponse);
    };

    // The header is whichever of the first two segments is not blank.
    let header = if first.trim().is_empty() { second } else { first };

    Ok(RegistryRecord {
        header: header.trim().to_string(),
        name: name.to_string(),
        value: value.to_string(),
    })
}
