// src/core/definitions.rs

//! Locating, reading and removing `export KEY=VALUE` statements in a shell profile.
//!
//! The profile is treated as opaque bytes. A line is a definition of `KEY` only
//! if it starts with `export`, followed by at least one blank, the key spelled
//! literally, and `=`. Keys are never interpreted as patterns, so names like
//! `A.B` or `X*` only ever match themselves.
//!
//! Compound lines such as `export A=1; export B=2` are not split: the whole
//! remainder after `A=` is the value of `A`, and erasing `A` drops the line.

use crate::{
    constants::{EXPORT_KEYWORD, VALUE_SEPARATOR},
    errors::EnvError,
};

/// Blanks allowed between `export` and the key. Newlines never count.
fn is_inline_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | 0x0b | 0x0c)
}

/// Drops the `\n` or `\r\n` terminator from a line, if present.
fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Returns the raw VALUE if `line` is a definition statement for `key`.
fn definition_value<'a>(line: &'a [u8], key: &str) -> Option<&'a [u8]> {
    let rest = line.strip_prefix(EXPORT_KEYWORD.as_bytes())?;
    let blanks = rest
        .iter()
        .take_while(|&&b| is_inline_whitespace(b))
        .count();
    if blanks == 0 {
        return None;
    }
    rest.get(blanks..)?
        .strip_prefix(key.as_bytes())?
        .strip_prefix(b"=")
        .map(strip_terminator)
}

/// Collects the raw value of every definition of `key`, in document order.
pub fn scan_definitions<'a>(content: &'a [u8], key: &str) -> Vec<&'a [u8]> {
    content
        .split_inclusive(|&b| b == b'\n')
        .filter_map(|line| definition_value(line, key))
        .collect()
}

/// Strips one layer of surrounding double quotes and every `$KEY:` self-reference.
///
/// # Errors
/// Returns [`EnvError::InvalidUtf8`] if the value is not valid UTF-8.
pub fn normalize_value(raw: &[u8], key: &str) -> Result<String, EnvError> {
    let unquoted = match raw {
        [b'"', inner @ .., b'"'] => inner,
        _ => raw,
    };
    let text = std::str::from_utf8(unquoted).map_err(|source| EnvError::InvalidUtf8 {
        what: key.to_string(),
        source,
    })?;
    let self_reference = format!("${key}:");
    Ok(text.replace(&self_reference, ""))
}

/// Reads the merged value of `key`: every definition normalized and joined with `;`.
///
/// # Errors
/// Returns [`EnvError::KeyNotFound`] when the profile holds no definition of `key`,
/// and [`EnvError::InvalidUtf8`] when one of its values cannot be decoded.
pub fn query(content: &[u8], key: &str) -> Result<String, EnvError> {
    let matches = scan_definitions(content, key);
    if matches.is_empty() {
        return Err(EnvError::KeyNotFound(key.to_string()));
    }
    log::debug!("Found {} definition(s) of '{}'", matches.len(), key);

    let values = matches
        .into_iter()
        .map(|raw| normalize_value(raw, key))
        .collect::<Result<Vec<String>, EnvError>>()?;
    Ok(values.join(VALUE_SEPARATOR))
}

/// Removes every definition line of `key`, terminator included.
///
/// All other bytes are returned unchanged and in order. A final line without a
/// terminator is removed as well.
pub fn erase_definitions(content: &[u8], key: &str) -> Vec<u8> {
    let mut kept = Vec::with_capacity(content.len());
    for line in content.split_inclusive(|&b| b == b'\n') {
        if definition_value(line, key).is_none() {
            kept.extend_from_slice(line);
        }
    }
    kept
}

/// Renders the statement appended to a profile by `set`.
pub fn render_definition(key: &str, value: &str) -> String {
    format!("{EXPORT_KEYWORD} {key}=\"{value}\"")
}
