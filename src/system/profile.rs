// src/system/profile.rs

//! Reading, rewriting and appending to shell profiles.
//!
//! There is no locking: two processes running `unset` (or `unset` and `set`)
//! on the same profile at once can lose one of the updates. The rewrite
//! itself goes through a temporary file, so a reader never observes a
//! half-written profile.

use crate::{constants::POSIX_SHELL, errors::EnvError};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the whole profile.
pub fn read_profile(path: &Path) -> Result<Vec<u8>, EnvError> {
    fs::read(path).map_err(|e| EnvError::io(path, e))
}

/// Replaces the profile's content, keeping its permissions.
///
/// Symlinks are followed, so a profile managed as a link into a dotfiles
/// repository stays a link.
pub fn write_profile(path: &Path, content: &[u8]) -> Result<(), EnvError> {
    let target = fs::canonicalize(path).map_err(|e| EnvError::io(path, e))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| EnvError::io(dir, e))?;
    temp.write_all(content)
        .and_then(|()| temp.flush())
        .map_err(|e| EnvError::io(temp.path(), e))?;

    let permissions = fs::metadata(&target)
        .map_err(|e| EnvError::io(&target, e))?
        .permissions();
    fs::set_permissions(temp.path(), permissions).map_err(|e| EnvError::io(temp.path(), e))?;

    temp.persist(&target)
        .map_err(|e| EnvError::io(&target, e.error))?;
    log::debug!("Rewrote profile '{}'", target.display());
    Ok(())
}

/// Arguments for `bash` that append `line` to the profile and source it.
///
/// Every interpolated piece is shell-quoted, so keys, values and paths are
/// never interpreted by the shell.
pub fn append_and_source_args(path: &Path, line: &str) -> Result<Vec<String>, EnvError> {
    let path = path.to_string_lossy();
    let quoted_path = shlex::try_quote(&path)?;
    let quoted_line = shlex::try_quote(line)?;
    let script = format!(
        "printf '%s\\n' {quoted_line} >> {quoted_path} && source {quoted_path}"
    );
    Ok(vec!["-c".to_string(), script])
}

/// The shell that runs the script built by [`append_and_source_args`].
pub fn shell_program() -> &'static str {
    POSIX_SHELL
}
