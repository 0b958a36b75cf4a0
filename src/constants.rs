// src/constants.rs

//! Well-known paths, keywords and separators.

/// The shell profile used when a text-file target is left empty.
pub const DEFAULT_PROFILE: &str = "~/.bashrc";

/// The marker at the start of a target that stands for the user's home directory.
pub const HOME_MARKER: char = '~';

/// The keyword that opens every definition statement in a shell profile.
pub const EXPORT_KEYWORD: &str = "export";

/// Joins the values of a variable that is defined more than once.
pub const VALUE_SEPARATOR: &str = ";";

/// Separates the name, type and value columns in `reg query` output.
pub const REGISTRY_FIELD_SEPARATOR: &str = "    ";

/// Registry key holding the current user's environment.
pub const REGISTRY_PATH_USER: &str = r"HKCU\Environment";

/// Registry key holding the machine-wide environment.
pub const REGISTRY_PATH_SYSTEM: &str =
    r"HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment";

/// Shell used to append definitions and reload the profile.
pub const POSIX_SHELL: &str = "bash";

/// Registry target name for the per-user scope. An empty target means the same.
pub const TARGET_USER: &str = "user";

/// Registry target name for the machine-wide scope.
pub const TARGET_SYSTEM: &str = "system";
