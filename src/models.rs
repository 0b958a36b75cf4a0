// src/models.rs

//! Backends, scopes and decoded records.

use crate::constants::{REGISTRY_PATH_SYSTEM, REGISTRY_PATH_USER};
use std::fmt;

/// One record decoded from `reg query` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRecord {
    /// The registry key path printed above the record.
    pub header: String,
    /// The variable name.
    pub name: String,
    /// The raw value, verbatim.
    pub value: String,
}

/// Which environment block of the registry a backend addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryScope {
    /// `HKCU\Environment`.
    User,
    /// The machine-wide `Session Manager\Environment` key.
    System,
}

impl RegistryScope {
    /// The registry key path for this scope.
    pub fn key_path(self) -> &'static str {
        match self {
            Self::User => REGISTRY_PATH_USER,
            Self::System => REGISTRY_PATH_SYSTEM,
        }
    }
}

impl fmt::Display for RegistryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_path())
    }
}

/// The family of operating system whose storage medium is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Variables live in a shell profile such as `~/.bashrc`.
    Posix,
    /// Variables live in the registry and are edited with `reg` / `setx`.
    Windows,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

/// The storage medium bound to a [`crate::GlobalEnv`], chosen once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    /// A shell profile. Holds the unresolved target (may start with `~`).
    TextFile(String),
    /// A registry environment block.
    Registry(RegistryScope),
}
