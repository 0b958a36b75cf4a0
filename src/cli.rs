// src/cli.rs

//! Command-line definition for the `globalenv` binary.

use clap::{Parser, Subcommand};

/// globalenv: Get, set and unset persistent environment variables.
///
/// On POSIX systems variables are stored as `export KEY="VALUE"` lines in a
/// shell profile. On Windows they are stored in the registry.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Where variables are stored.
    ///
    /// On POSIX, a profile path such as `~/.zshrc` (default: `~/.bashrc`).
    /// On Windows, `user` (default) or `system`.
    #[arg(long, short, global = true, env = "GLOBALENV_TARGET", default_value = "")]
    pub target: String,

    /// The operation to perform.
    #[command(subcommand)]
    pub action: Action,
}

/// The operation to perform.
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Print the value of a variable.
    Get {
        /// The variable name.
        key: String,
    },
    /// Store a variable.
    Set {
        /// The variable name.
        key: String,
        /// The value to store.
        value: String,
    },
    /// Remove every definition of a variable.
    #[command(alias = "rm")]
    Unset {
        /// The variable name.
        key: String,
    },
}
