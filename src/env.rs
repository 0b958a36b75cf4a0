// src/env.rs

//! The public get / set / unset surface.

use crate::{
    core::{definitions, paths, registry_output},
    errors::EnvError,
    models::{Backend, Platform},
    system::{
        executor::{CommandRunner, SystemRunner},
        profile,
        registry::RegBuilder,
    },
};

/// Persistent environment variables, bound to one storage medium.
///
/// The backend is chosen once at construction and never changes. On POSIX
/// it is a shell profile, on Windows a registry scope.
#[derive(Debug, Clone)]
pub struct GlobalEnv<R = SystemRunner> {
    backend: Backend,
    runner: R,
}

impl GlobalEnv<SystemRunner> {
    /// The host's default store: `~/.bashrc`, or the user's registry environment.
    pub fn detect() -> Self {
        Self::with_runner(Backend::default_for(Platform::host()), SystemRunner)
    }

    /// The host's store for `target`.
    ///
    /// On POSIX the target is a profile path (`~` is expanded on use, empty
    /// means `~/.bashrc`). On Windows it is `""`, `"user"` or `"system"`.
    ///
    /// # Errors
    /// Returns [`EnvError::InvalidTarget`] for an unknown registry target.
    pub fn in_target(target: &str) -> Result<Self, EnvError> {
        let backend = Backend::select(Platform::host(), target)?;
        Ok(Self::with_runner(backend, SystemRunner))
    }
}

impl Default for GlobalEnv<SystemRunner> {
    fn default() -> Self {
        Self::detect()
    }
}

impl<R: CommandRunner> GlobalEnv<R> {
    /// Binds `backend` to an explicit command runner.
    pub fn with_runner(backend: Backend, runner: R) -> Self {
        Self { backend, runner }
    }

    /// The storage medium this instance reads and writes.
    pub fn backend(&self) -> &Backend {
        &self.backend
    }

    /// Returns the value of `key`.
    ///
    /// In a profile with several definitions of `key` the normalized values
    /// are joined with `;` in file order.
    ///
    /// # Errors
    /// [`EnvError::KeyNotFound`] if the profile does not define the variable.
    /// I/O, process and parse errors are returned unchanged; a failing
    /// `reg query` surfaces as [`EnvError::Execution`].
    pub fn get(&self, key: &str) -> Result<String, EnvError> {
        validate_key(key)?;
        match &self.backend {
            Backend::TextFile(target) => {
                let path = paths::resolve_profile_path(target)?;
                let content = profile::read_profile(&path)?;
                definitions::query(&content, key)
            }
            Backend::Registry(scope) => {
                let reg = RegBuilder::new(*scope, key);
                let output = self.runner.run("reg", &reg.query())?;
                Ok(registry_output::parse_query_output(&output)?.value)
            }
        }
    }

    /// Stores `value` under `key` and returns the tool's raw output.
    ///
    /// On a profile this appends `export KEY="VALUE"` and sources the file.
    /// Earlier definitions are left in place.
    pub fn set(&self, key: &str, value: &str) -> Result<Vec<u8>, EnvError> {
        validate_key(key)?;
        match &self.backend {
            Backend::TextFile(target) => {
                let path = paths::resolve_profile_path(target)?;
                let line = definitions::render_definition(key, value);
                let args = profile::append_and_source_args(&path, &line)?;
                Ok(self.runner.run(profile::shell_program(), &args)?)
            }
            Backend::Registry(scope) => {
                let reg = RegBuilder::new(*scope, key);
                Ok(self.runner.run("setx", &reg.set(value))?)
            }
        }
    }

    /// Removes every definition of `key` and returns the tool's raw output.
    ///
    /// On a profile the output is empty and a profile without `key` is left
    /// untouched, so repeating the call is harmless.
    pub fn unset(&self, key: &str) -> Result<Vec<u8>, EnvError> {
        validate_key(key)?;
        match &self.backend {
            Backend::TextFile(target) => {
                let path = paths::resolve_profile_path(target)?;
                let content = profile::read_profile(&path)?;
                let erased = definitions::erase_definitions(&content, key);
                if erased.len() == content.len() {
                    log::debug!("No definition of '{}' in '{}'", key, path.display());
                } else {
                    profile::write_profile(&path, &erased)?;
                }
                Ok(Vec::new())
            }
            Backend::Registry(scope) => {
                let reg = RegBuilder::new(*scope, key);
                Ok(self.runner.run("reg", &reg.delete())?)
            }
        }
    }
}

/// Rejects names that cannot form a single `KEY=VALUE` assignment.
fn validate_key(key: &str) -> Result<(), EnvError> {
    if key.is_empty() || key.contains(|c: char| c == '=' || c == '\0' || c.is_whitespace()) {
        return Err(EnvError::InvalidKey(key.to_string()));
    }
    Ok(())
}

/// Reads `key` from the host's default store.
pub fn get(key: &str) -> Result<String, EnvError> {
    GlobalEnv::detect().get(key)
}

/// Writes `key` to the host's default store.
pub fn set(key: &str, value: &str) -> Result<Vec<u8>, EnvError> {
    GlobalEnv::detect().set(key, value)
}

/// Removes `key` from the host's default store.
pub fn unset(key: &str) -> Result<Vec<u8>, EnvError> {
    GlobalEnv::detect().unset(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegistryScope;
    use crate::system::executor::ExecutionError;
    use std::cell::RefCell;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Records every call and answers with a canned result.
    #[derive(Debug)]
    struct RecordingRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        reply: fn() -> Result<Vec<u8>, ExecutionError>,
    }

    impl RecordingRunner {
        fn replying(reply: fn() -> Result<Vec<u8>, ExecutionError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    impl CommandRunner for RecordingRunner {
        fn run(&self, program: &str, args: &[String]) -> Result<Vec<u8>, ExecutionError> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            (self.reply)()
        }
    }

    fn profile_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn text_env(file: &NamedTempFile) -> GlobalEnv<RecordingRunner> {
        let target = file.path().to_string_lossy().into_owned();
        GlobalEnv::with_runner(
            Backend::TextFile(target),
            RecordingRunner::replying(|| Ok(Vec::new())),
        )
    }

    #[test]
    fn test_detect_uses_host_default_backend() {
        let env = GlobalEnv::detect();
        assert_eq!(env.backend(), &Backend::default_for(Platform::host()));
        assert_eq!(GlobalEnv::default().backend(), env.backend());
    }

    #[test]
    fn test_get_reads_merged_value_from_profile() {
        let file = profile_with("export GOPATH=$HOME/go\nalias ll='ls -l'\nexport GOPATH=\"$GOPATH:/opt/go\"\n");
        let env = text_env(&file);

        assert_eq!(env.get("GOPATH").unwrap(), "$HOME/go;/opt/go");
        assert!(env.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_unset_then_get_is_not_found() {
        // --- Setup ---
        let file = profile_with("# top\nexport EDITOR=vim\nexport EDITORS=all\nexport EDITOR=nano\n");
        let env = text_env(&file);

        // --- Execute ---
        let output = env.unset("EDITOR").unwrap();

        // --- Assert ---
        assert!(output.is_empty());
        assert!(matches!(env.get("EDITOR"), Err(EnvError::KeyNotFound(k)) if k == "EDITOR"));
        assert_eq!(env.get("EDITORS").unwrap(), "all");
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert_eq!(content, "# top\nexport EDITORS=all\n");
    }

    #[test]
    fn test_unset_twice_is_harmless() {
        let file = profile_with("export A=1\nexport B=2\n");
        let env = text_env(&file);

        env.unset("A").unwrap();
        let once = std::fs::read(file.path()).unwrap();
        env.unset("A").unwrap();
        let twice = std::fs::read(file.path()).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once, b"export B=2\n");
    }

    #[test]
    fn test_set_appends_quoted_definition_through_bash() {
        let file = profile_with("");
        let env = text_env(&file);

        env.set("globalEnv", "Hello Global Environment!").unwrap();

        let calls = env.runner.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (program, args) = &calls[0];
        assert_eq!(program, "bash");
        let words = shlex::split(&args[1]).unwrap();
        assert_eq!(words[2], "export globalEnv=\"Hello Global Environment!\"");
        assert_eq!(words[4], file.path().to_string_lossy());
    }

    #[test]
    fn test_set_then_get_round_trip() {
        // Emulate the shell append, then read back through the scanner.
        let mut file = profile_with("# profile\n");
        let line = definitions::render_definition("globalEnv", "Hello Global Environment!");
        writeln!(file, "{}", line).unwrap();
        file.flush().unwrap();

        let env = text_env(&file);
        assert_eq!(env.get("globalEnv").unwrap(), "Hello Global Environment!");
    }

    #[test]
    fn test_missing_profile_is_io_error() {
        let env = GlobalEnv::with_runner(
            Backend::TextFile("non_existent_profile_for_test.sh".to_string()),
            RecordingRunner::replying(|| Ok(Vec::new())),
        );
        assert!(matches!(env.get("A"), Err(EnvError::Io { .. })));
        assert!(matches!(env.unset("A"), Err(EnvError::Io { .. })));
    }

    #[test]
    fn test_invalid_keys_are_rejected_before_any_work() {
        let env = GlobalEnv::with_runner(
            Backend::Registry(RegistryScope::User),
            RecordingRunner::replying(|| Ok(Vec::new())),
        );
        for key in ["", "A=B", "A B", "A\nB"] {
            assert!(matches!(env.get(key), Err(EnvError::InvalidKey(_))));
            assert!(matches!(env.set(key, "v"), Err(EnvError::InvalidKey(_))));
            assert!(matches!(env.unset(key), Err(EnvError::InvalidKey(_))));
        }
        assert!(env.runner.calls.borrow().is_empty());
    }

    #[test]
    fn test_registry_get_parses_reg_output() {
        let env = GlobalEnv::with_runner(
            Backend::Registry(RegistryScope::User),
            RecordingRunner::replying(|| {
                Ok(b"\r\nHKEY_CURRENT_USER\\Environment\r\n    globalEnv    REG_SZ    Hello Global Environment!\r\n\r\n".to_vec())
            }),
        );

        assert_eq!(env.get("globalEnv").unwrap(), "Hello Global Environment!");
        let calls = env.runner.calls.borrow();
        assert_eq!(calls[0].0, "reg");
        assert_eq!(calls[0].1, ["query", r"HKCU\Environment", "/v", "globalEnv"]);
    }

    #[test]
    fn test_registry_get_failure_propagates() {
        // --- Setup ---
        let env = GlobalEnv::with_runner(
            Backend::Registry(RegistryScope::System),
            RecordingRunner::replying(|| {
                Err(ExecutionError::NonZeroExitStatus {
                    command: "reg query".to_string(),
                    output: b"ERROR: Access is denied.".to_vec(),
                })
            }),
        );

        // --- Execute ---
        let err = env.get("X").unwrap_err();

        // --- Assert ---
        assert!(matches!(
            &err,
            EnvError::Execution(ExecutionError::NonZeroExitStatus { output, .. })
                if output == b"ERROR: Access is denied."
        ));
    }

    #[test]
    fn test_registry_get_garbage_is_malformed() {
        let env = GlobalEnv::with_runner(
            Backend::Registry(RegistryScope::User),
            RecordingRunner::replying(|| Ok(b"unexpected".to_vec())),
        );
        assert!(matches!(env.get("globalEnv"), Err(EnvError::MalformedResponse)));
    }

    #[test]
    fn test_registry_set_and_unset_delegate_to_tools() {
        let env = GlobalEnv::with_runner(
            Backend::Registry(RegistryScope::System),
            RecordingRunner::replying(|| Ok(b"SUCCESS".to_vec())),
        );

        assert_eq!(env.set("globalEnv", "hi").unwrap(), b"SUCCESS");
        assert_eq!(env.unset("globalEnv").unwrap(), b"SUCCESS");

        let calls = env.runner.calls.borrow();
        assert_eq!(calls[0].0, "setx");
        assert_eq!(calls[0].1, ["globalEnv", "hi", "/M"]);
        assert_eq!(calls[1].0, "reg");
        assert_eq!(calls[1].1[0], "delete");
    }

    #[test]
    fn test_process_errors_propagate_unchanged() {
        let env = GlobalEnv::with_runner(
            Backend::Registry(RegistryScope::User),
            RecordingRunner::replying(|| {
                Err(ExecutionError::CommandFailed(
                    "setx".to_string(),
                    std::io::Error::from(std::io::ErrorKind::NotFound),
                ))
            }),
        );
        assert!(matches!(
            env.set("A", "1"),
            Err(EnvError::Execution(ExecutionError::CommandFailed(..)))
        ));
        assert!(matches!(
            env.get("A"),
            Err(EnvError::Execution(ExecutionError::CommandFailed(..)))
        ));
    }
}
