// src/system/registry.rs

//! Argument lists for `reg` and `setx`.

use crate::models::RegistryScope;

/// Builds the argument lists for the registry tools.
#[derive(Debug, Clone, Copy)]
pub struct RegBuilder<'a> {
    scope: RegistryScope,
    name: &'a str,
}

impl<'a> RegBuilder<'a> {
    /// A builder for variable `name` in `scope`.
    pub fn new(scope: RegistryScope, name: &'a str) -> Self {
        Self { scope, name }
    }

    /// Arguments for `reg` to query the variable.
    pub fn query(&self) -> Vec<String> {
        vec![
            "query".to_string(),
            self.scope.key_path().to_string(),
            "/v".to_string(),
            self.name.to_string(),
        ]
    }

    /// Arguments for `reg` to delete the variable without prompting.
    pub fn delete(&self) -> Vec<String> {
        vec![
            "delete".to_string(),
            self.scope.key_path().to_string(),
            "/F".to_string(),
            "/V".to_string(),
            self.name.to_string(),
        ]
    }

    /// Arguments for `setx` to store `value`; `/M` targets the machine scope.
    pub fn set(&self, value: &str) -> Vec<String> {
        let mut args = vec![self.name.to_string(), value.to_string()];
        if self.scope == RegistryScope::System {
            args.push("/M".to_string());
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scope_arguments() {
        let reg = RegBuilder::new(RegistryScope::User, "globalEnv");
        assert_eq!(reg.query(), ["query", r"HKCU\Environment", "/v", "globalEnv"]);
        assert_eq!(
            reg.delete(),
            ["delete", r"HKCU\Environment", "/F", "/V", "globalEnv"]
        );
        assert_eq!(reg.set("hello"), ["globalEnv", "hello"]);
    }

    #[test]
    fn test_system_scope_arguments() {
        let reg = RegBuilder::new(RegistryScope::System, "JAVA_HOME");
        assert_eq!(
            reg.query()[1],
            r"HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment"
        );
        assert_eq!(reg.set(r"C:\jdk"), ["JAVA_HOME", r"C:\jdk", "/M"]);
    }
}
