//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Read an environment variable with surrounding whitespace trimmed, treating
/// empty or whitespace-only values as unset.
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a unique variable name, so parallel tests don't race.

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "TEST_PERFCONS_ENV_PARSE_VALID_40211";
        unsafe { std::env::set_var(var_name, "42") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "TEST_PERFCONS_ENV_PARSE_INVALID_40212";
        unsafe { std::env::set_var(var_name, "banana") };
        let result: u32 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_parse_missing_var() {
        let var_name = "TEST_PERFCONS_ENV_PARSE_MISSING_40213";
        unsafe { std::env::remove_var(var_name) };
        let result: bool = env_parse_with_default(var_name, true);
        assert!(result);
    }

    #[test]
    fn test_env_parse_bool() {
        let var_name = "TEST_PERFCONS_ENV_PARSE_BOOL_40214";
        unsafe { std::env::set_var(var_name, " false ") };
        let result: bool = env_parse_with_default(var_name, true);
        assert!(!result);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn test_env_non_empty_ignores_blank() {
        let var_name = "TEST_PERFCONS_ENV_NON_EMPTY_40215";
        unsafe { std::env::set_var(var_name, "   ") };
        assert_eq!(env_non_empty(var_name), None);
        unsafe { std::env::set_var(var_name, "token") };
        assert_eq!(env_non_empty(var_name).as_deref(), Some("token"));
        unsafe { std::env::set_var(var_name, "  token\n") };
        assert_eq!(env_non_empty(var_name).as_deref(), Some("token"));
        unsafe { std::env::remove_var(var_name) };
    }
}
