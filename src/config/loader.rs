//! Configuration loading from the environment.
//!
//! Values are resolved per variable in this order:
//! 1. process environment (non-empty value)
//! 2. the `.env` file, if one exists
//! 3. the default from [`GatewayConfig::default`]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::schema::GatewayConfig;
use crate::config::validation::{parse_var, validate_config, ValidationError};

/// Name of the optional environment file read at startup.
pub const ENV_FILE: &str = ".env";

pub const KNOWLEDGE_APP_PORT: &str = "KNOWLEDGE_APP_PORT";
pub const BIND_HOST: &str = "BIND_HOST";
pub const AI_SERVICE_HOST: &str = "AI_SERVICE_HOST";
pub const AI_SERVICE_PORT: &str = "AI_SERVICE_PORT";
pub const AI_PROXY_MODE: &str = "AI_PROXY_MODE";
pub const HEALTH_CHECK_TIMEOUT_SECS: &str = "HEALTH_CHECK_TIMEOUT_SECS";
pub const DATA_DIR: &str = "DATA_DIR";
pub const LOG_DIR: &str = "LOG_DIR";
pub const STATIC_DIR: &str = "STATIC_DIR";
pub const TEMPLATE_DIR: &str = "TEMPLATE_DIR";
pub const DEBUG: &str = "DEBUG";
pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
pub const SHUTDOWN_GRACE_SECS: &str = "SHUTDOWN_GRACE_SECS";
pub const METRICS_ENABLED: &str = "METRICS_ENABLED";
pub const METRICS_ADDRESS: &str = "METRICS_ADDRESS";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    EnvFile(dotenvy::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EnvFile(e) => write!(f, "Env file error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from `env_file` and the process environment.
pub fn load_config(env_file: &Path) -> Result<GatewayConfig, ConfigError> {
    let file_vars = read_env_file(env_file)?;
    resolve(|key| std::env::var(key).ok(), &file_vars)
}

/// Read `KEY=VALUE` pairs from an env file without touching the process environment.
///
/// A missing file yields an empty map.
pub fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let vars = dotenvy::from_path_iter(path)
        .map_err(ConfigError::EnvFile)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(ConfigError::EnvFile)?;

    tracing::debug!(path = %path.display(), count = vars.len(), "Env file read");
    Ok(vars)
}

/// Build a config from a process-environment lookup layered over env-file values.
pub fn resolve<F>(process_env: F, file_vars: &HashMap<String, String>) -> Result<GatewayConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| -> Option<String> {
        process_env(key)
            .filter(|v| !v.is_empty())
            .or_else(|| file_vars.get(key).filter(|v| !v.is_empty()).cloned())
    };

    let mut config = GatewayConfig::default();
    let mut errors = Vec::new();

    if let Some(host) = lookup(BIND_HOST) {
        config.server.host = host;
    }
    if let Some(port) = parse_var(KNOWLEDGE_APP_PORT, lookup(KNOWLEDGE_APP_PORT), &mut errors) {
        config.server.port = port;
    }
    if let Some(secs) = parse_var(REQUEST_TIMEOUT_SECS, lookup(REQUEST_TIMEOUT_SECS), &mut errors) {
        config.server.request_timeout_secs = secs;
    }
    if let Some(bytes) = parse_var(MAX_BODY_BYTES, lookup(MAX_BODY_BYTES), &mut errors) {
        config.server.max_body_bytes = bytes;
    }
    if let Some(secs) = parse_var(SHUTDOWN_GRACE_SECS, lookup(SHUTDOWN_GRACE_SECS), &mut errors) {
        config.server.shutdown_grace_secs = secs;
    }

    if let Some(host) = lookup(AI_SERVICE_HOST) {
        config.ai_service.host = host;
    }
    if let Some(port) = parse_var(AI_SERVICE_PORT, lookup(AI_SERVICE_PORT), &mut errors) {
        config.ai_service.port = port;
    }
    if let Some(secs) = parse_var(HEALTH_CHECK_TIMEOUT_SECS, lookup(HEALTH_CHECK_TIMEOUT_SECS), &mut errors) {
        config.ai_service.health_timeout_secs = secs;
    }
    if let Some(mode) = parse_var(AI_PROXY_MODE, lookup(AI_PROXY_MODE), &mut errors) {
        config.ai_service.proxy_mode = mode;
    }

    if let Some(dir) = lookup(DATA_DIR) {
        config.data_dir = PathBuf::from(dir);
    }
    if let Some(dir) = lookup(LOG_DIR) {
        config.log_dir = PathBuf::from(dir);
    }
    if let Some(dir) = lookup(STATIC_DIR) {
        config.static_dir = PathBuf::from(dir);
    }
    if let Some(dir) = lookup(TEMPLATE_DIR) {
        config.template_dir = PathBuf::from(dir);
    }

    // Only the exact string "true" enables these flags.
    config.debug = lookup(DEBUG).is_some_and(|v| v == "true");
    config.metrics.enabled = lookup(METRICS_ENABLED).is_some_and(|v| v == "true");
    if let Some(addr) = lookup(METRICS_ADDRESS) {
        config.metrics.address = addr;
    }

    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProxyMode;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn file(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = resolve(env(&[]), &HashMap::new()).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai_service.host, "localhost");
        assert_eq!(config.ai_service.port, 8001);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
        assert!(!config.debug);
        assert_eq!(config.ai_service.health_timeout_secs, 5);
        assert_eq!(config.server.shutdown_grace_secs, 30);
        assert_eq!(config.ai_service.proxy_mode, ProxyMode::Stub);
    }

    #[test]
    fn test_process_env_wins_over_env_file() {
        let config = resolve(
            env(&[(AI_SERVICE_HOST, "ai.internal")]),
            &file(&[(AI_SERVICE_HOST, "from-file"), (AI_SERVICE_PORT, "9001")]),
        )
        .unwrap();

        assert_eq!(config.ai_service.host, "ai.internal");
        assert_eq!(config.ai_service.port, 9001);
    }

    #[test]
    fn test_empty_process_value_falls_through() {
        let config = resolve(
            env(&[(KNOWLEDGE_APP_PORT, "")]),
            &file(&[(KNOWLEDGE_APP_PORT, "9090")]),
        )
        .unwrap();
        assert_eq!(config.server.port, 9090);

        let config = resolve(env(&[(LOG_DIR, "")]), &HashMap::new()).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("./logs"));
    }

    #[test]
    fn test_debug_requires_exact_true() {
        let on = resolve(env(&[(DEBUG, "true")]), &HashMap::new()).unwrap();
        let off = resolve(env(&[(DEBUG, "TRUE")]), &HashMap::new()).unwrap();
        let one = resolve(env(&[(DEBUG, "1")]), &HashMap::new()).unwrap();

        assert!(on.debug);
        assert!(!off.debug);
        assert!(!one.debug);
    }

    #[test]
    fn test_invalid_values_are_collected() {
        let err = resolve(
            env(&[(KNOWLEDGE_APP_PORT, "eighty"), (AI_SERVICE_PORT, "70000"), (AI_PROXY_MODE, "mirror")]),
            &HashMap::new(),
        )
        .unwrap_err();

        match err {
            ConfigError::Validation(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| e.field == KNOWLEDGE_APP_PORT));
                assert!(errors.iter().any(|e| e.field == AI_SERVICE_PORT));
                assert!(errors.iter().any(|e| e.field == AI_PROXY_MODE));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_proxy_mode_forward() {
        let config = resolve(env(&[(AI_PROXY_MODE, "forward")]), &HashMap::new()).unwrap();
        assert_eq!(config.ai_service.proxy_mode, ProxyMode::Forward);
    }

    #[test]
    fn test_read_env_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(".env");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# local overrides").unwrap();
        writeln!(f, "AI_SERVICE_HOST=ai-from-file").unwrap();
        writeln!(f, "DEBUG=true").unwrap();

        let vars = read_env_file(&path).unwrap();
        assert_eq!(vars.get(AI_SERVICE_HOST).map(String::as_str), Some("ai-from-file"));

        let config = resolve(env(&[]), &vars).unwrap();
        assert_eq!(config.ai_service.host, "ai-from-file");
        assert!(config.debug);
    }

    #[test]
    fn test_missing_env_file_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let vars = read_env_file(&dir.path().join("absent.env")).unwrap();
        assert!(vars.is_empty());
    }
}
