use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse. Every variable has a
/// default, so nothing is required.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("NEARSTORE_ENV", "development"));
    let log_level = or_default("NEARSTORE_LOG_LEVEL", "info");
    let stores_path = PathBuf::from(or_default("NEARSTORE_STORES_PATH", "./config/stores.yaml"));

    let geocoder_base_url = or_default(
        "NEARSTORE_GEOCODER_BASE_URL",
        "https://nominatim.openstreetmap.org/",
    );
    let geocoder_timeout_secs = parse_u64("NEARSTORE_GEOCODER_TIMEOUT_SECS", "10")?;
    let geocoder_country_codes = or_default("NEARSTORE_GEOCODER_COUNTRY_CODES", "us");
    let user_agent = or_default("NEARSTORE_USER_AGENT", "nearstore/0.1 (store-locator)");

    Ok(AppConfig {
        env,
        log_level,
        stores_path,
        geocoder_base_url,
        geocoder_timeout_secs,
        geocoder_country_codes,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_known_values() {
        assert_eq!(parse_environment("development"), Environment::Development);
        assert_eq!(parse_environment("test"), Environment::Test);
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn empty_env_yields_full_defaults() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.stores_path.to_string_lossy(), "./config/stores.yaml");
        assert_eq!(cfg.geocoder_base_url, "https://nominatim.openstreetmap.org/");
        assert_eq!(cfg.geocoder_timeout_secs, 10);
        assert_eq!(cfg.geocoder_country_codes, "us");
        assert_eq!(cfg.user_agent, "nearstore/0.1 (store-locator)");
    }

    #[test]
    fn overrides_are_honored() {
        let mut map = HashMap::new();
        map.insert("NEARSTORE_ENV", "production");
        map.insert("NEARSTORE_GEOCODER_BASE_URL", "http://localhost:8088/");
        map.insert("NEARSTORE_GEOCODER_TIMEOUT_SECS", "30");
        map.insert("NEARSTORE_GEOCODER_COUNTRY_CODES", "us,ca");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.env, Environment::Production);
        assert_eq!(cfg.geocoder_base_url, "http://localhost:8088/");
        assert_eq!(cfg.geocoder_timeout_secs, 30);
        assert_eq!(cfg.geocoder_country_codes, "us,ca");
    }

    #[test]
    fn invalid_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("NEARSTORE_GEOCODER_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEARSTORE_GEOCODER_TIMEOUT_SECS"),
            "expected InvalidEnvVar(NEARSTORE_GEOCODER_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
