use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub stores_path: PathBuf,
    pub geocoder_base_url: String,
    pub geocoder_timeout_secs: u64,
    /// ISO country codes the geocoder is scoped to, comma-separated.
    pub geocoder_country_codes: String,
    pub user_agent: String,
}
