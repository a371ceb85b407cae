pub mod app_config;
pub mod auth_config;
pub mod cors_config;
pub mod database_config;
pub mod mailer_config;
pub mod server_config;

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("config.missing_variable: {0}")]
    Missing(&'static str),
    #[error("config.invalid_variable: {name}={value}")]
    Invalid { name: &'static str, value: String },
}

/// Reads a variable, treating blank values as unset.
pub(crate) fn lookup(vars: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    vars(name).filter(|v| !v.trim().is_empty())
}

pub(crate) fn env_vars(name: &str) -> Option<String> {
    std::env::var(name).ok()
}
