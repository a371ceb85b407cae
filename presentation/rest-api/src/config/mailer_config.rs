use super::{ConfigError, env_vars, lookup};

/// Settings of the transactional e-mail API.
#[derive(Debug, Clone, PartialEq)]
pub struct MailerConfig {
    pub base_url: String,
    pub api_key: String,
    pub from_address: String,
}

impl MailerConfig {
    /// Environment variables:
    /// - MAILER_BASE_URL: API root; when unset, ready notifications are only logged
    /// - MAILER_API_KEY: bearer key (required with MAILER_BASE_URL)
    /// - MAILER_FROM: sender address (required with MAILER_BASE_URL)
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_vars(env_vars)
    }

    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let Some(base_url) = lookup(&vars, "MAILER_BASE_URL") else {
            return Ok(None);
        };

        let api_key =
            lookup(&vars, "MAILER_API_KEY").ok_or(ConfigError::Missing("MAILER_API_KEY"))?;
        let from_address = lookup(&vars, "MAILER_FROM").ok_or(ConfigError::Missing("MAILER_FROM"))?;

        Ok(Some(Self {
            base_url,
            api_key,
            from_address,
        }))
    }
}
