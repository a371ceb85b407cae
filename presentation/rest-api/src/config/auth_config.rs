use super::{ConfigError, env_vars, lookup};

pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HS256 secret shared with the auth service (required)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_vars)
    }

    pub fn from_vars(vars: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let jwt_secret = lookup(&vars, "JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        Ok(Self { jwt_secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_non_blank_secret() {
        let result = AuthConfig::from_vars(|_| Some("   ".to_string()));

        assert!(matches!(result, Err(ConfigError::Missing("JWT_SECRET"))));
    }

    #[test]
    fn should_read_secret() {
        let config = AuthConfig::from_vars(|name| {
            (name == "JWT_SECRET").then(|| "s3cret".to_string())
        })
        .unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
    }
}
