use poem::middleware::Cors;

use super::{
    ConfigError, auth_config::AuthConfig, cors_config, database_config::DatabaseSettings,
    mailer_config::MailerConfig, server_config::ServerConfig,
};

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub auth: AuthConfig,
    pub mailer: Option<MailerConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            auth: AuthConfig::from_env()?,
            mailer: MailerConfig::from_env()?,
        })
    }
}
