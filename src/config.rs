use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 9995;

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub jwt_secret: String,
    pub discord_bot_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "PORT".to_string(),
                    source: e,
                })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            port,
            jwt_secret: std::env::var("JWT_SECRET_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET_KEY".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
        })
    }
}
