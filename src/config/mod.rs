use std::{env, str::FromStr};

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub rust_log: String,
}

// Настройки базы данных
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub pool_size: u32,
}

// Идентификация вызывающего: полноценной авторизации нет
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Пользователь, от имени которого выполняется запрос без `X-User-Id` и `userId`.
    pub default_user_id: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value {value:?}")]
    Invalid { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Config {
            app: AppConfig {
                host: var_or("HOST", "0.0.0.0"),
                port: parse_var_or("PORT", 8000)?,
                environment: var_or("ENVIRONMENT", "development"),
                rust_log: var_or("RUST_LOG", "webinar_system=debug,tower_http=debug"),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?,
                pool_size: parse_var_or("DB_POOL_SIZE", 20)?,
            },
            auth: AuthConfig {
                default_user_id: var_or("DEFAULT_USER_ID", "test-user"),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 8000,
                environment: "test".to_string(),
                rust_log: "webinar_system=debug".to_string(),
            },
            database: DatabaseConfig {
                url: "postgres://localhost/webinars".to_string(),
                pool_size: 5,
            },
            auth: AuthConfig {
                default_user_id: "test-user".to_string(),
            },
        }
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_var_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    parse_or(name, env::var(name).ok(), default)
}

// Разбор отделён от чтения окружения, чтобы тесты не трогали env процесса
fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
