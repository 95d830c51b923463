mod config;
mod database_config;
mod employee_service_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod validation_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use employee_service_config::EmployeeServiceConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use validation_config::{
    DEFAULT_MAX_DESCRIPTION_LENGTH, DEFAULT_MAX_TITLE_LENGTH, ValidationConfig,
};

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "PROPOSTA_CONFIG_DIR";
/// Config directory used when `PROPOSTA_CONFIG_DIR` is unset, relative to cwd
pub const DEFAULT_CONFIG_DIR: &str = ".proposta";
pub const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "propostas.db";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_EMPLOYEE_SERVICE_URL: &str = "http://127.0.0.1:8081";
