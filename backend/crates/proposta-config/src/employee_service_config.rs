use crate::{ConfigError, ConfigErrorResult, DEFAULT_EMPLOYEE_SERVICE_URL};

use serde::Deserialize;

/// Location of the remote employee (funcionario) service
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmployeeServiceConfig {
    pub base_url: String,
}

impl Default for EmployeeServiceConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_EMPLOYEE_SERVICE_URL),
        }
    }
}

impl EmployeeServiceConfig {
    /// The HTTP client is built without a TLS backend, so only plain
    /// `http://` URLs are reachable.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.base_url.starts_with("http://") {
            return Err(ConfigError::employee_service(format!(
                "employee_service.base_url must start with http://, got '{}'",
                self.base_url
            )));
        }

        Ok(())
    }
}
