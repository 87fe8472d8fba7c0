//! Backend credential configuration.
//!
//! Two credentials are carried: one for the primary model backend (used by
//! the research agent) and one for the alternate backend (used by the writer
//! agents). Both must be present and non-empty before any run starts.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Environment variable for the primary backend key.
pub const PRIMARY_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable for the alternate backend key.
pub const ALTERNATE_KEY_ENV: &str = "GROQ_API_KEY";

/// Credentials for the model backends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendCredentials {
    /// API key for the primary model backend.
    pub primary_api_key: String,
    /// API key for the alternate model backend.
    pub alternate_api_key: String,
}

impl BackendCredentials {
    /// Creates credentials from explicit key strings.
    #[must_use]
    pub fn new(primary_api_key: impl Into<String>, alternate_api_key: impl Into<String>) -> Self {
        Self {
            primary_api_key: primary_api_key.into(),
            alternate_api_key: alternate_api_key.into(),
        }
    }

    /// Loads credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` if either variable is unset
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let primary = std::env::var(PRIMARY_KEY_ENV)
            .map_err(|_| ConfigError::missing_credential(PRIMARY_KEY_ENV))?;
        let alternate = std::env::var(ALTERNATE_KEY_ENV)
            .map_err(|_| ConfigError::missing_credential(ALTERNATE_KEY_ENV))?;

        let credentials = Self::new(primary, alternate);
        credentials.validate()?;
        Ok(credentials)
    }

    /// Validates that both keys are non-empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingCredential` naming the empty key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.primary_api_key.trim().is_empty() {
            return Err(ConfigError::missing_credential(PRIMARY_KEY_ENV));
        }
        if self.alternate_api_key.trim().is_empty() {
            return Err(ConfigError::missing_credential(ALTERNATE_KEY_ENV));
        }
        Ok(())
    }
}
