//! Client configuration.
//!
//! The core never reads the environment. Hosts build an `ApiConfig` in code
//! or deserialize it from their own config source; every field is optional.

use serde::{Deserialize, Serialize};

use crate::endpoint::{BaseUrl, DEFAULT_BASE_URL};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Host all endpoint paths are appended to.
    pub base_url: String,

    /// Whole-request timeout enforced by the transport. `None` waits forever.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn base_url(&self) -> Result<BaseUrl, ConfigError> {
        BaseUrl::parse(&self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}
