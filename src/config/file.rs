use crate::domain::model::SortOrder;
use crate::utils::error::{FinderError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional TOML configuration, e.g.:
///
/// ```toml
/// [endpoints]
/// location = "https://ipinfo.io/json"
/// search = "https://api.pizzame.dev/v1/restaurants"
///
/// [search]
/// timeout_seconds = 10
/// limit = 20
///
/// [display]
/// sort = "name"
/// ```
///
/// CLI flags win over file values; file values win over built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub endpoints: Option<EndpointsConfig>,
    pub search: Option<SearchConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointsConfig {
    pub location: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub timeout_seconds: Option<u64>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub sort: Option<SortOrder>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| FinderError::ConfigError {
            message: format!("cannot read config file {}: {}", path.display(), e),
        })?;
        toml::from_str(&content).map_err(|e| FinderError::ConfigError {
            message: format!("cannot parse config file {}: {}", path.display(), e),
        })
    }
}
