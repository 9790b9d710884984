//! # Application configuration — `footprint.toml`
//!
//! The web binary embeds a `footprint.toml` and parses it with
//! [`AppConfig::from_toml`]. Every section and key is optional; a missing or empty
//! file is the same as [`AppConfig::default`].
//!
//! ```toml
//! [directory]
//! base_url = "https://footprint-cc.preview.onefootprint.com/api"
//!
//! [list]
//! search_debounce_ms = 500
//! page_size_options = [2, 3, 5]
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config, TOML (de)serialisation and the canonical filename. |
//! | [`DirectoryConfig`] | Where the remote user directory lives. |
//! | [`ListConfig`] | Search debounce delay and the rows-per-page choices. |

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://footprint-cc.preview.onefootprint.com/api";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Base URL the `/users` endpoints hang off, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Quiet period after the last keystroke before a search is sent.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
    /// Choices offered in the rows-per-page selector.
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_search_debounce_ms() -> u64 {
    500
}

fn default_page_size_options() -> Vec<usize> {
    vec![2, 3, 5]
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl ListConfig {
    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl AppConfig {
    pub fn filename() -> &'static str {
        "footprint.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse `s`, logging and falling back to the defaults when it is invalid.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!(error = %e, file = Self::filename(), "using default configuration");
            Self::default()
        })
    }
}
