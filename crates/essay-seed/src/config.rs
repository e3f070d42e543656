//! Store configuration loaded from the environment.

use std::fmt;

use reqwest::Url;
use thiserror::Error;

/// Table the seed binary inserts into when `ESSAYS_TABLE` is unset.
pub const DEFAULT_TABLE: &str = "essays";

const URL_VARS: [&str; 2] = ["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"];
const KEY_VARS: [&str; 2] = ["SUPABASE_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"];
const TABLE_VAR: &str = "ESSAYS_TABLE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid store URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
}

/// Connection details for the hosted store.
#[derive(Clone)]
pub struct StoreConfig {
    /// Base URL without a trailing slash.
    pub url: String,
    /// Table that receives the sample essays.
    pub table: String,
    api_key: String,
}

impl StoreConfig {
    /// Creates a configuration targeting [`DEFAULT_TABLE`].
    pub fn new(url: &str, api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            url: normalize_url(url)?,
            table: DEFAULT_TABLE.to_string(),
            api_key: api_key.into(),
        })
    }

    /// Sets the target table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// `SUPABASE_URL` and `SUPABASE_KEY` are required, falling back to the
    /// `NEXT_PUBLIC_` names the web frontend uses. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&'static str]| {
            names
                .iter()
                .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
                .ok_or(ConfigError::Missing(names[0]))
        };

        let url = first_set(&URL_VARS[..])?;
        let api_key = first_set(&KEY_VARS[..])?;
        let config = Self::new(url.trim(), api_key.trim())?;

        Ok(match lookup(TABLE_VAR).filter(|v| !v.trim().is_empty()) {
            Some(table) => config.with_table(table.trim()),
            None => config,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("table", &self.table)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn normalize_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        value: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }

    Ok(raw.trim_end_matches('/').to_string())
}
