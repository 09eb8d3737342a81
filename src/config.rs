// src/config.rs
//
// Runtime configuration, read from the environment and an optional `.env` file

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

pub const ENV_LOAD_DELAY_MS: &str = "PETSHELF_LOAD_DELAY_MS";
pub const ENV_CATALOG: &str = "PETSHELF_CATALOG";
pub const ENV_LOG: &str = "RUST_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Simulated latency before the catalog resolves
    pub load_delay_ms: u64,
    /// JSON catalog to load instead of the built-in sample
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: 1500,
            catalog_path: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Store-level slice of [`AppConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    pub load_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: AppConfig::default().load_delay_ms,
        }
    }
}

impl AppConfig {
    /// Loads `.env` (if present) into the process environment, then reads it.
    /// Variables already set in the environment win over `.env` entries.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads an explicit env file without touching the process environment.
    /// Process variables still take precedence over the file.
    pub fn from_env_file(path: &Path) -> AppResult<Self> {
        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let file = entries
            .collect::<Result<HashMap<String, String>, _>>()
            .map_err(|e| AppError::Config(format!("invalid entry in {}: {}", path.display(), e)))?;

        Self::from_lookup(|key| std::env::var(key).ok().or_else(|| file.get(key).cloned()))
    }

    /// Parsing core, decoupled from the process environment
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let load_delay_ms = match lookup(ENV_LOAD_DELAY_MS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("{} must be a number of milliseconds: {}", ENV_LOAD_DELAY_MS, e))
            })?,
            None => defaults.load_delay_ms,
        };

        let catalog_path = lookup(ENV_CATALOG)
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let log_filter = lookup(ENV_LOG)
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Ok(Self {
            load_delay_ms,
            catalog_path,
            log_filter,
        })
    }

    pub fn catalog(&self) -> CatalogConfig {
        CatalogConfig {
            load_delay_ms: self.load_delay_ms,
        }
    }
}
