//! Pipeline configuration management.
//!
//! Handles loading of the run configuration from TOML files with
//! environment variable override support. Every field has a default, so an
//! empty file (or no file at all) yields the standard 288-SKU, 365-day run.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::types::Catalog;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "scm.toml";

/// File names inside the raw and processed directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNames {
    /// Generator inventory snapshot
    pub raw_inventory: String,
    /// Generator sales ledger
    pub raw_sales: String,
    /// Transformer inventory output
    pub processed_inventory: String,
    /// Transformer sales output
    pub processed_sales: String,
}

impl Default for FileNames {
    fn default() -> Self {
        Self {
            raw_inventory: "Adidas_Inventory_Snapshot.csv".to_string(),
            raw_sales: "Adidas_Global_Sales.csv".to_string(),
            processed_inventory: "Adidas_Inventory_Cleaned.csv".to_string(),
            processed_sales: "Adidas_Sales_Cleaned.csv".to_string(),
        }
    }
}

/// Run configuration shared by the generator and the transformer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Seed for every random draw of the generator
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// First simulated sales day
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Number of consecutive simulated days
    #[serde(default = "default_days")]
    pub days: u32,

    /// Directory the generator writes to and the transformer reads from
    #[serde(default = "default_raw_dir")]
    pub raw_dir: PathBuf,

    /// Directory the transformer writes to
    #[serde(default = "default_processed_dir")]
    pub processed_dir: PathBuf,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// CSV file names
    #[serde(default)]
    pub files: FileNames,

    /// Catalogue dimensions
    #[serde(default)]
    pub catalog: Catalog,
}

fn default_seed() -> u64 {
    42
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

fn default_days() -> u32 {
    365
}

fn default_raw_dir() -> PathBuf {
    PathBuf::from("data/01_Data_Raw")
}

fn default_processed_dir() -> PathBuf {
    PathBuf::from("data/02_Data_Processed")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            start_date: default_start_date(),
            days: default_days(),
            raw_dir: default_raw_dir(),
            processed_dir: default_processed_dir(),
            log_level: default_log_level(),
            files: FileNames::default(),
            catalog: Catalog::default(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path` if it exists, otherwise return the default.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("SCM_SEED") {
            if let Ok(seed) = seed.parse() {
                self.seed = seed;
            }
        }

        if let Ok(start_date) = std::env::var("SCM_START_DATE") {
            if let Ok(date) = NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") {
                self.start_date = date;
            }
        }

        if let Ok(days) = std::env::var("SCM_DAYS") {
            if let Ok(days) = days.parse() {
                self.days = days;
            }
        }

        if let Ok(raw_dir) = std::env::var("SCM_RAW_DIR") {
            self.raw_dir = PathBuf::from(raw_dir);
        }

        if let Ok(processed_dir) = std::env::var("SCM_PROCESSED_DIR") {
            self.processed_dir = PathBuf::from(processed_dir);
        }

        if let Ok(log_level) = std::env::var("SCM_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.days == 0 {
            errors.push("days must be greater than 0".to_string());
        }
        if self.days > 3660 {
            errors.push(format!("days {} exceeds maximum allowed (3660)", self.days));
        }

        if self.raw_dir.as_os_str().is_empty() {
            errors.push("raw_dir cannot be empty".to_string());
        }
        if self.processed_dir.as_os_str().is_empty() {
            errors.push("processed_dir cannot be empty".to_string());
        }
        if self.raw_dir == self.processed_dir {
            errors.push("raw_dir and processed_dir must differ".to_string());
        }

        let catalog = &self.catalog;
        if catalog.markets.is_empty() {
            errors.push("catalog.markets cannot be empty".to_string());
        }
        if catalog.product_lines.is_empty() {
            errors.push("catalog.product_lines cannot be empty".to_string());
        }
        if catalog.sizes.is_empty() {
            errors.push("catalog.sizes cannot be empty".to_string());
        }
        if catalog.colors.is_empty() {
            errors.push("catalog.colors cannot be empty".to_string());
        }
        if !catalog.is_empty() {
            if let Err(e) = catalog.sku_ids() {
                errors.push(format!("catalog: {}", e));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Every simulated day, in order.
    pub fn simulation_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days).map(move |i| self.start_date + Duration::days(i64::from(i)))
    }

    /// Path of the generated inventory snapshot
    pub fn raw_inventory_path(&self) -> PathBuf {
        self.raw_dir.join(&self.files.raw_inventory)
    }

    /// Path of the generated sales ledger
    pub fn raw_sales_path(&self) -> PathBuf {
        self.raw_dir.join(&self.files.raw_sales)
    }

    /// Path of the processed inventory snapshot
    pub fn processed_inventory_path(&self) -> PathBuf {
        self.processed_dir.join(&self.files.processed_inventory)
    }

    /// Path of the processed sales ledger
    pub fn processed_sales_path(&self) -> PathBuf {
        self.processed_dir.join(&self.files.processed_sales)
    }
}

/// Configuration error type
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
