//! # Register Configuration
//!
//! Configuration for one register (one operator terminal).
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                           │
//! │                                                                     │
//! │  1. Environment Variables (highest priority)                        │
//! │     FERRO_STORE_NAME="Ferretería Centro"                            │
//! │     FERRO_MAX_LINES=50                                              │
//! │                                                                     │
//! │  2. TOML Config File (path supplied by the host application)        │
//! │                                                                     │
//! │  3. Default Values (lowest priority)                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # register.toml
//! [store]
//! name = "Ferretería Centro"
//!
//! [draft]
//! max_lines = 100
//! max_quantity = 999
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use ferro_core::{DraftLimits, MAX_LINE_QUANTITY, MAX_SALE_LINES};

use crate::error::{RegisterError, RegisterResult};

// =============================================================================
// Store Settings
// =============================================================================

/// Identity of the store this register belongs to, printed on receipts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Human-readable store name.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "Ferro Hardware".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            name: default_store_name(),
        }
    }
}

// =============================================================================
// Draft Settings
// =============================================================================

/// Bounds applied to every draft opened on this register.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSettings {
    /// Maximum line rows per sale.
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,

    /// Maximum quantity per line.
    #[serde(default = "default_max_quantity")]
    pub max_quantity: i64,
}

fn default_max_lines() -> usize {
    MAX_SALE_LINES
}

fn default_max_quantity() -> i64 {
    MAX_LINE_QUANTITY
}

impl Default for DraftSettings {
    fn default() -> Self {
        DraftSettings {
            max_lines: default_max_lines(),
            max_quantity: default_max_quantity(),
        }
    }
}

// =============================================================================
// Register Configuration
// =============================================================================

/// Complete register configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreSettings,

    /// Draft bounds.
    #[serde(default)]
    pub draft: DraftSettings,
}

impl RegisterConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (register.toml), if a path is given and it exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> RegisterResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                info!(?path, "Loading register config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load register config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> RegisterResult<()> {
        if self.store.name.trim().is_empty() {
            return Err(RegisterError::InvalidConfig(
                "store name must not be empty".into(),
            ));
        }

        if self.draft.max_lines == 0 {
            return Err(RegisterError::InvalidConfig(
                "draft.max_lines must be greater than 0".into(),
            ));
        }

        if self.draft.max_quantity < 1 {
            return Err(RegisterError::InvalidConfig(
                "draft.max_quantity must be at least 1".into(),
            ));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(name) = std::env::var("FERRO_STORE_NAME") {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = name;
        }

        if let Ok(lines) = std::env::var("FERRO_MAX_LINES") {
            if let Ok(n) = lines.parse::<usize>() {
                self.draft.max_lines = n;
            }
        }

        if let Ok(qty) = std::env::var("FERRO_MAX_LINE_QUANTITY") {
            if let Ok(n) = qty.parse::<i64>() {
                self.draft.max_quantity = n;
            }
        }
    }

    /// The draft limits this register opens drafts with.
    pub fn limits(&self) -> DraftLimits {
        DraftLimits {
            max_lines: self.draft.max_lines,
            max_quantity: self.draft.max_quantity,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
