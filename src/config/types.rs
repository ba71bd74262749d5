//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configured categories by name.
    #[serde(default)]
    pub categories: HashMap<String, CategoryConfig>,

    /// Default settings.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Model and label resources for a single category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Path to the TFLite model file.
    pub model: PathBuf,

    /// Path to the labels CSV file.
    pub labels: PathBuf,
}

/// Default classification settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Category used when none is given on the command line.
    pub category: Option<String>,
}
