//! Configuration validation.

use crate::config::{CategoryConfig, Config};
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    // Validate default category exists if specified
    if let Some(ref category_name) = config.defaults.category
        && !config.categories.contains_key(category_name)
    {
        return Err(Error::CategoryNotFound {
            name: category_name.clone(),
        });
    }

    Ok(())
}

/// Validate a category configuration and check files exist.
pub fn validate_category_config(_name: &str, category: &CategoryConfig) -> Result<()> {
    if !category.model.exists() {
        return Err(Error::ModelFileNotFound {
            path: category.model.clone(),
        });
    }

    if !category.labels.exists() {
        return Err(Error::LabelsFileNotFound {
            path: category.labels.clone(),
        });
    }

    Ok(())
}

/// Get a category by name from the config.
pub fn get_category<'a>(config: &'a Config, name: &str) -> Result<&'a CategoryConfig> {
    config
        .categories
        .get(name)
        .ok_or_else(|| Error::CategoryNotFound {
            name: name.to_string(),
        })
}
