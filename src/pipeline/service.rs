//! Category-driven classification service.

use crate::config::{CategoryConfig, Config, get_category};
use crate::error::{Error, Result};
use crate::imaging::{self, tensor};
use crate::inference::InferenceEngine;
use crate::labels::LabelTable;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of classifying one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Model output index.
    pub index: usize,
    /// Scientific species name, or "Unknown".
    pub scientific_name: String,
    /// Common species name, or "Unknown".
    pub common_name: String,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.common_name, self.scientific_name)
    }
}

/// A loaded engine together with the model path it was built from.
struct CachedEngine {
    model_path: PathBuf,
    engine: InferenceEngine,
}

/// Classifies photos into species labels, one model per category.
///
/// Engines are cached per category and reloaded when the configured model
/// path changes, so a cached descriptor never goes stale relative to its
/// backing file. Not reentrant: use one identifier per thread or guard
/// `classify` with a lock.
pub struct SpeciesIdentifier {
    config: Config,
    engines: HashMap<String, CachedEngine>,
}

impl SpeciesIdentifier {
    /// Create an identifier over an explicit category table.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            engines: HashMap::new(),
        }
    }

    /// Classify an image under the named category.
    ///
    /// Resolves the category's model and label resources, preprocesses the
    /// image to the model's declared input, runs inference, and maps the
    /// resulting index through the category's label table. Collaborator
    /// errors propagate unchanged.
    pub fn classify(&mut self, category: &str, image_path: &Path) -> Result<Classification> {
        let category_config = get_category(&self.config, category)?.clone();
        let engine = self.engine_for(category, &category_config)?;

        let img = imaging::load_rgb(image_path)?;
        debug!(
            "Decoded {} ({}x{})",
            image_path.display(),
            img.width(),
            img.height()
        );

        let input = tensor::prepare(&img, engine.descriptor())?;
        let index = engine.infer(input)?;
        debug!("Top-1 class index: {index}");

        let labels = LabelTable::load(&category_config.labels)?;
        let (scientific, common) = labels.get(index);

        Ok(Classification {
            index,
            scientific_name: scientific.to_string(),
            common_name: common.to_string(),
        })
    }

    /// Get or (re)load the cached engine for a category.
    fn engine_for(
        &mut self,
        category: &str,
        category_config: &CategoryConfig,
    ) -> Result<&InferenceEngine> {
        let stale = self
            .engines
            .get(category)
            .is_some_and(|cached| cached.model_path != category_config.model);
        if stale {
            debug!("Model path changed for '{category}', reloading");
            self.engines.remove(category);
        }

        if !self.engines.contains_key(category) {
            info!("Loading model: {}", category_config.model.display());
            let engine = InferenceEngine::load(&category_config.model)?;
            self.engines.insert(
                category.to_string(),
                CachedEngine {
                    model_path: category_config.model.clone(),
                    engine,
                },
            );
        }

        match self.engines.get(category) {
            Some(cached) => Ok(&cached.engine),
            None => Err(Error::Internal {
                message: format!("engine cache miss for category '{category}'"),
            }),
        }
    }
}
