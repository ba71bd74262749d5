//! Naturid - wildlife species identification CLI tool.
//!
//! This crate classifies photographs into species labels using pre-trained,
//! optionally quantized TFLite models, one per category (plants, birds,
//! insects, mammals, ...).

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod imaging;
pub mod inference;
pub mod labels;
pub mod pipeline;

use clap::Parser;
use cli::{CategoriesAction, Cli, ClassifyArgs, Command, ConfigAction};
use config::{
    CategoryConfig, Config, config_file_path, load_default_config, save_default_config,
    validate_category_config,
};
use pipeline::SpeciesIdentifier;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use error::{Error, Result};

/// Main entry point for the naturid CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.classify.verbose, cli.classify.quiet);

    // Load configuration
    let config = load_default_config()?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Default: classify an image
    // Show help if no image provided
    let Some(image) = cli.image else {
        cli::help::print_smart_help(&config);
        std::process::exit(0);
    };

    classify_image(&image, &cli.classify, config)
}

/// Classify a single image with the given options.
fn classify_image(image: &Path, args: &ClassifyArgs, mut config: Config) -> Result<()> {
    if !imaging::has_supported_extension(image) {
        warn!(
            "'{}' does not have a known image extension, attempting to decode anyway",
            image.display()
        );
    }

    // Explicit --model-path/--labels-path override whatever the category
    // would resolve to.
    let category = match (&args.model_path, &args.labels_path) {
        (Some(model), Some(labels)) => {
            let name = args
                .category
                .clone()
                .unwrap_or_else(|| "custom".to_string());
            config.categories.insert(
                name.clone(),
                CategoryConfig {
                    model: model.clone(),
                    labels: labels.clone(),
                },
            );
            name
        }
        (None, None) => args
            .category
            .clone()
            .or_else(|| config.defaults.category.clone())
            .ok_or_else(|| Error::ConfigValidation {
                message: "no category specified (use -c or set defaults.category in config)"
                    .to_string(),
            })?,
        _ => {
            return Err(Error::ConfigValidation {
                message: "--model-path and --labels-path must be given together".to_string(),
            });
        }
    };

    info!("Classifying {} under '{}'", image.display(), category);

    let mut identifier = SpeciesIdentifier::new(config);
    let classification = identifier.classify(&category, image)?;

    if args.json {
        let line = serde_json::to_string(&classification)
            .map_err(|e| Error::JsonSerialize { source: e })?;
        println!("{line}");
    } else {
        println!("{classification}");
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    // Build filter string based on verbosity level.
    // tract logging is suppressed by default because model optimization is
    // noisy at debug level. Use -v for debug, -vv and up for full trace.
    let filter_str = if quiet {
        "warn".to_string()
    } else {
        match verbose {
            0 => "info,tract_core=warn,tract_tflite=warn".to_string(),
            1 => "debug,tract_core=info,tract_tflite=info".to_string(),
            _ => "trace".to_string(),
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    fmt().with_env_filter(filter).init();
}

fn handle_command(command: Command, config: &Config) -> Result<()> {
    match command {
        Command::Config { action } => handle_config_command(action),
        Command::Categories { action } => handle_categories_command(action, config),
    }
}

fn handle_config_command(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            if path.exists() {
                println!("Configuration file already exists: {}", path.display());
                println!("Use 'naturid categories add' to add categories.");
            } else {
                let config = Config::default();
                let saved_path = save_default_config(&config)?;
                println!("Created configuration file: {}", saved_path.display());
                println!("\nNext steps:");
                println!(
                    "  naturid categories add <name> --model <model.tflite> --labels <labels.csv> --default"
                );
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            println!("{config:#?}");
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn handle_categories_command(action: CategoriesAction, config: &Config) -> Result<()> {
    match action {
        CategoriesAction::List => {
            if config.categories.is_empty() {
                println!("No categories configured.");
            } else {
                println!("Configured categories:");
                let mut names: Vec<&String> = config.categories.keys().collect();
                names.sort();
                for name in names {
                    let default_marker =
                        config.defaults.category.as_ref().is_some_and(|d| d == name);
                    println!(
                        "  {}{}",
                        name,
                        if default_marker { " [default]" } else { "" }
                    );
                }
            }
            Ok(())
        }
        CategoriesAction::Add {
            name,
            model,
            labels,
            default,
        } => handle_categories_add(name, model, labels, default),
        CategoriesAction::Check => {
            for (name, category) in &config.categories {
                validate_category_config(name, category)?;
                println!("  {name}: OK");
            }
            Ok(())
        }
    }
}

/// Handle the `categories add` command.
fn handle_categories_add(
    name: String,
    model: PathBuf,
    labels: PathBuf,
    set_default: bool,
) -> Result<()> {
    // Validate files exist
    if !model.exists() {
        return Err(Error::ModelFileNotFound { path: model });
    }
    if !labels.exists() {
        return Err(Error::LabelsFileNotFound { path: labels });
    }

    // Load existing config
    let mut config = load_default_config()?;

    // Check if category already exists
    if config.categories.contains_key(&name) {
        return Err(Error::CategoryAlreadyExists { name });
    }

    // Add the category
    config.categories.insert(
        name.clone(),
        CategoryConfig {
            model: model.clone(),
            labels: labels.clone(),
        },
    );

    // Set as default if requested
    if set_default {
        config.defaults.category = Some(name.clone());
    }

    // Save config
    let config_path = save_default_config(&config)?;

    // Print success message
    println!("Added category '{name}'");
    println!("  Model: {}", model.display());
    println!("  Labels: {}", labels.display());
    println!("  Default: {}", if set_default { "yes" } else { "no" });
    println!("\nConfiguration saved to: {}", config_path.display());

    Ok(())
}
