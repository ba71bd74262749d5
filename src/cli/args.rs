//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Wildlife species identification from photos using TFLite models.
#[derive(Debug, Parser)]
#[command(name = "naturid")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image file to classify.
    pub image: Option<PathBuf>,

    /// Common options for classification.
    #[command(flatten)]
    pub classify: ClassifyArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage categories.
    Categories {
        /// Categories action to perform.
        #[command(subcommand)]
        action: CategoriesAction,
    },
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}

/// Categories subcommand actions.
#[derive(Debug, Subcommand)]
pub enum CategoriesAction {
    /// List configured categories.
    List,
    /// Add a new category to configuration.
    Add {
        /// Name for this category (e.g., "mammals", "plants").
        name: String,
        /// Path to the TFLite model file.
        #[arg(long)]
        model: PathBuf,
        /// Path to the labels CSV file.
        #[arg(long)]
        labels: PathBuf,
        /// Set as the default category.
        #[arg(long)]
        default: bool,
    },
    /// Verify category files exist.
    Check,
}

/// Arguments for classification.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Category name from configuration.
    #[arg(short, long, env = "NATURID_CATEGORY")]
    pub category: Option<String>,

    /// Path to TFLite model file (overrides config).
    #[arg(long, env = "NATURID_MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Path to labels CSV file (overrides config).
    #[arg(long, env = "NATURID_LABELS_PATH")]
    pub labels_path: Option<PathBuf>,

    /// Emit the result as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
