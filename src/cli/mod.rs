//! Command-line interface definitions.

mod args;
pub mod help;

pub use args::{CategoriesAction, Cli, ClassifyArgs, Command, ConfigAction};
