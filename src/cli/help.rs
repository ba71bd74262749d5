//! Help message display for CLI.

#![allow(clippy::print_stdout)]

use crate::config::Config;

/// Print help message based on configuration state.
pub fn print_smart_help(config: &Config) {
    if config.categories.is_empty() {
        print_first_time_help();
    } else {
        print_configured_help(config);
    }
}

/// Print detailed setup guide for first-time users.
pub fn print_first_time_help() {
    println!("No configuration found. Get started with Naturid:");
    println!();
    println!("1. Initialize configuration:");
    println!("   naturid config init");
    println!();
    println!("2. Add a category with its model and labels:");
    println!(
        "   naturid categories add mammals --model ./models/mammals/model.tflite --labels ./models/mammals/labels.csv --default"
    );
    println!();
    println!("3. Classify a photo:");
    println!("   naturid photo.jpg -c mammals");
    println!();
    println!("IMPORTANT: Models are subject to their respective licenses. You are responsible");
    println!("for ensuring your use complies with each model's license terms.");
    println!();
    println!("Run 'naturid -h' for all options.");
}

/// Print brief usage reminder for configured users.
pub fn print_configured_help(config: &Config) {
    println!("Usage: naturid <IMAGE> [OPTIONS]");
    println!();
    println!("Example: naturid photo.jpg -c mammals");
    println!();

    let mut names: Vec<&String> = config.categories.keys().collect();
    names.sort();
    println!(
        "Configured categories: {}",
        names
            .into_iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
    println!("Run 'naturid -h' for all options or 'naturid categories list' for details.");
}
