// Main entry point
mod interfaces;
mod presentation;

use autotranslate::infrastructure::config::{generate_config_sample, get_config_path};
use autotranslate::infrastructure::logging::init_logging;
use autotranslate::{
    get_translator, load_config, translate_request, Config, ServiceRegistry, ServiceSelector,
    TranslationRequest,
};
use clap::Parser;
use colored::Colorize;
use interfaces::cli::Cli;
use std::io::{BufRead, IsTerminal};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config()?;
    if let Some(service) = &cli.service {
        config.translator_service = Some(service.clone());
    }

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        generate_config_sample()?;
        return Ok(());
    }
    if cli.status {
        print_status(&config);
        return Ok(());
    }

    let Some(target) = cli.target else {
        eprintln!("{}", "Please provide a target language (-t)".red());
        std::process::exit(1);
    };

    let strings = if cli.strings.is_empty() {
        read_stdin_lines()?
    } else {
        cli.strings
    };
    let request = TranslationRequest::new(strings, target).from_language(cli.source);
    if request.is_empty() {
        eprintln!("{}", "Please provide strings to translate".red());
        std::process::exit(1);
    }

    let translator = get_translator(&config)?;
    let batch = translate_request(translator.as_ref(), &request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&batch)?);
    } else if std::io::stdout().is_terminal() {
        print!("{}", presentation::output::format_pretty(&batch));
    } else {
        print!("{}", presentation::output::format_plain(&batch));
    }

    Ok(())
}

/// Non-empty lines from stdin, in order
fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    let mut strings = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            strings.push(line);
        }
    }
    Ok(strings)
}

fn print_status(config: &Config) {
    println!("{}", "autotranslate Status".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    println!(
        "Config: {}",
        get_config_path()
            .filter(|p| p.exists())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "Not found".to_string())
    );
    println!("Translator service: {}", ServiceSelector::from_config(config));

    if config.google_translate_key().is_some() {
        println!("Google API key: Configured");
    } else {
        println!("Google API key: Not configured");
    }
    println!(
        "Amazon region: {}",
        config.amazon.region.as_deref().unwrap_or("from environment")
    );

    println!();
    println!("Available services:");
    let registry = ServiceRegistry::with_builtins();
    for name in registry.names() {
        let available = registry
            .lookup(name)
            .map(|factory| factory.is_available())
            .unwrap_or(false);
        if available {
            println!("  {}", name);
        } else {
            println!("  {} {}", name, "(not compiled in)".yellow());
        }
    }
}
