//! CLI entrypoint for toolrunner
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use std::sync::Arc;
use toolrunner_application::{
    LoadProgressNotifier, LoadToolRunnersUseCase, NoLoadProgress, TranslationConfig,
};
use toolrunner_domain::MultipleNestedPolicy;
use toolrunner_infrastructure::{
    ConfigLoader, FileConfig, FileOutputFormat, SubElementParser, XmlDocumentSource,
};
use toolrunner_presentation::{Cli, ConsoleFormatter, OutputFormat, SimpleProgress};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let config = apply_cli_overrides(file_config.to_translation_config()?, &cli);

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }
    let format = output_format(&cli, &file_config);

    info!(
        "Translating <{}> elements (multiple nested: {}, fail fast: {})",
        config.element_name, config.multiple_nested, config.fail_fast
    );

    // === Dependency Injection ===
    let use_case = LoadToolRunnersUseCase::new(
        Arc::new(XmlDocumentSource::new()),
        Arc::new(SubElementParser::new()),
        &config,
    );
    let progress: &dyn LoadProgressNotifier = if cli.quiet {
        &NoLoadProgress
    } else {
        &SimpleProgress
    };

    let mut outputs = Vec::new();
    let mut failed = false;
    for path in &cli.files {
        match use_case.execute_with_progress(path, progress) {
            Ok(output) => {
                failed |= !output.is_success();
                outputs.push(output);
            }
            Err(e) => {
                error!("{}", e);
                eprintln!("{} {}", "error:".red().bold(), e);
                failed = true;
            }
        }
    }

    match format {
        OutputFormat::Text => {
            for output in &outputs {
                println!("{}", ConsoleFormatter::format(output));
            }
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&outputs)),
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// CLI flags win over file configuration
fn apply_cli_overrides(mut config: TranslationConfig, cli: &Cli) -> TranslationConfig {
    if let Some(element) = &cli.element {
        config = config.with_element_name(element.clone());
    }
    if cli.allow_multiple_nested {
        config = config.with_multiple_nested(MultipleNestedPolicy::LastWins);
    }
    if cli.keep_going {
        config = config.keep_going();
    }
    config
}

fn output_format(cli: &Cli, file_config: &FileConfig) -> OutputFormat {
    cli.output.unwrap_or(match file_config.output.format {
        Some(FileOutputFormat::Json) => OutputFormat::Json,
        Some(FileOutputFormat::Text) | None => OutputFormat::Text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("toolrunner").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_overrides_file_config() {
        let cli = parse(&["--element", "runner", "--allow-multiple-nested", "-k", "a.xml"]);
        let config = apply_cli_overrides(TranslationConfig::default(), &cli);
        assert_eq!(config.element_name, "runner");
        assert_eq!(config.multiple_nested, MultipleNestedPolicy::LastWins);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_no_flags_keep_file_config() {
        let cli = parse(&["a.xml"]);
        let base = TranslationConfig::default().keep_going();
        assert_eq!(apply_cli_overrides(base.clone(), &cli), base);
    }

    #[test]
    fn test_output_format_precedence() {
        let mut file_config = FileConfig::default();
        file_config.output.format = Some(FileOutputFormat::Json);

        assert_eq!(output_format(&parse(&["a.xml"]), &file_config), OutputFormat::Json);
        assert_eq!(
            output_format(&parse(&["-o", "text", "a.xml"]), &file_config),
            OutputFormat::Text
        );
        assert_eq!(
            output_format(&parse(&["a.xml"]), &FileConfig::default()),
            OutputFormat::Text
        );
    }
}
