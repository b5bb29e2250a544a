//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for translated runners
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for toolrunner
#[derive(Parser, Debug)]
#[command(name = "toolrunner")]
#[command(author, version, about = "Translate <tool-runner> elements into tool definitions")]
#[command(long_about = r#"
toolrunner reads XML configuration documents, finds every <tool-runner>
element and prints the tool and argument list each one describes.

A runner names its tool in exactly one way:
  tool-class="org.example.Tool"     class name attribute
  tool-ref="myTool"                 reference to an existing object
  <bean class="..."/>               nested definition

Configuration files are loaded from (in priority order):
1. TOOLRUNNER_* environment variables
2. --config <path>     Explicit config file
3. ./toolrunner.toml   Project-level config
4. ~/.config/toolrunner/config.toml   Global config

Example:
  toolrunner jobs.xml
  toolrunner -o json --keep-going jobs.xml more-jobs.xml
  toolrunner --element jar-runner --allow-multiple-nested jobs.xml
"#)]
pub struct Cli {
    /// Configuration documents to read
    #[arg(value_name = "FILE", required_unless_present = "show_config")]
    pub files: Vec<PathBuf>,

    /// Local name of runner elements (overrides parser.element)
    #[arg(short, long, value_name = "NAME")]
    pub element: Option<String>,

    /// Let the last nested definition win instead of rejecting the runner
    #[arg(long)]
    pub allow_multiple_nested: bool,

    /// Report every failing runner instead of stopping at the first
    #[arg(short, long)]
    pub keep_going: bool,

    /// Output format (overrides output.format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "toolrunner",
            "-vv",
            "-o",
            "json",
            "--keep-going",
            "--element",
            "runner",
            "a.xml",
            "b.xml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert!(cli.keep_going);
        assert_eq!(cli.element.as_deref(), Some("runner"));
        assert_eq!(cli.files, vec![PathBuf::from("a.xml"), PathBuf::from("b.xml")]);
    }

    #[test]
    fn test_files_required_unless_show_config() {
        assert!(Cli::try_parse_from(["toolrunner"]).is_err());
        let cli = Cli::try_parse_from(["toolrunner", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.files.is_empty());
    }
}
