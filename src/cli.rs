//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use truthforge::config::GlobalConfig;
use truthforge::output::OutputMode;

/// truthforge - verify answers against the TruthForge service
#[derive(Parser, Debug)]
#[command(
    name = "truthforge",
    version,
    about = "Verify answers against the TruthForge adjudication service",
    long_about = "Submit a claim, an answer and optional rules to the remote\n\
                  multi-agent verification service, then render the verdict,\n\
                  per-agent findings, confidence score and cited sources."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verification service origin (overrides config and TRUTHFORGE_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Verify an answer against a claim or spec
    Verify {
        /// The claim or spec to check against (@path reads a file)
        #[arg(short, long)]
        spec: String,

        /// The answer to verify (@path reads a file)
        #[arg(short, long)]
        answer: String,

        /// Rules or standards the answer must follow (@path reads a file)
        #[arg(short, long)]
        rules: Option<String>,

        /// Request a corrected solution when the verdict does not pass
        #[arg(long)]
        fix: bool,

        /// Write a flat text report of the result to this path
        #[arg(long, value_name = "PATH")]
        report: Option<std::path::PathBuf>,
    },

    /// Request a corrected solution for a failed answer
    Fix {
        /// The claim or spec the answer failed against (@path reads a file)
        #[arg(short, long)]
        spec: String,

        /// The failed answer (@path reads a file)
        #[arg(short, long)]
        answer: String,

        /// Rules or standards the corrected answer must follow (@path reads a file)
        #[arg(short, long)]
        rules: Option<String>,
    },

    /// Manage configuration (service origin, theme)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,

    /// Set the verification service origin
    SetUrl {
        /// Service origin, e.g. http://localhost:8000
        url: String,
    },

    /// Show or change the output theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ThemeAction {
    /// Show the current theme
    Show,

    /// Set the theme: dark, light
    Set {
        /// Theme name
        value: String,
    },

    /// Switch between dark and light
    Toggle,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = GlobalConfig::load();
    let api_url = cli
        .api_url
        .or_else(|| std::env::var("TRUTHFORGE_API_URL").ok())
        .unwrap_or_else(|| config.api_url.clone());
    let theme = config.ui.theme;

    match cli.command {
        Some(Command::Verify { spec, answer, rules, fix, report }) => commands::verify(
            &commands::VerifyArgs { spec, answer, rules, fix, report },
            &api_url,
            output_mode,
            theme,
        ),
        Some(Command::Fix { spec, answer, rules }) => {
            commands::fix(&spec, &answer, rules.as_deref(), &api_url, output_mode)
        },
        Some(Command::Config { action }) => commands::config_cmd(action, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("truthforge v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("truthforge v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'truthforge --help' for usage");
                println!("Run 'truthforge verify --help' to submit an answer");
            }
            Ok(())
        },
    }
}
