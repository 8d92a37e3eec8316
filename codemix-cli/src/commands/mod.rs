//! CLI command implementations

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use codemix_core::label::EXTENDED_TAGS;
use codemix_core::{AmbiguityPolicy, Label, Rule, TaggerConfig};
use std::path::PathBuf;

pub mod generate_config;
pub mod score;
pub mod simplify;
pub mod tag;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Tag every token of a one-token-per-line file with en, hi or univ
    Tag(tag::TagArgs),

    /// Score a tagged file against a reference annotation
    Score(score::ScoreArgs),

    /// Collapse extended reference tags (acro, ne, mixed, undef) to univ
    Simplify(simplify::SimplifyArgs),

    /// Check that the resource files load
    Validate(validate::ValidateArgs),

    /// Write a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Tag(args) => args.execute(),
            Commands::Score(args) => args.execute(),
            Commands::Simplify(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the tagging rules in cascade order
    Rules,

    /// List the output labels
    Labels,
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Rules => {
                println!("Tagging rules (first match wins):");
                for (i, rule) in Rule::CASCADE.iter().enumerate() {
                    println!("  {}. {:<16} {}", i + 1, rule.name(), rule.description());
                }
                println!();
                println!("Undecided tokens follow the ambiguity policy:");
                println!("  strict    carry the previous en/hi label of the segment");
                println!("  fallback  retry without non-ASCII characters, then carry");
            }
            ListCommands::Labels => {
                println!("Output labels:");
                for label in Label::ALL {
                    println!("  {:<6} {}", label.as_str(), label_description(label));
                }
                println!();
                println!(
                    "Reference tags collapsed to univ: {}",
                    EXTENDED_TAGS.join(", ")
                );
            }
        }
        Ok(())
    }
}

fn label_description(label: Label) -> &'static str {
    match label {
        Label::English => "English",
        Label::Hindi => "Hindi (romanized)",
        Label::Universal => "language-independent (punctuation, numbers, emoticons, mentions)",
    }
}

/// Ambiguity policy choices on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Carry the segment's previous language label
    Strict,
    /// Retry without non-ASCII characters before carrying the label
    Fallback,
}

impl From<Policy> for AmbiguityPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Strict => AmbiguityPolicy::Strict,
            Policy::Fallback => AmbiguityPolicy::Fallback,
        }
    }
}

/// Resource and policy options shared by commands that build a tagger
#[derive(Debug, Default, Args)]
pub struct ResourceArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// English word list (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub english: Option<PathBuf>,

    /// Hindi word list (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub hindi: Option<PathBuf>,

    /// Manual word map (overrides the configuration)
    #[arg(long, value_name = "FILE")]
    pub word_map: Option<PathBuf>,

    /// Use only the first N word map entries
    #[arg(short = 'n', long, value_name = "N")]
    pub top_n: Option<usize>,

    /// How to label tokens no rule decides
    #[arg(long, value_enum)]
    pub policy: Option<Policy>,
}

impl ResourceArgs {
    /// Merge the configuration file with command-line overrides
    pub fn resolve(&self) -> Result<(CliConfig, TaggerConfig)> {
        let cli_config = CliConfig::load_or_default(self.config.as_deref())?;

        let mut builder = TaggerConfig::builder()
            .resources(cli_config.resources.clone())
            .policy(
                self.policy
                    .map(AmbiguityPolicy::from)
                    .unwrap_or(cli_config.tagging.policy),
            )
            .top_n(self.top_n.or(cli_config.tagging.top_n));
        if let Some(path) = &self.english {
            builder = builder.english(path);
        }
        if let Some(path) = &self.hindi {
            builder = builder.hindi(path);
        }
        if let Some(path) = &self.word_map {
            builder = builder.word_map(path);
        }

        let tagger_config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok((cli_config, tagger_config))
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if !quiet {
        // Unit tests run several commands in one process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
