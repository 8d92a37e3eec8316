//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Directory holding the resource files
    #[arg(short, long, value_name = "DIR", default_value = "resources")]
    pub resource_dir: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Resource directory: {}", self.resource_dir.display());
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Point the [resources] paths at your word lists");
        println!("2. Validate your configuration:");
        println!("   codemix validate --config {}", self.output.display());
        println!("3. Use it for tagging:");
        println!(
            "   codemix tag -i tokens.txt -o tagged.txt --config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let dir = self.resource_dir.display();
        format!(
            r#"# codemix configuration

[resources]
# English word list: one word per line, extra tab-separated columns ignored
english = "{dir}/EN.words.txt"
# Romanized Hindi word list, same format
hindi = "{dir}/HI.trans.fire2013.txt"
# Manual overrides: word<TAB>label, one per line (label: en, hi, univ)
word_map = "{dir}/word_map.txt"

[tagging]
# Tokens no rule decides:
#   "strict"   carry the previous en/hi label of the segment
#   "fallback" retry without non-ASCII characters first
policy = "fallback"

# Use only the first N word map entries (omit to use all)
# top_n = 500

# Tag segments on a thread pool
parallel = false
# Worker threads for parallel tagging (0 = all cores)
worker_threads = 0

[scoring]
# Print every token with its predicted and reference labels
verbose = false
# "text" or "json"
default_format = "text"
"#
        )
    }
}
