//! Validate command implementation

use super::ResourceArgs;
use anyhow::Result;
use clap::Args;
use codemix_core::Resources;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub resources: ResourceArgs,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let (_, config) = self.resources.resolve()?;
        let paths = &config.resources;

        println!("Validating tagging resources:");
        println!("  English word list: {}", paths.english.display());
        println!("  Hindi word list:   {}", paths.hindi.display());
        println!("  Manual word map:   {}", paths.word_map.display());

        match Resources::load(paths, config.top_n) {
            Ok(resources) => {
                println!("✓ Resources are valid!");
                println!("  English words: {}", resources.english.len());
                println!("  Hindi words:   {}", resources.hindi.len());
                println!("  Manual entries: {}", resources.word_map.len());
                println!("  Policy: {}", config.policy);
                Ok(())
            }
            Err(e) => {
                println!("✗ Resources are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
