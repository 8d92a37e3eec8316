//! Tag command implementation

use super::{init_logging, ResourceArgs};
use crate::error::CliError;
use crate::input::FileReader;
use crate::progress::ProgressReporter;
use anyhow::{Context as _, Result};
use clap::Args;
use codemix_core::stream::write_lines;
use codemix_core::{Context, TagSummary, TaggedLine, Tagger};
use std::path::PathBuf;

/// Arguments for the tag command
#[derive(Debug, Args)]
pub struct TagArgs {
    /// Input file with one token per line and blank lines between segments
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Output file for token<TAB>label lines
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    #[command(flatten)]
    pub resources: ResourceArgs,

    /// Tag segments in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel tagging (default: all cores)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TagArgs {
    /// Execute the tag command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting token tagging");
        log::debug!("Arguments: {:?}", self);

        let (cli_config, tagger_config) = self.resources.resolve()?;
        let tagger = tagger_config
            .build_tagger()
            .context("Failed to load tagging resources")?;

        let content = FileReader::read_text(&self.input)?;
        let lines: Vec<&str> = content.lines().collect();

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_lines(lines.len() as u64);

        let parallel = self.parallel || cli_config.tagging.parallel;
        let tagged = if parallel {
            let threads = self
                .threads
                .filter(|&n| n > 0)
                .unwrap_or(match cli_config.tagging.worker_threads {
                    0 => num_cpus::get(),
                    n => n,
                });
            let tagged = tag_parallel(&tagger, &lines, threads)?;
            progress.lines_completed(lines.len() as u64);
            tagged
        } else {
            tag_sequential(&tagger, &lines, &progress)
        };
        progress.finish();

        let writer = FileReader::create(&self.output)?;
        write_lines(&tagged, writer)
            .with_context(|| format!("Failed to write {}", self.output.display()))?;

        let summary = TagSummary::from_lines(&tagged);
        log::info!(
            "rules: {:?}, ascii retries: {}, carried: {}",
            summary.rules,
            summary.ascii_retries,
            summary.carried
        );
        if !self.quiet {
            print_summary(&summary, &self.output);
        }

        Ok(())
    }
}

fn tag_sequential(tagger: &Tagger, lines: &[&str], progress: &ProgressReporter) -> Vec<TaggedLine> {
    let mut context = Context::new();
    let mut segment = 1;
    progress.segment_started(segment);

    lines
        .iter()
        .map(|line| {
            let tagged = tagger.tag_line(line, &mut context);
            if matches!(tagged, TaggedLine::Boundary) {
                segment += 1;
                progress.segment_started(segment);
            }
            progress.lines_completed(1);
            tagged
        })
        .collect()
}

fn tag_parallel(tagger: &Tagger, lines: &[&str], threads: usize) -> Result<Vec<TaggedLine>> {
    log::debug!("tagging with {threads} worker threads");
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| CliError::ProcessingError(e.to_string()))?;

    Ok(pool.install(|| tagger.tag_lines_parallel(lines)))
}

fn print_summary(summary: &TagSummary, output: &std::path::Path) {
    use codemix_core::Label;

    println!(
        "Tagged {} tokens in {} segments -> {}",
        summary.tokens,
        summary.segments,
        output.display()
    );
    println!(
        "  en: {}, hi: {}, univ: {}",
        summary.count(Label::English),
        summary.count(Label::Hindi),
        summary.count(Label::Universal)
    );
    if summary.unclassified > 0 {
        println!(
            "  {} tokens matched no rule and took the context label",
            summary.unclassified
        );
    }
}
