use clap::Parser;
use std::path::PathBuf;

use crate::analyzer::AnalysisOptions;

#[derive(Parser, Debug)]
#[command(
    name = "serp-analyzer",
    about = "Analyze first-page search competitors for a keyword",
    version,
    long_about = None
)]
pub struct Args {
    /// Target keyword or topic
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Load competitors from a CSV in the export format
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Enter competitors at the terminal
    #[arg(long)]
    pub interactive: bool,

    /// Analyze built-in sample data
    #[arg(long, conflicts_with = "keyword")]
    pub demo: bool,

    /// Export the analysis as JSON, optionally to the given path
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub json: Option<Option<PathBuf>>,

    /// Export the competitor table as CSV, optionally to the given path
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub csv: Option<Option<PathBuf>>,

    /// Directory for exports written under their default names
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Shortest word counted in the common title words
    #[arg(long, default_value_t = 3)]
    pub min_word_length: usize,

    /// Number of common title words to keep
    #[arg(long, default_value_t = 5)]
    pub top_words: usize,

    /// Do not print the text report
    #[arg(long)]
    pub no_report: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            min_word_length: self.min_word_length,
            top_words: self.top_words,
        }
    }
}
