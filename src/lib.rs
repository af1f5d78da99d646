pub mod analyzer;
pub mod args;
pub mod demo;
pub mod domain;
pub mod export;
pub mod insights;
pub mod interactive;
pub mod record;
pub mod report;
pub mod stats;
pub mod utils;
pub mod words;

pub use analyzer::{AnalysisOptions, Analyzer};
pub use args::Args;
pub use record::CompetitorRecord;
pub use report::print_analysis_results;
pub use stats::{Analysis, AnalysisReport};
