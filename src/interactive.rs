//! Terminal data entry.
//!
//! Prompting goes through the [`Prompter`] trait so the entry loop can run
//! against scripted answers; [`InquirePrompter`] is the terminal
//! implementation.

use anyhow::{bail, Result};
use inquire::InquireError;
use std::fmt;
use tracing::{info, warn};

use crate::analyzer::Analyzer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportChoice {
    Json,
    Csv,
    Both,
    Skip,
}

impl ExportChoice {
    pub const ALL: [ExportChoice; 4] = [
        ExportChoice::Json,
        ExportChoice::Csv,
        ExportChoice::Both,
        ExportChoice::Skip,
    ];

    pub fn wants_json(self) -> bool {
        matches!(self, ExportChoice::Json | ExportChoice::Both)
    }

    pub fn wants_csv(self) -> bool {
        matches!(self, ExportChoice::Csv | ExportChoice::Both)
    }
}

impl fmt::Display for ExportChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExportChoice::Json => "JSON",
            ExportChoice::Csv => "CSV",
            ExportChoice::Both => "Both",
            ExportChoice::Skip => "No export",
        };
        f.write_str(label)
    }
}

pub trait Prompter {
    /// Free-text answer, trimmed. Cancelling yields an empty string.
    fn text(&mut self, message: &str) -> Result<String>;

    fn export_choice(&mut self) -> Result<ExportChoice>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InquirePrompter;

impl Prompter for InquirePrompter {
    fn text(&mut self, message: &str) -> Result<String> {
        match inquire::Text::new(message).prompt() {
            Ok(answer) => Ok(answer.trim().to_string()),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(String::new())
            }
            Err(InquireError::NotTTY) => {
                bail!("Interactive mode needs a terminal; use --input or --demo instead")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn export_choice(&mut self) -> Result<ExportChoice> {
        match inquire::Select::new("Export results?", ExportChoice::ALL.to_vec()).prompt() {
            Ok(choice) => Ok(choice),
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                Ok(ExportChoice::Skip)
            }
            Err(InquireError::NotTTY) => {
                warn!(action = "prompt", component = "export_choice", "Input is not a TTY, skipping export");
                Ok(ExportChoice::Skip)
            }
            Err(e) => Err(e.into()),
        }
    }
}

pub fn prompt_keyword(prompter: &mut dyn Prompter) -> Result<String> {
    let keyword = prompter.text("Enter your target keyword/topic:")?;
    if keyword.is_empty() {
        bail!("Keyword is required");
    }
    Ok(keyword)
}

/// Reads competitors until an empty domain is entered. Positions are assigned
/// in entry order starting after the records already present.
pub fn collect_competitors(analyzer: &mut Analyzer, prompter: &mut dyn Prompter) -> Result<usize> {
    println!("\nAnalyzing competitors for: '{}'", analyzer.keyword());
    println!("Enter competitor data (press Enter with empty domain to finish):");

    let mut added = 0;
    let mut position = analyzer.competitors().len() as i64 + 1;
    loop {
        println!("\nCompetitor #{}:", position);
        let domain = prompter.text("Domain (e.g., example.com):")?;
        if domain.is_empty() {
            break;
        }

        let url = prompter.text("Full URL:")?;
        let title = prompter.text("Title (optional):")?;
        let meta = prompter.text("Meta description (optional):")?;
        let snippet = prompter.text("Snippet (optional):")?;

        analyzer.add_competitor(domain, url, position, title, meta, snippet);
        position += 1;
        added += 1;
    }

    info!(action = "collect", component = "interactive", competitor_count = added, "Finished competitor entry");
    Ok(added)
}
