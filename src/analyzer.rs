use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::domain;
use crate::export;
use crate::insights::{self, GapAnalysis};
use crate::record::CompetitorRecord;
use crate::stats::{self, Analysis, AnalysisReport, TextAnalysis, TitleAnalysis};
use crate::words;

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tuning for the word-frequency part of the title analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub min_word_length: usize,
    pub top_words: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            min_word_length: 3,
            top_words: 5,
        }
    }
}

/// Competitor records collected for a single keyword.
#[derive(Debug, Clone)]
pub struct Analyzer {
    keyword: String,
    analysis_date: NaiveDateTime,
    options: AnalysisOptions,
    competitors: Vec<CompetitorRecord>,
}

impl Analyzer {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self::with_date(keyword, Local::now().naive_local())
    }

    /// Like [`Analyzer::new`] with a fixed analysis timestamp.
    pub fn with_date(keyword: impl Into<String>, analysis_date: NaiveDateTime) -> Self {
        let keyword = keyword.into();
        info!(action = "create", component = "analyzer", keyword = %keyword, "Created analyzer");
        Analyzer {
            keyword,
            analysis_date,
            options: AnalysisOptions::default(),
            competitors: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: AnalysisOptions) -> Self {
        self.options = options;
        self
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn analysis_date(&self) -> String {
        self.analysis_date.format(DATE_FORMAT).to_string()
    }

    /// Records in insertion order.
    pub fn competitors(&self) -> &[CompetitorRecord] {
        &self.competitors
    }

    pub fn is_empty(&self) -> bool {
        self.competitors.is_empty()
    }

    /// Appends a record. Positions are not validated; anything outside 1-10
    /// still counts toward totals and the mean but toward no bucket.
    pub fn add_competitor(
        &mut self,
        domain: impl Into<String>,
        url: impl Into<String>,
        position: i64,
        title: impl Into<String>,
        meta_description: impl Into<String>,
        snippet: impl Into<String>,
    ) {
        let record = CompetitorRecord::new(domain, url, position, title, meta_description, snippet);
        debug!(action = "add", component = "analyzer", domain = %record.domain, position, "Added competitor");
        self.competitors.push(record);
    }

    /// Ingests every row of a tabular export, in file order.
    pub fn load_csv(&mut self, path: &Path) -> Result<usize> {
        let records = export::read_competitors_csv(path)?;
        let count = records.len();
        for r in records {
            self.add_competitor(r.domain, r.url, r.position, r.title, r.meta_description, r.snippet);
        }
        Ok(count)
    }

    /// Records ordered by position; equal positions keep insertion order.
    pub fn sorted_competitors(&self) -> Vec<CompetitorRecord> {
        let mut sorted = self.competitors.clone();
        sorted.sort_by_key(|r| r.position);
        sorted
    }

    pub fn analyze(&self) -> Analysis {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "analysis",
            competitor_count = self.competitors.len(),
            "Starting SERP analysis"
        );

        let Some(average_position) = stats::average_position(&self.competitors) else {
            info!(action = "complete", component = "analysis", "No competitors to analyze");
            return Analysis::empty();
        };

        let sorted = self.sorted_competitors();
        let titles: Vec<&str> = self.competitors.iter().map(|c| c.title.as_str()).collect();
        let metas: Vec<&str> = self
            .competitors
            .iter()
            .map(|c| c.meta_description.as_str())
            .collect();

        let title_analysis = match stats::text_stats(&titles, &self.keyword) {
            Some(stats) => TextAnalysis::Stats(TitleAnalysis {
                stats,
                common_words: words::common_words(
                    titles.iter().copied().filter(|t| !t.is_empty()),
                    self.options.min_word_length,
                    self.options.top_words,
                ),
            }),
            None => TextAnalysis::missing(stats::NO_TITLES),
        };
        let meta_analysis = match stats::text_stats(&metas, &self.keyword) {
            Some(stats) => TextAnalysis::Stats(stats),
            None => TextAnalysis::missing(stats::NO_META_DESCRIPTIONS),
        };

        let title_patterns = insights::title_patterns(&titles);
        let gap_analysis = GapAnalysis {
            ranking_gaps: insights::ranking_gaps(&sorted),
            quick_wins: insights::quick_wins(&sorted, &self.keyword),
        };
        let content_insights =
            insights::content_insights(title_analysis.stats().map(|t| &t.stats));
        let recommendations = insights::recommendations(
            title_analysis.stats(),
            meta_analysis.stats(),
            &gap_analysis.ranking_gaps,
            &title_patterns,
        );

        let report = AnalysisReport {
            keyword: self.keyword.clone(),
            analysis_date: self.analysis_date(),
            total_competitors: self.competitors.len(),
            top_performer: sorted[0].clone(),
            top_3_domains: sorted.iter().take(3).map(|c| c.domain.clone()).collect(),
            average_position,
            position_distribution: stats::position_distribution(&self.competitors),
            title_analysis,
            meta_analysis,
            domain_analysis: domain::analyze_domains(
                self.competitors.iter().map(|c| c.domain.as_str()),
            ),
            title_patterns,
            gap_analysis,
            content_insights,
            recommendations,
            competitors: sorted,
        };

        info!(
            action = "complete",
            component = "analysis",
            competitor_count = report.total_competitors,
            duration_ms = start_time.elapsed().as_millis(),
            "SERP analysis completed"
        );

        Analysis::Report(Box::new(report))
    }
}
