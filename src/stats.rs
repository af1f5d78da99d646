use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::DomainAnalysis;
use crate::insights::{ContentInsight, GapAnalysis, Recommendation, TitlePattern};
use crate::record::CompetitorRecord;

pub const NO_COMPETITORS: &str = "No competitors added";
pub const NO_TITLES: &str = "No titles to analyze";
pub const NO_META_DESCRIPTIONS: &str = "No meta descriptions to analyze";

/// Outcome of [`crate::Analyzer::analyze`].
///
/// An analyzer with no records yields `Empty` rather than an error; it
/// serializes as `{"error": "No competitors added"}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Report(Box<AnalysisReport>),
    Empty { error: String },
}

impl Analysis {
    pub fn empty() -> Self {
        Analysis::Empty {
            error: NO_COMPETITORS.to_string(),
        }
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            Analysis::Report(report) => Some(report),
            Analysis::Empty { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub keyword: String,
    pub analysis_date: String,
    pub total_competitors: usize,
    /// Best-ranked record; the earliest inserted one on a tie.
    pub top_performer: CompetitorRecord,
    pub top_3_domains: Vec<String>,
    pub average_position: f64,
    pub position_distribution: PositionDistribution,
    pub title_analysis: TextAnalysis<TitleAnalysis>,
    pub meta_analysis: TextAnalysis<TextStats>,
    pub domain_analysis: DomainAnalysis,
    pub title_patterns: Vec<TitlePattern>,
    pub gap_analysis: GapAnalysis,
    pub content_insights: Vec<ContentInsight>,
    pub recommendations: Vec<Recommendation>,
    pub competitors: Vec<CompetitorRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionDistribution {
    pub top_3: usize,
    pub positions_4_6: usize,
    pub positions_7_10: usize,
}

impl PositionDistribution {
    pub fn total(&self) -> usize {
        self.top_3 + self.positions_4_6 + self.positions_7_10
    }
}

/// Per-field sub-result: statistics, or a marker that the field was empty on
/// every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TextAnalysis<T> {
    Stats(T),
    Missing { error: String },
}

impl<T> TextAnalysis<T> {
    pub fn missing(message: &str) -> Self {
        TextAnalysis::Missing {
            error: message.to_string(),
        }
    }

    pub fn stats(&self) -> Option<&T> {
        match self {
            TextAnalysis::Stats(stats) => Some(stats),
            TextAnalysis::Missing { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStats {
    pub average_length: f64,
    pub min_length: usize,
    pub max_length: usize,
    pub keyword_presence: KeywordPresence,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleAnalysis {
    #[serde(flatten)]
    pub stats: TextStats,
    pub common_words: Vec<String>,
}

/// How many analyzed texts contain the keyword. Serialized as `"1/2 (50.0%)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordPresence {
    pub matched: usize,
    pub total: usize,
}

impl KeywordPresence {
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.matched as f64 / self.total as f64
        }
    }

    pub fn percentage(&self) -> f64 {
        self.ratio() * 100.0
    }
}

impl fmt::Display for KeywordPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.matched, self.total, self.percentage())
    }
}

impl Serialize for KeywordPresence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    text.to_lowercase().contains(&keyword.to_lowercase())
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn average_position(records: &[CompetitorRecord]) -> Option<f64> {
    let positions: Vec<f64> = records.iter().map(|r| r.position as f64).collect();
    mean(&positions)
}

/// Buckets 1-3, 4-6 and 7-10. Positions outside 1-10 land in none of them.
pub fn position_distribution(records: &[CompetitorRecord]) -> PositionDistribution {
    let in_range = |lo: i64, hi: i64| {
        records
            .iter()
            .filter(|r| (lo..=hi).contains(&r.position))
            .count()
    };

    PositionDistribution {
        top_3: in_range(1, 3),
        positions_4_6: in_range(4, 6),
        positions_7_10: in_range(7, 10),
    }
}

/// Length and keyword statistics over the non-empty entries of `texts`.
pub fn text_stats(texts: &[&str], keyword: &str) -> Option<TextStats> {
    let texts: Vec<&str> = texts.iter().copied().filter(|t| !t.is_empty()).collect();
    let lengths: Vec<usize> = texts.iter().map(|t| t.chars().count()).collect();

    let as_float: Vec<f64> = lengths.iter().map(|&l| l as f64).collect();
    let average_length = mean(&as_float)?;

    Some(TextStats {
        average_length,
        min_length: lengths.iter().copied().min()?,
        max_length: lengths.iter().copied().max()?,
        keyword_presence: KeywordPresence {
            matched: texts.iter().filter(|t| contains_keyword(t, keyword)).count(),
            total: texts.len(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(position: i64) -> CompetitorRecord {
        CompetitorRecord::new("example.com", "", position, "", "", "")
    }

    #[test]
    fn keyword_presence_formats_one_decimal() {
        let stats = text_stats(&["Best Laptop 2024", "Top Picks"], "laptop").unwrap();
        assert_eq!(stats.keyword_presence.to_string(), "1/2 (50.0%)");

        let thirds = KeywordPresence { matched: 1, total: 3 };
        assert_eq!(thirds.to_string(), "1/3 (33.3%)");
    }

    #[test]
    fn text_stats_skip_empty_entries() {
        let stats = text_stats(&["abcd", "", "ab"], "x").unwrap();
        assert_eq!(stats.min_length, 2);
        assert_eq!(stats.max_length, 4);
        assert_eq!(stats.average_length, 3.0);
        assert_eq!(stats.keyword_presence.total, 2);
        assert!(text_stats(&["", ""], "x").is_none());
    }

    #[test]
    fn keyword_match_ignores_case() {
        assert!(contains_keyword("BEST LAPTOPS 2024", "best laptops"));
        assert!(!contains_keyword("Best notebooks", "laptop"));
    }

    #[test]
    fn out_of_range_positions_fall_outside_buckets() {
        let records: Vec<_> = [0, 1, 3, 4, 6, 7, 10, 11, -2].into_iter().map(at).collect();
        let dist = position_distribution(&records);
        assert_eq!(dist.top_3, 2);
        assert_eq!(dist.positions_4_6, 2);
        assert_eq!(dist.positions_7_10, 2);
        assert!(dist.total() < records.len());
    }

    #[test]
    fn in_range_positions_fill_buckets_exactly() {
        let records: Vec<_> = (1..=10).chain([2, 5, 9]).map(at).collect();
        let dist = position_distribution(&records);
        assert_eq!(dist.top_3, 4);
        assert_eq!(dist.positions_4_6, 4);
        assert_eq!(dist.positions_7_10, 5);
        assert_eq!(dist.total(), records.len());
    }

    #[test]
    fn average_of_positions() {
        let records: Vec<_> = (1..=5).map(at).collect();
        assert_eq!(average_position(&records), Some(3.0));
        assert_eq!(average_position(&[]), None);
    }

    #[test]
    fn empty_analysis_serializes_as_error_object() {
        let json = serde_json::to_value(Analysis::empty()).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "No competitors added" }));
    }
}
