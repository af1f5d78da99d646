//! Derived guidance layered on top of the raw statistics: recurring title
//! shapes, unoccupied ranks, weak competitors, content insights and the
//! resulting suggestions.

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

use crate::record::CompetitorRecord;
use crate::stats::{contains_keyword, TextStats, TitleAnalysis};

const MAX_QUICK_WINS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitlePattern {
    pub pattern: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct GapAnalysis {
    pub ranking_gaps: Vec<RankingGap>,
    pub quick_wins: Vec<QuickWin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingGap {
    pub start: i64,
    pub end: i64,
    pub size: i64,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickWin {
    pub position: i64,
    pub domain: String,
    pub issues: Vec<String>,
    pub opportunity: Opportunity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Opportunity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Opportunity::High => "High",
            Opportunity::Medium => "Medium",
            Opportunity::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Short observation about competitor titles with a matching suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentInsight {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub value: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: Opportunity,
    pub recommendation: String,
    pub impact: String,
}

fn round_one(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Title shapes checked by [`title_patterns`], in report order.
static PATTERN_CHECKS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("with numbers", r"\d"),
        ("with brackets", r"[\[(]"),
        ("with pipes", r"\|"),
        ("with colons", r":"),
        ("question format", r"\?"),
        ("with brand", r"[|\-]"),
    ]
    .into_iter()
    .map(|(name, re)| (name, Regex::new(re).expect("title pattern is valid")))
    .collect()
});

pub fn title_patterns(titles: &[&str]) -> Vec<TitlePattern> {
    let titles: Vec<&str> = titles.iter().copied().filter(|t| !t.is_empty()).collect();
    if titles.is_empty() {
        return Vec::new();
    }

    PATTERN_CHECKS
        .iter()
        .map(|(name, re)| {
            let count = titles.iter().filter(|t| re.is_match(t)).count();
            TitlePattern {
                pattern: name.to_string(),
                count,
                percentage: round_one(count as f64 / titles.len() as f64 * 100.0),
            }
        })
        .filter(|p| p.count > 0)
        .collect()
}

/// Keyword usage and title length observations. Keyword usage is always
/// reported (0% without titles); title length only when titles exist.
pub fn content_insights(titles: Option<&TextStats>) -> Vec<ContentInsight> {
    let mut out = Vec::new();

    let density = titles.map(|t| t.keyword_presence.percentage()).unwrap_or(0.0);
    out.push(ContentInsight {
        kind: "keyword_usage".to_string(),
        title: "Keyword Usage in Titles".to_string(),
        value: format!("{:.1}% of competitors use target keyword", density),
        recommendation: if density < 70.0 {
            "Include target keyword in title for better relevance"
        } else {
            "Good keyword usage among competitors"
        }
        .to_string(),
    });

    if let Some(titles) = titles {
        let average = titles.average_length;
        out.push(ContentInsight {
            kind: "title_length".to_string(),
            title: "Title Length Optimization".to_string(),
            // halves round away from zero
            value: format!("Average: {} characters", average.round()),
            recommendation: if average < 50.0 {
                "Consider longer, more descriptive titles"
            } else if average > 65.0 {
                "Shorter titles may improve CTR"
            } else {
                "Title lengths are well optimized"
            }
            .to_string(),
        });
    }

    out
}

/// Unoccupied ranks between consecutive positions of `sorted` (ascending).
pub fn ranking_gaps(sorted: &[CompetitorRecord]) -> Vec<RankingGap> {
    sorted
        .windows(2)
        .filter_map(|pair| {
            let (start, end) = (pair[0].position, pair[1].position);
            let gap = end - start;
            (gap > 1).then(|| RankingGap {
                start,
                end,
                size: gap - 1,
                opportunity: if gap > 2 {
                    Opportunity::High
                } else {
                    Opportunity::Medium
                },
            })
        })
        .collect()
}

pub fn quick_wins(sorted: &[CompetitorRecord], keyword: &str) -> Vec<QuickWin> {
    sorted
        .iter()
        .filter_map(|record| {
            let mut issues = Vec::new();

            if !record.title.is_empty() && !contains_keyword(&record.title, keyword) {
                issues.push("Missing target keyword in title".to_string());
            }
            if !record.title.is_empty() && (record.title_length < 30 || record.title_length > 65) {
                issues.push(format!("Title length ({}) not optimized", record.title_length));
            }
            if !record.meta_description.is_empty() && record.meta_length < 120 {
                issues.push("Meta description too short".to_string());
            }

            if issues.is_empty() {
                return None;
            }

            Some(QuickWin {
                position: record.position,
                domain: record.domain.clone(),
                issues,
                opportunity: match record.position {
                    p if p <= 5 => Opportunity::High,
                    p if p <= 8 => Opportunity::Medium,
                    _ => Opportunity::Low,
                },
            })
        })
        .take(MAX_QUICK_WINS)
        .collect()
}

pub fn recommendations(
    titles: Option<&TitleAnalysis>,
    metas: Option<&TextStats>,
    gaps: &[RankingGap],
    patterns: &[TitlePattern],
) -> Vec<Recommendation> {
    let mut out = Vec::new();
    let mut push = |category: &str, priority, recommendation: String, impact: &str| {
        out.push(Recommendation {
            category: category.to_string(),
            priority,
            recommendation,
            impact: impact.to_string(),
        });
    };

    if let Some(titles) = titles {
        let presence = titles.stats.keyword_presence;
        if presence.ratio() < 0.7 {
            push(
                "Title Optimization",
                Opportunity::High,
                format!(
                    "Include your target keyword in the title - only {:.1}% of competitors do this",
                    presence.percentage()
                ),
                "High - Better relevance and click-through rates",
            );
        }

        if titles.stats.average_length < 45.0 {
            push(
                "Title Length",
                Opportunity::Medium,
                "Consider longer titles (50-60 characters) to include more descriptive keywords"
                    .to_string(),
                "Medium - Better keyword coverage and user clarity",
            );
        } else if titles.stats.average_length > 65.0 {
            push(
                "Title Length",
                Opportunity::Medium,
                "Shorten titles to under 60 characters to avoid truncation in search results"
                    .to_string(),
                "Medium - Improved visibility and click-through rates",
            );
        }
    }

    if let Some(metas) = metas {
        if metas.average_length < 140.0 {
            push(
                "Meta Description",
                Opportunity::Medium,
                "Write longer meta descriptions (150-160 characters) to maximize SERP real estate"
                    .to_string(),
                "Medium - Better CTR through more compelling descriptions",
            );
        }
    }

    if let Some(gap) = gaps.first() {
        push(
            "Ranking Opportunities",
            Opportunity::High,
            format!(
                "Target positions {}-{} - weak competition detected",
                gap.start + 1,
                gap.end - 1
            ),
            "High - Quick ranking improvements possible",
        );
    }

    // max_by_key keeps the last maximum; reverse so the earliest wins ties
    if let Some(top) = patterns.iter().rev().max_by_key(|p| p.count) {
        if top.percentage > 40.0 {
            push(
                "Content Pattern",
                Opportunity::Low,
                format!(
                    "Consider using {} in titles - {:.1}% of competitors use this pattern",
                    top.pattern, top.percentage
                ),
                "Low - Alignment with successful competitor strategies",
            );
        }
    }

    out.truncate(MAX_RECOMMENDATIONS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::KeywordPresence;

    fn record(position: i64, title: &str, meta: &str) -> CompetitorRecord {
        CompetitorRecord::new(format!("site{}.com", position), "", position, title, meta, "")
    }

    #[test]
    fn gaps_between_sorted_positions() {
        let sorted: Vec<_> = [1, 2, 4, 4, 8].iter().map(|&p| record(p, "", "")).collect();
        let gaps = ranking_gaps(&sorted);

        assert_eq!(gaps.len(), 2);
        assert_eq!((gaps[0].start, gaps[0].end, gaps[0].size), (2, 4, 1));
        assert_eq!(gaps[0].opportunity, Opportunity::Medium);
        assert_eq!((gaps[1].start, gaps[1].end, gaps[1].size), (4, 8, 3));
        assert_eq!(gaps[1].opportunity, Opportunity::High);
    }

    #[test]
    fn quick_wins_collect_issues_per_record() {
        let long_meta = "m".repeat(130);
        let sorted = vec![
            record(1, "Best laptops 2024: top picks for every budget", &long_meta),
            record(6, "Short", "too short"),
            record(9, "", ""),
        ];

        let wins = quick_wins(&sorted, "laptops");
        assert_eq!(wins.len(), 1);
        assert_eq!(wins[0].position, 6);
        assert_eq!(wins[0].opportunity, Opportunity::Medium);
        assert_eq!(
            wins[0].issues,
            vec![
                "Missing target keyword in title",
                "Title length (5) not optimized",
                "Meta description too short",
            ]
        );
    }

    #[test]
    fn title_patterns_skip_unused_shapes() {
        let patterns = title_patterns(&["Best Laptops 2024 | PCMag", "Why buy?", ""]);
        let names: Vec<_> = patterns.iter().map(|p| (p.pattern.as_str(), p.count, p.percentage)).collect();
        assert_eq!(
            names,
            vec![
                ("with numbers", 1, 50.0),
                ("with pipes", 1, 50.0),
                ("question format", 1, 50.0),
                ("with brand", 1, 50.0),
            ]
        );
        assert!(title_patterns(&[]).is_empty());
    }

    fn title_stats(matched: usize, total: usize, average_length: f64) -> TextStats {
        TextStats {
            average_length,
            min_length: 10,
            max_length: 90,
            keyword_presence: KeywordPresence { matched, total },
        }
    }

    #[test]
    fn content_insights_cover_keyword_use_and_length() {
        let stats = title_stats(3, 4, 57.0);
        let insights = content_insights(Some(&stats));

        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].kind, "keyword_usage");
        assert_eq!(insights[0].value, "75.0% of competitors use target keyword");
        assert_eq!(insights[0].recommendation, "Good keyword usage among competitors");
        assert_eq!(insights[1].kind, "title_length");
        assert_eq!(insights[1].value, "Average: 57 characters");
        assert_eq!(insights[1].recommendation, "Title lengths are well optimized");

        let short = content_insights(Some(&title_stats(1, 4, 30.0)));
        assert_eq!(short[0].recommendation, "Include target keyword in title for better relevance");
        assert_eq!(short[1].recommendation, "Consider longer, more descriptive titles");

        let long = content_insights(Some(&title_stats(4, 4, 80.0)));
        assert_eq!(long[1].recommendation, "Shorter titles may improve CTR");
    }

    #[test]
    fn content_insights_without_titles_report_zero_usage() {
        let insights = content_insights(None);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].value, "0.0% of competitors use target keyword");

        let json = serde_json::to_value(&insights[0]).unwrap();
        assert_eq!(json["type"], "keyword_usage");
    }

    #[test]
    fn opportunity_displays_plain_label() {
        assert_eq!(Opportunity::High.to_string(), "High");
        assert_eq!(format!("[{}]", Opportunity::Medium), "[Medium]");
        assert_eq!(Opportunity::Low.to_string(), "Low");
    }

    #[test]
    fn recommendations_follow_thresholds() {
        let titles = TitleAnalysis {
            stats: TextStats {
                average_length: 30.0,
                min_length: 20,
                max_length: 40,
                keyword_presence: KeywordPresence { matched: 1, total: 4 },
            },
            common_words: Vec::new(),
        };
        let gaps = vec![RankingGap {
            start: 2,
            end: 6,
            size: 3,
            opportunity: Opportunity::High,
        }];

        let recs = recommendations(Some(&titles), None, &gaps, &[]);
        let categories: Vec<_> = recs.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["Title Optimization", "Title Length", "Ranking Opportunities"]
        );
        assert!(recs[0].recommendation.contains("25.0%"));
        assert_eq!(recs[2].recommendation, "Target positions 3-5 - weak competition detected");
    }
}
