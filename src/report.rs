use std::fmt;

use crate::stats::{Analysis, AnalysisReport};

const RULE_WIDTH: usize = 60;
const MAX_LISTED: usize = 10;
const TITLE_PREVIEW: usize = 80;
const SUMMARY_WORDS: usize = 3;

/// Cuts `text` to `max` characters, appending `...` when anything was dropped.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Plain-text rendering of an [`Analysis`].
pub struct Summary<'a>(pub &'a Analysis);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "SERP ANALYSIS REPORT")?;
        writeln!(f, "{}", rule)?;

        match self.0 {
            Analysis::Report(report) => write_report(f, report),
            Analysis::Empty { error } => writeln!(f, "{}", error),
        }
    }
}

fn write_report(f: &mut fmt::Formatter<'_>, report: &AnalysisReport) -> fmt::Result {
    writeln!(f, "Keyword: {}", report.keyword)?;
    writeln!(f, "Analysis Date: {}", report.analysis_date)?;
    writeln!(f, "Total Competitors: {}", report.total_competitors)?;
    writeln!(
        f,
        "Top Performer: {} (position {})",
        report.top_performer.domain, report.top_performer.position
    )?;

    writeln!(f, "\nTOP 3 RANKING DOMAINS:")?;
    for (i, domain) in report.top_3_domains.iter().enumerate() {
        writeln!(f, "  {}. {}", i + 1, domain)?;
    }

    let dist = &report.position_distribution;
    writeln!(f, "\nPOSITION DISTRIBUTION:")?;
    writeln!(f, "  Top 3 positions: {}", dist.top_3)?;
    writeln!(f, "  Positions 4-6: {}", dist.positions_4_6)?;
    writeln!(f, "  Positions 7-10: {}", dist.positions_7_10)?;

    if let Some(titles) = report.title_analysis.stats() {
        writeln!(f, "\nTITLE ANALYSIS:")?;
        writeln!(f, "  Average length: {:.1} characters", titles.stats.average_length)?;
        writeln!(
            f,
            "  Length range: {}-{}",
            titles.stats.min_length, titles.stats.max_length
        )?;
        writeln!(f, "  Keyword in title: {}", titles.stats.keyword_presence)?;
        let words: Vec<&str> = titles
            .common_words
            .iter()
            .take(SUMMARY_WORDS)
            .map(String::as_str)
            .collect();
        writeln!(f, "  Common words: {}", words.join(", "))?;
    }

    if let Some(metas) = report.meta_analysis.stats() {
        writeln!(f, "\nMETA DESCRIPTION ANALYSIS:")?;
        writeln!(f, "  Average length: {:.1} characters", metas.average_length)?;
        writeln!(f, "  Length range: {}-{}", metas.min_length, metas.max_length)?;
        writeln!(f, "  Keyword in meta description: {}", metas.keyword_presence)?;
    }

    let domains = &report.domain_analysis;
    writeln!(f, "\nDOMAIN ANALYSIS:")?;
    writeln!(f, "  Unique domains: {}", domains.unique_domains)?;
    writeln!(f, "  Subdomains: {}", domains.subdomains)?;
    writeln!(f, "  With www: {}", domains.with_www)?;
    if !domains.tld_breakdown.is_empty() {
        let tlds: Vec<String> = domains
            .tld_breakdown
            .iter()
            .map(|t| format!("{} ({})", t.tld, t.count))
            .collect();
        writeln!(f, "  TLDs: {}", tlds.join(", "))?;
    }

    if !report.content_insights.is_empty() {
        writeln!(f, "\nCONTENT INSIGHTS:")?;
        for insight in &report.content_insights {
            writeln!(f, "  {}: {}", insight.title, insight.value)?;
            writeln!(f, "     {}", insight.recommendation)?;
        }
    }

    if !report.gap_analysis.ranking_gaps.is_empty() {
        writeln!(f, "\nRANKING GAPS:")?;
        for gap in &report.gap_analysis.ranking_gaps {
            writeln!(
                f,
                "  Between {} and {}: {} open position(s), {} opportunity",
                gap.start, gap.end, gap.size, gap.opportunity
            )?;
        }
    }

    if !report.recommendations.is_empty() {
        writeln!(f, "\nRECOMMENDATIONS:")?;
        for rec in &report.recommendations {
            writeln!(f, "  [{}] {}: {}", rec.priority, rec.category, rec.recommendation)?;
        }
    }

    writeln!(f, "\nCOMPETITOR DETAILS:")?;
    for comp in report.competitors.iter().take(MAX_LISTED) {
        writeln!(f, "  {}. {}", comp.position, comp.domain)?;
        if !comp.title.is_empty() {
            writeln!(f, "     Title: {}", truncate(&comp.title, TITLE_PREVIEW))?;
        }
        writeln!(f)?;
    }

    Ok(())
}

pub fn render(analysis: &Analysis) -> String {
    Summary(analysis).to_string()
}

pub fn print_analysis_results(analysis: &Analysis) {
    print!("{}", Summary(analysis));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Analyzer;
    use chrono::NaiveDate;

    fn analyzer() -> Analyzer {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Analyzer::with_date("laptop", date)
    }

    #[test]
    fn truncate_marks_long_text() {
        assert_eq!(truncate("short", 80), "short");
        assert_eq!(truncate(&"x".repeat(80), 80), "x".repeat(80));
        assert_eq!(truncate(&"é".repeat(81), 80), format!("{}...", "é".repeat(80)));
    }

    #[test]
    fn renders_header_sections_and_details() {
        let mut analyzer = analyzer();
        analyzer.add_competitor("b.com", "", 2, "Top Picks", "", "");
        analyzer.add_competitor("a.com", "", 1, "Best Laptop 2024", "", "");

        let text = render(&analyzer.analyze());
        assert!(text.contains("SERP ANALYSIS REPORT"));
        assert!(text.contains("Keyword: laptop\nAnalysis Date: 2024-05-02 08:00:00\nTotal Competitors: 2"));
        assert!(text.contains("TOP 3 RANKING DOMAINS:\n  1. a.com\n  2. b.com\n"));
        assert!(text.contains("  Top 3 positions: 2\n  Positions 4-6: 0\n  Positions 7-10: 0\n"));
        assert!(text.contains("  Average length: 12.5 characters\n  Length range: 9-16\n"));
        assert!(text.contains("  Keyword in title: 1/2 (50.0%)\n"));
        assert!(text.contains("  Common words: best (1), laptop (1), top (1)\n"));
        assert!(text.contains("  1. a.com\n     Title: Best Laptop 2024\n\n  2. b.com\n"));
        assert!(!text.contains("META DESCRIPTION ANALYSIS"));
        assert!(text.contains("Total Competitors: 2\nTop Performer: a.com (position 1)\n"));
        assert!(text.contains(
            "CONTENT INSIGHTS:\n  Keyword Usage in Titles: 50.0% of competitors use target keyword\n"
        ));
        assert!(text.contains("  [High] Title Optimization: "));
        assert!(!text.contains("High {"));
    }

    #[test]
    fn gaps_render_plain_opportunity_labels() {
        let mut analyzer = analyzer();
        analyzer.add_competitor("a.com", "", 1, "", "", "");
        analyzer.add_competitor("b.com", "", 5, "", "", "");

        let text = render(&analyzer.analyze());
        assert!(text.contains("  Between 1 and 5: 3 open position(s), High opportunity\n"));
        assert!(text.contains("  [High] Ranking Opportunities: Target positions 2-4"));
    }

    #[test]
    fn lists_at_most_ten_competitors() {
        let mut analyzer = analyzer();
        for position in 1..=12 {
            analyzer.add_competitor(format!("site{}.com", position), "", position, "", "", "");
        }

        let text = render(&analyzer.analyze());
        assert!(text.contains("  10. site10.com\n"));
        assert!(!text.contains("site11.com"));
        assert!(!text.contains("TITLE ANALYSIS"));
    }

    #[test]
    fn empty_analysis_renders_marker() {
        let text = render(&analyzer().analyze());
        assert!(text.ends_with("SERP ANALYSIS REPORT\n============================================================\nNo competitors added\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let mut analyzer = analyzer();
        analyzer.add_competitor("a.com", "", 3, "A title long enough to matter here", "meta", "");
        assert_eq!(render(&analyzer.analyze()), render(&analyzer.analyze()));
    }
}
