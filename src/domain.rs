use serde::Serialize;
use std::collections::HashSet;

/// Suffixes recognized by the TLD breakdown, matched in this order.
pub const KNOWN_SUFFIXES: [&str; 8] = [
    ".com", ".org", ".edu", ".gov", ".net", ".co.uk", ".io", ".ai",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainAnalysis {
    pub subdomains: usize,
    pub with_www: usize,
    pub unique_domains: usize,
    pub tld_breakdown: Vec<TldCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TldCount {
    pub tld: String,
    pub count: usize,
}

/// More than one dot, so `blog.example.com` and `www.example.com` both count.
pub fn is_subdomain(domain: &str) -> bool {
    domain.matches('.').count() > 1
}

pub fn has_www(domain: &str) -> bool {
    domain.starts_with("www.")
}

pub fn classify_tld(domain: &str) -> &'static str {
    let lowered = domain.to_lowercase();
    let clean = lowered.strip_prefix("www.").unwrap_or(&lowered);

    KNOWN_SUFFIXES
        .iter()
        .find(|suffix| clean.ends_with(*suffix))
        .copied()
        .unwrap_or("other")
}

pub fn tld_breakdown<'a, I>(domains: I) -> Vec<TldCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: Vec<TldCount> = KNOWN_SUFFIXES
        .iter()
        .chain(std::iter::once(&"other"))
        .map(|tld| TldCount {
            tld: tld.to_string(),
            count: 0,
        })
        .collect();

    for domain in domains {
        let tld = classify_tld(domain);
        if let Some(entry) = counts.iter_mut().find(|c| c.tld == tld) {
            entry.count += 1;
        }
    }

    counts.retain(|c| c.count > 0);
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Domain characteristics across every record, counting duplicates.
pub fn analyze_domains<'a, I>(domains: I) -> DomainAnalysis
where
    I: IntoIterator<Item = &'a str>,
{
    let domains: Vec<&str> = domains.into_iter().collect();

    DomainAnalysis {
        subdomains: domains.iter().filter(|d| is_subdomain(d)).count(),
        with_www: domains.iter().filter(|d| has_www(d)).count(),
        unique_domains: domains.iter().collect::<HashSet<_>>().len(),
        tld_breakdown: tld_breakdown(domains.iter().copied()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_subdomains_www_and_uniques() {
        let analysis = analyze_domains([
            "www.pcmag.com",
            "pcmag.com",
            "blog.example.co.uk",
            "pcmag.com",
            "PCMag.com",
        ]);

        assert_eq!(analysis.subdomains, 2);
        assert_eq!(analysis.with_www, 1);
        // exact string comparison, no case folding
        assert_eq!(analysis.unique_domains, 4);
    }

    #[test]
    fn tld_breakdown_orders_by_count() {
        let breakdown = tld_breakdown(["a.io", "b.com", "www.c.com", "d.co.uk", "e.dev", "f.io", "g.com"]);
        let pairs: Vec<(&str, usize)> = breakdown.iter().map(|t| (t.tld.as_str(), t.count)).collect();
        assert_eq!(
            pairs,
            vec![(".com", 3), (".io", 2), (".co.uk", 1), ("other", 1)]
        );
    }

    #[test]
    fn classify_strips_www_and_case() {
        assert_eq!(classify_tld("WWW.Example.ORG"), ".org");
        assert_eq!(classify_tld("localhost"), "other");
    }
}
