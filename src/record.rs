use serde::{Deserialize, Serialize};

/// One search result entry for the analyzed keyword.
///
/// Length fields are derived once in [`CompetitorRecord::new`]. Records are
/// never mutated after insertion, so they cannot drift from the text.
/// When reading a CSV the length columns are optional; loading goes back
/// through [`CompetitorRecord::new`] anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitorRecord {
    pub domain: String,
    #[serde(default)]
    pub url: String,
    pub position: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub title_length: usize,
    #[serde(default)]
    pub meta_length: usize,
    #[serde(default)]
    pub snippet_length: usize,
}

impl CompetitorRecord {
    /// Column order of the tabular export.
    pub const FIELDS: [&'static str; 9] = [
        "domain",
        "url",
        "position",
        "title",
        "meta_description",
        "snippet",
        "title_length",
        "meta_length",
        "snippet_length",
    ];

    pub fn new(
        domain: impl Into<String>,
        url: impl Into<String>,
        position: i64,
        title: impl Into<String>,
        meta_description: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        let title = title.into();
        let meta_description = meta_description.into();
        let snippet = snippet.into();

        CompetitorRecord {
            domain: domain.into(),
            url: url.into(),
            position,
            title_length: title.chars().count(),
            meta_length: meta_description.chars().count(),
            snippet_length: snippet.chars().count(),
            title,
            meta_description,
            snippet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_count_characters_not_bytes() {
        let record = CompetitorRecord::new("café.fr", "", 1, "Café crème", "", "naïve");
        assert_eq!(record.title_length, 10);
        assert_eq!(record.meta_length, 0);
        assert_eq!(record.snippet_length, 5);
    }
}
