use serde::Deserialize;

/// One trimmed, non-empty line of the blacklist file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Epithet(String);

impl Epithet {
    /// Trims the line; blank lines yield `None`.
    pub fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Epithet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    #[serde(default)]
    pub scientific_name: Option<String>,
    #[serde(default)]
    pub canonical_name: Option<String>,
}

/// `results` is required; `count` is only read when there are results.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub count: Option<u64>,
    pub results: Vec<SpeciesRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    NoResults,
    Hits {
        count: u64,
        first_scientific_name: String,
        in_name: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub with_results: usize,
    pub in_name: usize,
}

impl RunSummary {
    pub fn record(&mut self, report: &Report) {
        self.checked += 1;
        if let Report::Hits { in_name, .. } = report {
            self.with_results += 1;
            if in_name.is_some() {
                self.in_name += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epithet_from_line_trims() {
        assert_eq!(Epithet::from_line("  minuta \r").unwrap().as_str(), "minuta");
        assert!(Epithet::from_line("   ").is_none());
        assert!(Epithet::from_line("").is_none());
    }

    #[test]
    fn test_search_response_requires_results() {
        let parsed: std::result::Result<SearchResponse, _> =
            serde_json::from_str(r#"{"count": 3}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_species_record_optional_fields() {
        let parsed: SearchResponse = serde_json::from_str(
            r#"{"count": 2, "results": [
                {"scientificName": "Abies alba Mill.", "key": 1},
                {"scientificName": "Abies", "canonicalName": null}
            ]}"#,
        )
        .unwrap();

        assert_eq!(parsed.count, Some(2));
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(
            parsed.results[0].scientific_name.as_deref(),
            Some("Abies alba Mill.")
        );
        assert!(parsed.results[1].canonical_name.is_none());
    }

    #[test]
    fn test_run_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(&Report::NoResults);
        summary.record(&Report::Hits {
            count: 1,
            first_scientific_name: "A".to_string(),
            in_name: None,
        });
        summary.record(&Report::Hits {
            count: 4,
            first_scientific_name: "B".to_string(),
            in_name: Some("B c".to_string()),
        });

        assert_eq!(
            summary,
            RunSummary {
                checked: 3,
                with_results: 2,
                in_name: 1
            }
        );
    }
}
