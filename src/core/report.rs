use crate::domain::model::{Epithet, Report, SearchResponse, SpeciesRecord};
use crate::utils::error::{CheckError, Result};

const NO_RESULTS: &str = "--";
const IN_NAME_PREFIX: &str = "  \t!!! IN NAME: ";

/// First record, in list order, whose canonical name contains the epithet.
/// Letter case is ignored; records without a canonical name never match.
/// An explicit `"canonicalName": null` is skipped like a missing field rather
/// than aborting the run.
pub fn first_in_name<'a>(
    results: &'a [SpeciesRecord],
    epithet: &Epithet,
) -> Option<&'a SpeciesRecord> {
    let needle = epithet.as_str().to_lowercase();
    results.iter().find(|rec| {
        rec.canonical_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    })
}

pub fn inspect(epithet: &Epithet, response: &SearchResponse) -> Result<Report> {
    let Some(first) = response.results.first() else {
        return Ok(Report::NoResults);
    };

    let count = response
        .count
        .ok_or_else(|| CheckError::missing_field("count", epithet.as_str()))?;
    let first_scientific_name = scientific_name(first, epithet)?;

    let in_name = first_in_name(&response.results, epithet)
        .map(|rec| scientific_name(rec, epithet))
        .transpose()?;

    Ok(Report::Hits {
        count,
        first_scientific_name,
        in_name,
    })
}

fn scientific_name(record: &SpeciesRecord, epithet: &Epithet) -> Result<String> {
    record
        .scientific_name
        .clone()
        .ok_or_else(|| CheckError::missing_field("scientificName", epithet.as_str()))
}

impl Report {
    /// The exact stdout text for one epithet, newline-terminated.
    pub fn render(&self, epithet: &Epithet) -> String {
        match self {
            Report::NoResults => format!("{}\t{}\n", epithet, NO_RESULTS),
            Report::Hits {
                count,
                first_scientific_name,
                in_name,
            } => {
                let mut out = format!("{}\t{}  {}\n", epithet, count, first_scientific_name);
                if let Some(name) = in_name {
                    out.push_str(IN_NAME_PREFIX);
                    out.push_str(name);
                    out.push('\n');
                }
                out
            }
        }
    }
}
