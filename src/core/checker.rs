use crate::core::report::inspect;
use crate::domain::model::RunSummary;
use crate::domain::ports::{EpithetSource, SpeciesLookup};
use crate::utils::error::Result;
use std::io::Write;

/// Looks up every blacklisted epithet in turn and writes one report block per
/// epithet. The first error aborts the run; blocks already written stay written.
pub struct BlacklistChecker<L: SpeciesLookup> {
    lookup: L,
}

impl<L: SpeciesLookup> BlacklistChecker<L> {
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    pub async fn run<S, W>(&self, source: &S, out: &mut W) -> Result<RunSummary>
    where
        S: EpithetSource,
        W: Write,
    {
        let epithets = source.read_epithets().await?;
        let mut summary = RunSummary::default();

        for stop in &epithets {
            let response = self.lookup.search(stop).await?;
            let report = inspect(stop, &response)?;

            out.write_all(report.render(stop).as_bytes())?;
            out.flush()?;
            summary.record(&report);
        }

        tracing::info!(
            "Checked {} epithets: {} with results, {} found in a canonical name",
            summary.checked,
            summary.with_results,
            summary.in_name
        );
        Ok(summary)
    }
}
