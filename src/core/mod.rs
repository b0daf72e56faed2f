pub mod checker;
pub mod report;

pub use crate::domain::model::{Epithet, Report, RunSummary, SearchResponse, SpeciesRecord};
pub use crate::domain::ports::{EpithetSource, SpeciesLookup};
pub use crate::utils::error::Result;
