pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{BlacklistFile, GbifSpeciesLookup};
pub use config::CheckerConfig;
pub use core::checker::BlacklistChecker;
pub use utils::error::{CheckError, Result};
