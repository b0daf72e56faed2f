// Adapters layer: concrete implementations for external systems.

pub mod blacklist_file;
pub mod gbif;

pub use blacklist_file::{BlacklistFile, DEFAULT_BLACKLIST_FILE};
pub use gbif::{GbifSpeciesLookup, SPECIES_WS};
