use crate::adapters::{DEFAULT_BLACKLIST_FILE, SPECIES_WS};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "epithet-blacklist")]
#[command(about = "Look up blacklisted epithets in the GBIF species search")]
pub struct CheckerConfig {
    /// File with one epithet per line
    #[arg(long, default_value = DEFAULT_BLACKLIST_FILE)]
    pub input: String,

    /// Species search URL; the epithet is appended verbatim
    #[arg(long, default_value = SPECIES_WS)]
    pub species_ws: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_BLACKLIST_FILE.to_string(),
            species_ws: SPECIES_WS.to_string(),
            verbose: false,
            log_json: false,
        }
    }
}

impl Validate for CheckerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_url("species_ws", &self.species_ws)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hardcoded_values() {
        let config = CheckerConfig::parse_from(["epithet-blacklist"]);

        assert_eq!(config.input, "blacklist-epithets.txt");
        assert_eq!(
            config.species_ws,
            "http://api.gbif.org/v1/species/search?qField=SCIENTIFIC&q="
        );
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = CheckerConfig::parse_from([
            "epithet-blacklist",
            "--input",
            "/tmp/epithets.txt",
            "--species-ws",
            "http://localhost:8080/search?q=",
            "--verbose",
        ]);

        assert_eq!(config.input, "/tmp/epithets.txt");
        assert_eq!(config.species_ws, "http://localhost:8080/search?q=");
        assert!(config.verbose);
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let config = CheckerConfig {
            species_ws: "ftp://api.gbif.org/".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
