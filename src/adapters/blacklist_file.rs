use crate::domain::model::Epithet;
use crate::domain::ports::EpithetSource;
use crate::utils::error::Result;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_BLACKLIST_FILE: &str = "blacklist-epithets.txt";

#[derive(Debug, Clone)]
pub struct BlacklistFile {
    path: PathBuf,
}

impl BlacklistFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EpithetSource for BlacklistFile {
    async fn read_epithets(&self) -> Result<Vec<Epithet>> {
        tracing::debug!("Reading epithets from: {}", self.path.display());
        let content = fs::read_to_string(&self.path)?;

        let epithets: Vec<Epithet> = content.lines().filter_map(Epithet::from_line).collect();
        tracing::debug!("Loaded {} epithets", epithets.len());
        Ok(epithets)
    }
}
