use crate::domain::model::{Epithet, SearchResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait EpithetSource: Send + Sync {
    fn read_epithets(&self) -> impl std::future::Future<Output = Result<Vec<Epithet>>> + Send;
}

#[async_trait]
pub trait SpeciesLookup: Send + Sync {
    async fn search(&self, epithet: &Epithet) -> Result<SearchResponse>;
}
