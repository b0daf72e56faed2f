use crate::domain::model::{Epithet, SearchResponse};
use crate::domain::ports::SpeciesLookup;
use crate::utils::error::{CheckError, Result};
use reqwest::Client;

pub const SPECIES_WS: &str = "http://api.gbif.org/v1/species/search?qField=SCIENTIFIC&q=";

/// Species search against the GBIF web service.
///
/// The request URL is `base_url` followed by the epithet verbatim. The epithet
/// is not percent-encoded; a URL holding control characters, spaces or DEL is
/// rejected before any request is sent, since the HTTP client would otherwise
/// escape them silently.
pub struct GbifSpeciesLookup {
    base_url: String,
    client: Client,
}

impl GbifSpeciesLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn request_url(&self, epithet: &Epithet) -> Result<String> {
        let url = format!("{}{}", self.base_url, epithet.as_str());
        match url.chars().find(|c| *c <= '\u{20}' || *c == '\u{7f}') {
            Some(c) => Err(CheckError::InvalidUrlError {
                reason: format!("URL can't contain control characters or spaces ({:?})", c),
                url,
            }),
            None => Ok(url),
        }
    }
}

impl Default for GbifSpeciesLookup {
    fn default() -> Self {
        Self::new(SPECIES_WS)
    }
}

#[async_trait::async_trait]
impl SpeciesLookup for GbifSpeciesLookup {
    async fn search(&self, epithet: &Epithet) -> Result<SearchResponse> {
        let url = self.request_url(epithet)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("API response status: {}", response.status());

        let body = response.error_for_status()?.bytes().await?;
        let parsed: SearchResponse = serde_json::from_slice(&body)?;

        tracing::debug!(
            "'{}': count={:?}, {} results",
            epithet,
            parsed.count,
            parsed.results.len()
        );
        Ok(parsed)
    }
}
