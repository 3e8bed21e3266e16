//! PokéAPI HTTP client

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::parse::parse_count;

/// Thin async client over the PokéAPI REST endpoints
pub struct PokeApiClient {
    base_url: String,
    client: Client,
}

impl PokeApiClient {
    /// Create a client for `base_url` (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// URL of `resource`, or of one entry of it when `id` is given
    #[must_use]
    pub fn url(&self, resource: &str, id: Option<u32>) -> String {
        match id {
            Some(id) => format!("{}/{resource}/{id}/", self.base_url),
            None => format!("{}/{resource}", self.base_url),
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("Request to {url} was rejected"))?;

        response
            .json()
            .await
            .with_context(|| format!("Response from {url} is not valid JSON"))
    }

    /// Number of species known to the API
    pub async fn species_count(&self) -> Result<u32> {
        let url = self.url("pokemon-species", None);
        let value = self.get_json(&url).await?;
        parse_count(&value).with_context(|| format!("No species count in response from {url}"))
    }

    /// The `pokemon/{id}` document: alias, types, height, weight
    pub async fn fetch_pokemon(&self, id: u32) -> Result<Value> {
        self.get_json(&self.url("pokemon", Some(id))).await
    }

    /// The `pokemon-species/{id}` document: localized names, genera, flavor text
    pub async fn fetch_species(&self, id: u32) -> Result<Value> {
        self.get_json(&self.url("pokemon-species", Some(id))).await
    }

    /// Both documents for `id`, fetched concurrently
    pub async fn fetch(&self, id: u32) -> Result<(Value, Value)> {
        tokio::try_join!(self.fetch_pokemon(id), self.fetch_species(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> PokeApiClient {
        PokeApiClient::new(base, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn test_entry_url() {
        let api = client("https://pokeapi.co/api/v2");
        assert_eq!(
            api.url("pokemon", Some(25)),
            "https://pokeapi.co/api/v2/pokemon/25/"
        );
    }

    #[test]
    fn test_list_url() {
        let api = client("https://pokeapi.co/api/v2");
        assert_eq!(
            api.url("pokemon-species", None),
            "https://pokeapi.co/api/v2/pokemon-species"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let api = client("http://localhost:8000/api/v2/");
        assert_eq!(
            api.url("pokemon", Some(1)),
            "http://localhost:8000/api/v2/pokemon/1/"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_error() {
        let api = client("http://127.0.0.1:9");
        let err = api.species_count().await.unwrap_err();
        assert!(err.to_string().contains("Request to http://127.0.0.1:9"));
    }
}
