//! PokeAPI client for fetching base stats by name

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use super::parser::parse_pokemon_json;
use super::types::PokemonRecord;
use crate::config::DexConfig;
use crate::error::LookupError;

/// Anything that can turn a slug into base stats
#[async_trait]
pub trait PokemonSource: Send + Sync {
    async fn fetch_pokemon(&self, slug: &str) -> Result<PokemonRecord, LookupError>;
}

pub struct PokeApiClient {
    client: reqwest::Client,
    config: DexConfig,
}

impl PokeApiClient {
    pub fn new(config: DexConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, config })
    }

    fn max_attempts(&self) -> u32 {
        self.config.max_retries.max(1)
    }

    /// Single fetch attempt
    async fn fetch_attempt(
        &self,
        url: &str,
        slug: &str,
        attempt: u32,
    ) -> Result<PokemonRecord, LookupError> {
        let transport = |message: String| LookupError::Http {
            name: slug.to_string(),
            attempts: attempt,
            message,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await.map_err(|e| transport(e.to_string()))?;
            return parse_pokemon_json(slug, &body);
        }

        if status.is_client_error() && status != StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::NotFound {
                name: slug.to_string(),
                status: status.as_u16(),
            });
        }

        Err(transport(format!("HTTP error {}", status)))
    }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
    /// Fetch one Pokémon, retrying transport failures, 429 and 5xx responses.
    /// Unknown names (other 4xx) and undecodable bodies fail immediately.
    async fn fetch_pokemon(&self, slug: &str) -> Result<PokemonRecord, LookupError> {
        if slug.is_empty() {
            return Err(LookupError::EmptyName);
        }

        let url = self.config.pokemon_url(slug);
        let max_attempts = self.max_attempts();

        let mut attempt = 1;
        loop {
            if attempt > 1 {
                let delay = Duration::from_secs(self.config.retry_delay_seconds * attempt as u64);
                tracing::debug!(
                    "Retrying {} after {:?} (attempt {}/{})",
                    slug,
                    delay,
                    attempt,
                    max_attempts
                );
                tokio::time::sleep(delay).await;
            }

            match self.fetch_attempt(&url, slug, attempt).await {
                Ok(record) => {
                    tracing::debug!("Fetched base stats for {}: {:?}", slug, record.base);
                    return Ok(record);
                }
                Err(e) if e.is_permanent() => {
                    tracing::info!("Lookup for {} failed: {}", slug, e);
                    return Err(e);
                }
                Err(e) if attempt >= max_attempts => {
                    tracing::error!(
                        "Failed to fetch {} after {} attempts: {}",
                        slug,
                        max_attempts,
                        e
                    );
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!(
                        "Attempt {}/{} failed for {}: {}",
                        attempt,
                        max_attempts,
                        slug,
                        e
                    );
                }
            }
            attempt += 1;
        }
    }
}
