//! Pokémon data access over the upstream HTTP API.

use async_trait::async_trait;

use crate::config::UpstreamConfig;
use crate::error::AppError;
use crate::models::Pokemon;

/// Source of upstream Pokémon records.
#[async_trait]
pub trait PokemonSource: Send + Sync {
    /// Fetch one Pokémon by numeric id or name.
    async fn fetch(&self, id_or_name: &str) -> Result<Pokemon, AppError>;
}

/// Fetches Pokémon from a PokeAPI-compatible service.
#[derive(Clone)]
pub struct PokeApiRepository {
    client: reqwest::Client,
    base_url: String,
    timeout: std::time::Duration,
}

impl PokeApiRepository {
    /// Build a repository with the configured base URL and request timeout.
    pub fn new(config: &UpstreamConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("palettedex/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(AppError::Upstream)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: config.timeout(),
        })
    }

    fn pokemon_url(&self, id_or_name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, id_or_name.to_lowercase())
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AppError {
        if err.is_timeout() {
            AppError::UpstreamTimeout(self.timeout)
        } else {
            AppError::Upstream(err)
        }
    }
}

#[async_trait]
impl PokemonSource for PokeApiRepository {
    async fn fetch(&self, id_or_name: &str) -> Result<Pokemon, AppError> {
        let url = self.pokemon_url(id_or_name);
        tracing::debug!("Fetching Pokémon from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, id = id_or_name, "Upstream returned an error status");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                id: id_or_name.to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        serde_json::from_slice(&body).map_err(|e| AppError::UpstreamDecode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_url_lowercases_and_trims() {
        let repo = PokeApiRepository::new(&UpstreamConfig {
            base_url: "https://pokeapi.example/api/v2/".to_string(),
            timeout_secs: 1,
        })
        .unwrap();

        assert_eq!(
            repo.pokemon_url("Pikachu"),
            "https://pokeapi.example/api/v2/pokemon/pikachu"
        );
    }
}
