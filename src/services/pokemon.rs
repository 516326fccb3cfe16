//! Pokémon palette service: upstream fetch, color resolution and caching.

use std::sync::Arc;

use crate::cache::CacheStatus;
use crate::config::Config;
use crate::context::{AppPokemonSource, Context, PokemonCache};
use crate::di::FromContext;
use crate::error::AppError;
use crate::models::{Pokemon, PokemonColors};
use crate::palette::{css_classes, css_variables, resolve, slugify};

/// Longest identifier accepted before calling upstream.
const MAX_ID_LEN: usize = 64;

/// Service producing colorized Pokémon responses.
///
/// Lookups check the cache first. On a miss the Pokémon is fetched,
/// colorized and stored; failed fetches leave the cache untouched.
#[derive(FromContext, Clone)]
pub struct PokemonService {
    source: AppPokemonSource,
    cache: PokemonCache,
    config: Arc<Config>,
}

impl PokemonService {
    /// Colorized Pokémon by id or name, with whether it came from cache.
    pub async fn get_colors(&self, id: &str) -> Result<(PokemonColors, CacheStatus), AppError> {
        let id = normalize_id(id)?;
        let cache_key = format!("pokemon-{}", id);

        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!(key = %cache_key, "Cache hit");
            return Ok((cached, CacheStatus::Hit));
        }

        tracing::debug!(key = %cache_key, "Cache miss, fetching upstream");
        let pokemon = self.source.fetch(&id).await?;
        let colors = self.colorize(&pokemon);

        self.cache.put(cache_key, colors.clone());
        Ok((colors, CacheStatus::Miss))
    }

    /// Seconds a cached response stays fresh, mirrored in `Cache-Control`.
    pub fn max_age_secs(&self) -> u64 {
        self.cache.ttl().as_secs()
    }

    /// Build the response for an upstream record using the configured policy.
    pub fn colorize(&self, pokemon: &Pokemon) -> PokemonColors {
        let types = pokemon.type_names();
        let colors = resolve(&types, self.config.palette.secondary_policy);
        let slug = slugify(&pokemon.name);

        PokemonColors {
            id: pokemon.id,
            name: pokemon.name.clone(),
            sprite: pokemon.sprites.front_default.clone(),
            official_artwork: pokemon.sprites.official_artwork(),
            types,
            css: css_classes(&slug, &colors),
            css_variables: css_variables(&slug, &colors),
            colors,
        }
    }
}

/// Trims and lowercases an identifier, rejecting anything that is not a
/// plain id or name (`[a-z0-9-]`). A rejected identifier is cut to
/// `MAX_ID_LEN` characters in the error.
pub fn normalize_id(id: &str) -> Result<String, AppError> {
    let id = id.trim().to_lowercase();

    let valid = !id.is_empty()
        && id.len() <= MAX_ID_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(id)
    } else {
        Err(AppError::InvalidId(id.chars().take(MAX_ID_LEN).collect()))
    }
}
