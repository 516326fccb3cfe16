//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::models::{PokemonColors, TypeColorList};
use crate::rate_limit::RateLimiter;
use crate::repositories::{PokeApiRepository, PokemonSource};

/// Shared handle to the upstream Pokémon source.
pub type AppPokemonSource = Arc<dyn PokemonSource>;

/// Per-Pokémon response cache.
pub type PokemonCache = ResponseCache<PokemonColors>;

/// Cache for the static type color listing.
pub type TypesCache = ResponseCache<TypeColorList>;

/// Root application context for dependency injection.
///
/// The Context holds all shared dependencies and uses `#[derive(Context)]`
/// to generate `FromRef` implementations for each field, enabling
/// compile-time dependency resolution. Every field is a cheap handle, so
/// clones share caches and counters.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Upstream Pokémon data source.
    pub pokemon_source: AppPokemonSource,
    /// Colorized Pokémon responses.
    pub pokemon_cache: PokemonCache,
    /// Type color listing.
    pub types_cache: TypesCache,
    /// Per-client request counters.
    pub rate_limiter: RateLimiter,
}

impl Context {
    /// Build a context backed by the PokeAPI repository.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let source = PokeApiRepository::new(&config.upstream)?;
        tracing::info!("Upstream Pokémon API: {}", config.upstream.base_url);
        Ok(Self::with_source(config, Arc::new(source)))
    }

    /// Build a context around an explicit Pokémon source.
    pub fn with_source(config: Config, source: AppPokemonSource) -> Self {
        let pokemon_cache = ResponseCache::new(config.cache.entity_ttl(), config.cache.max_entries);
        // The listing is a single key.
        let types_cache = ResponseCache::new(config.cache.types_ttl(), 1);
        let rate_limiter = RateLimiter::new(
            config.rate_limit.requests,
            config.rate_limit.window(),
            config.rate_limit.max_clients,
        );

        Self {
            config: Arc::new(config),
            pokemon_source: source,
            pokemon_cache,
            types_cache,
            rate_limiter,
        }
    }
}
