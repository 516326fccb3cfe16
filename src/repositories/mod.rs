//! Data access layer for upstream Pokémon records.
//!
//! Repositories hide the transport behind the [`PokemonSource`] trait so
//! services can be exercised against an in-memory source.

mod pokemon;

pub use pokemon::{PokeApiRepository, PokemonSource};
