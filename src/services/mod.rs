//! Business logic services for type colors and Pokémon palettes.
//!
//! Services orchestrate repositories and caches, using the `FromContext`
//! derive macro for dependency injection.

mod colors;
mod pokemon;

pub use colors::ColorService;
pub use pokemon::{normalize_id, PokemonService};
