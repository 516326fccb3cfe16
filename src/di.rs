//! Dependency injection infrastructure.
//!
//! Services are assembled from the application [`Context`](crate::context::Context)
//! at compile time:
//!
//! - `FromRef<T>`: extract a value from a reference to `T`
//! - `#[derive(Context)]`: makes each field of the context extractable
//! - `#[derive(FromContext)]`: builds a struct by extracting each of its fields
//!
//! # Example
//!
//! ```ignore
//! #[derive(FromContext, Clone)]
//! pub struct PokemonService {
//!     source: AppPokemonSource, // Context::pokemon_source
//!     cache: PokemonCache,      // Context::pokemon_cache
//! }
//!
//! let service = PokemonService::from_ref(&ctx);
//! ```
//!
//! Resolution is by field *type*, so each context field needs a distinct type.

/// Trait for extracting a value from a reference to another type.
pub trait FromRef<T> {
    fn from_ref(input: &T) -> Self;
}

/// Any Clone type can be extracted from itself.
impl<T: Clone> FromRef<T> for T {
    fn from_ref(input: &T) -> Self {
        input.clone()
    }
}

pub use di_macros::{Context, FromContext};
