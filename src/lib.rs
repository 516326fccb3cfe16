//! Palettedex - type-derived Pokémon color palettes
//!
//! Resolves primary, secondary and text colors from a Pokémon's types and
//! serves them over HTTP with a short-lived in-memory cache.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod models;
pub mod palette;
pub mod rate_limit;
pub mod repositories;
pub mod services;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
