//! Domain models for type colors and Pokémon records.

mod category;
mod color;
mod pokemon;

pub use category::{Category, DEFAULT_COLOR, DEFAULT_TEXT_COLOR};
pub use color::{hex_to_rgb, rgb_to_hex, rgb_to_hsl, ColorError, ColorTriple, Hsl, Rgb};
pub use pokemon::{
    ArtworkSprites, CssClasses, EntityColors, NamedResource, Pokemon, PokemonColors,
    PokemonPalette, PokemonTypeSlot, Sprites, TypeColor, TypeColorList,
};
