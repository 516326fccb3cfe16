//! Pokémon records as returned by the upstream API, and the colorized
//! responses built from them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::ColorTriple;

/// Upstream Pokémon record. Only the fields the API passes through are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl Pokemon {
    /// Type names in slot order; the first is the primary type.
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&PokemonTypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|slot| slot.slot);
        slots.into_iter().map(|slot| slot.kind.name.clone()).collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: HashMap<String, ArtworkSprites>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

impl Sprites {
    pub fn official_artwork(&self) -> Option<String> {
        self.other
            .get("official-artwork")
            .and_then(|art| art.front_default.clone())
    }
}

/// Primary, secondary and text colors derived from a type list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityColors {
    pub primary: ColorTriple,
    pub secondary: ColorTriple,
    pub text: ColorTriple,
}

/// Ready-to-paste CSS rules for one Pokémon.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CssClasses {
    pub primary_class: String,
    pub secondary_class: String,
    pub gradient_class: String,
}

/// Full colorized Pokémon response, cached per identifier.
#[derive(Debug, Clone, Serialize)]
pub struct PokemonColors {
    pub id: u32,
    pub name: String,
    pub sprite: Option<String>,
    pub official_artwork: Option<String>,
    pub types: Vec<String>,
    pub colors: EntityColors,
    pub css: CssClasses,
    #[serde(rename = "cssVariables")]
    pub css_variables: String,
}

/// Color-only projection of [`PokemonColors`].
#[derive(Debug, Clone, Serialize)]
pub struct PokemonPalette {
    pub name: String,
    pub primary: ColorTriple,
    pub secondary: ColorTriple,
    pub text: ColorTriple,
}

impl From<&PokemonColors> for PokemonPalette {
    fn from(pokemon: &PokemonColors) -> Self {
        Self {
            name: pokemon.name.clone(),
            primary: pokemon.colors.primary.clone(),
            secondary: pokemon.colors.secondary.clone(),
            text: pokemon.colors.text.clone(),
        }
    }
}

/// One entry of the type color listing.
#[derive(Debug, Clone, Serialize)]
pub struct TypeColor {
    #[serde(rename = "type")]
    pub kind: String,
    pub color: ColorTriple,
    #[serde(rename = "textColor")]
    pub text_color: String,
}

/// The full type color listing.
#[derive(Debug, Clone, Serialize)]
pub struct TypeColorList {
    pub types: Vec<TypeColor>,
    pub count: usize,
}
