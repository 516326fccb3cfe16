//! Pokémon types and their fixed color table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Rgb;

/// Background used when the primary type is missing or unknown.
pub const DEFAULT_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Text color used when the primary type is missing or unknown.
pub const DEFAULT_TEXT_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);

/// The closed set of Pokémon types.
///
/// Each type carries a background color and a darker text color that stays
/// readable on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bug,
    Dark,
    Dragon,
    Electric,
    Fairy,
    Fighting,
    Fire,
    Flying,
    Ghost,
    Normal,
    Grass,
    Ground,
    Ice,
    Poison,
    Psychic,
    Rock,
    Steel,
    Water,
}

impl Category {
    /// Returns all types in table order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Bug,
            Category::Dark,
            Category::Dragon,
            Category::Electric,
            Category::Fairy,
            Category::Fighting,
            Category::Fire,
            Category::Flying,
            Category::Ghost,
            Category::Normal,
            Category::Grass,
            Category::Ground,
            Category::Ice,
            Category::Poison,
            Category::Psychic,
            Category::Rock,
            Category::Steel,
            Category::Water,
        ]
    }

    /// Looks up a type by its exact lowercase name, returning `None` for
    /// anything outside the table.
    pub fn lookup(name: &str) -> Option<Category> {
        Category::all().iter().find(|c| c.name() == name).copied()
    }

    /// Lowercase name as used by the upstream API.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Bug => "bug",
            Category::Dark => "dark",
            Category::Dragon => "dragon",
            Category::Electric => "electric",
            Category::Fairy => "fairy",
            Category::Fighting => "fighting",
            Category::Fire => "fire",
            Category::Flying => "flying",
            Category::Ghost => "ghost",
            Category::Normal => "normal",
            Category::Grass => "grass",
            Category::Ground => "ground",
            Category::Ice => "ice",
            Category::Poison => "poison",
            Category::Psychic => "psychic",
            Category::Rock => "rock",
            Category::Steel => "steel",
            Category::Water => "water",
        }
    }

    /// Background color for this type.
    pub fn color(&self) -> Rgb {
        match self {
            Category::Bug => Rgb::new(0xA7, 0xB7, 0x23),
            Category::Dark => Rgb::new(0x75, 0x57, 0x4C),
            Category::Dragon => Rgb::new(0x70, 0x37, 0xFF),
            Category::Electric => Rgb::new(0xF9, 0xCF, 0x30),
            Category::Fairy => Rgb::new(0xE6, 0x9E, 0xAC),
            Category::Fighting => Rgb::new(0xC1, 0x22, 0x39),
            Category::Fire => Rgb::new(0xF5, 0x7D, 0x31),
            Category::Flying => Rgb::new(0xA8, 0x91, 0xEC),
            Category::Ghost => Rgb::new(0x70, 0x55, 0x9B),
            Category::Normal => Rgb::new(0xAA, 0xA6, 0x7F),
            Category::Grass => Rgb::new(0x74, 0xCB, 0x48),
            Category::Ground => Rgb::new(0xDE, 0xC1, 0x6B),
            Category::Ice => Rgb::new(0x9A, 0xD6, 0xDF),
            Category::Poison => Rgb::new(0xA4, 0x3E, 0x9E),
            Category::Psychic => Rgb::new(0xFB, 0x55, 0x84),
            Category::Rock => Rgb::new(0xB6, 0x9E, 0x31),
            Category::Steel => Rgb::new(0xB7, 0xB9, 0xD0),
            Category::Water => Rgb::new(0x64, 0x93, 0xEB),
        }
    }

    /// Readable text color for content drawn on [`Category::color`].
    pub fn text_color(&self) -> Rgb {
        match self {
            Category::Bug => Rgb::new(0x3B, 0x40, 0x00),
            Category::Dark => Rgb::new(0x2D, 0x1E, 0x17),
            Category::Dragon => Rgb::new(0x32, 0x17, 0x60),
            Category::Electric => Rgb::new(0x70, 0x5A, 0x00),
            Category::Fairy => Rgb::new(0x5A, 0x30, 0x36),
            Category::Fighting => Rgb::new(0x56, 0x0D, 0x16),
            Category::Fire => Rgb::new(0x70, 0x2E, 0x08),
            Category::Flying => Rgb::new(0x3E, 0x33, 0x63),
            Category::Ghost => Rgb::new(0x33, 0x26, 0x4A),
            Category::Normal => Rgb::new(0x4A, 0x49, 0x30),
            Category::Grass => Rgb::new(0x2E, 0x53, 0x10),
            Category::Ground => Rgb::new(0x6B, 0x58, 0x19),
            Category::Ice => Rgb::new(0x29, 0x68, 0x73),
            Category::Poison => Rgb::new(0x4A, 0x17, 0x48),
            Category::Psychic => Rgb::new(0x7F, 0x12, 0x37),
            Category::Rock => Rgb::new(0x5E, 0x50, 0x00),
            Category::Steel => Rgb::new(0x4A, 0x4B, 0x5E),
            Category::Water => Rgb::new(0x1C, 0x39, 0x78),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_eighteen_types() {
        assert_eq!(Category::all().len(), 18);
    }

    #[test]
    fn test_names_round_trip() {
        for category in Category::all() {
            assert_eq!(Category::lookup(category.name()), Some(*category));
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(Category::lookup("fire"), Some(Category::Fire));
        assert_eq!(Category::lookup("Fire"), None);
        assert_eq!(Category::lookup("WATER"), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Fire".parse::<Category>(), Ok(Category::Fire));
        assert_eq!("WATER".parse::<Category>(), Ok(Category::Water));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(Category::lookup("shadow"), None);
        assert_eq!(Category::lookup(""), None);
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(Category::Fire.color().to_hex(), "#F57D31");
        assert_eq!(Category::Electric.color().to_hex(), "#F9CF30");
        assert_eq!(Category::Water.text_color().to_hex(), "#1C3978");
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Category::Psychic).unwrap();
        assert_eq!(json, "\"psychic\"");
    }
}
