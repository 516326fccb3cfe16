//! Derives primary, secondary and text colors from a Pokémon's type list.
//!
//! Resolution never fails: unknown or missing types fall back to the
//! defaults in [`crate::models`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Category, EntityColors, Rgb, DEFAULT_COLOR, DEFAULT_TEXT_COLOR};

/// Base for the complement when the primary type has no table entry.
pub const COMPLEMENT_FALLBACK_BASE: Rgb = Rgb::new(0x5A, 0x92, 0xA4);

/// Offset added to each inverted channel to soften the complement.
const COMPLEMENT_SOFTENING: i16 = 40;

/// Per-channel factor for the darkened variant, in percent.
const DARKEN_PERCENT: u16 = 65;

/// How the secondary color is derived when there is no second type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondaryPolicy {
    /// Softened inverse: `clamp(255 - c + 40)` per channel.
    #[default]
    Complement,
    /// Darker shade: `floor(c * 0.65)` per channel.
    Darken,
}

impl SecondaryPolicy {
    /// Applies the policy to a primary color.
    pub fn derive(self, primary: Rgb) -> Rgb {
        match self {
            SecondaryPolicy::Complement => complement(primary),
            SecondaryPolicy::Darken => darken(primary),
        }
    }
}

impl std::fmt::Display for SecondaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecondaryPolicy::Complement => f.write_str("complement"),
            SecondaryPolicy::Darken => f.write_str("darken"),
        }
    }
}

impl FromStr for SecondaryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complement" | "Complement" => Ok(SecondaryPolicy::Complement),
            "darken" | "Darken" => Ok(SecondaryPolicy::Darken),
            _ => Err(format!(
                "Invalid secondary policy '{}'. Valid values: complement, darken",
                s
            )),
        }
    }
}

/// Softened complementary color, clamped to `[0, 255]` on every channel.
pub fn complement(color: Rgb) -> Rgb {
    color.map(|c| (255 - i16::from(c) + COMPLEMENT_SOFTENING).clamp(0, 255) as u8)
}

/// Darker shade of `color`, each channel scaled by 0.65 and floored.
pub fn darken(color: Rgb) -> Rgb {
    color.map(|c| (u16::from(c) * DARKEN_PERCENT / 100) as u8)
}

/// Background and text colors of the primary (first) type.
pub fn resolve_primary<S: AsRef<str>>(categories: &[S]) -> (Rgb, Rgb) {
    match primary_category(categories) {
        Some(category) => (category.color(), category.text_color()),
        None => (DEFAULT_COLOR, DEFAULT_TEXT_COLOR),
    }
}

/// Secondary color: the second type's color when it is known, otherwise
/// derived from the primary type according to `policy`.
pub fn resolve_secondary<S: AsRef<str>>(categories: &[S], policy: SecondaryPolicy) -> Rgb {
    if let Some(second) = categories
        .get(1)
        .and_then(|name| Category::lookup(name.as_ref()))
    {
        return second.color();
    }

    let base = match policy {
        // Unknown primary complements the neutral base, not the white default.
        SecondaryPolicy::Complement => primary_category(categories)
            .map(|c| c.color())
            .unwrap_or(COMPLEMENT_FALLBACK_BASE),
        SecondaryPolicy::Darken => resolve_primary(categories).0,
    };

    policy.derive(base)
}

/// Resolves the full color set for a type list.
pub fn resolve<S: AsRef<str>>(categories: &[S], policy: SecondaryPolicy) -> EntityColors {
    let (primary, text) = resolve_primary(categories);
    let secondary = resolve_secondary(categories, policy);

    EntityColors {
        primary: primary.into(),
        secondary: secondary.into(),
        text: text.into(),
    }
}

fn primary_category<S: AsRef<str>>(categories: &[S]) -> Option<Category> {
    categories
        .first()
        .and_then(|name| Category::lookup(name.as_ref()))
}
