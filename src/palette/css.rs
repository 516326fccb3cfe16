//! CSS snippets for a resolved palette.

use crate::models::{CssClasses, EntityColors};

/// Turns a Pokémon name into a CSS identifier fragment: runs of dashes and
/// whitespace collapse to a single dash and the result is lowercased.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_separator = false;

    for ch in name.chars() {
        if ch == '-' || ch.is_whitespace() {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        } else {
            slug.extend(ch.to_lowercase());
            in_separator = false;
        }
    }

    slug
}

/// Class rules for the primary, secondary and gradient swatches.
pub fn css_classes(slug: &str, colors: &EntityColors) -> CssClasses {
    let primary = &colors.primary.hex;
    let secondary = &colors.secondary.hex;
    let text = &colors.text.hex;

    CssClasses {
        primary_class: format!(
            ".pokemon-{}-primary {{ background-color: {}; color: {}; }}",
            slug, primary, text
        ),
        secondary_class: format!(
            ".pokemon-{}-secondary {{ background-color: {}; }}",
            slug, secondary
        ),
        gradient_class: format!(
            ".pokemon-{}-gradient {{ background: linear-gradient(to right, {}, {}); }}",
            slug, primary, secondary
        ),
    }
}

/// Custom property block, one declaration per line.
pub fn css_variables(slug: &str, colors: &EntityColors) -> String {
    format!(
        "\n--pokemon-{slug}-primary: {};\n--pokemon-{slug}-secondary: {};\n--pokemon-{slug}-text: {};",
        colors.primary.hex,
        colors.secondary.hex,
        colors.text.hex,
        slug = slug,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{resolve, SecondaryPolicy};

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("mr-mime"), "mr-mime");
        assert_eq!(slugify("Mr  Mime"), "mr-mime");
        assert_eq!(slugify("tapu--koko"), "tapu-koko");
        assert_eq!(slugify("Pikachu"), "pikachu");
    }

    #[test]
    fn test_css_classes() {
        let colors = resolve(&["fire", "flying"], SecondaryPolicy::Complement);
        let css = css_classes("charizard", &colors);

        assert_eq!(
            css.primary_class,
            ".pokemon-charizard-primary { background-color: #F57D31; color: #702E08; }"
        );
        assert_eq!(
            css.secondary_class,
            ".pokemon-charizard-secondary { background-color: #A891EC; }"
        );
        assert_eq!(
            css.gradient_class,
            ".pokemon-charizard-gradient { background: linear-gradient(to right, #F57D31, #A891EC); }"
        );
    }

    #[test]
    fn test_css_variables() {
        let colors = resolve(&["fire"], SecondaryPolicy::Complement);
        let vars = css_variables("charmander", &colors);

        assert_eq!(
            vars,
            "\n--pokemon-charmander-primary: #F57D31;\n--pokemon-charmander-secondary: #32AAF6;\n--pokemon-charmander-text: #702E08;"
        );
    }
}
