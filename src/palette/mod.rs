//! Type-based palette derivation and CSS generation.

mod css;
mod resolver;

pub use css::{css_classes, css_variables, slugify};
pub use resolver::{
    complement, darken, resolve, resolve_primary, resolve_secondary, SecondaryPolicy,
    COMPLEMENT_FALLBACK_BASE,
};
