//! Compile-time dependency injection macros for Palettedex.
//!
//! - `#[derive(Context)]` makes every field of the application context
//!   extractable by type.
//! - `#[derive(FromContext)]` builds a service by extracting each of its
//!   fields from the context.
//!
//! Generated code refers to `crate::FromRef`, which the consuming crate
//! re-exports at its root.

use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Field, Fields};

mod context;
mod from_context;

/// Derive `FromRef<Self>` for the type of every field.
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub config: Arc<Config>,
///     pub pokemon_cache: PokemonCache,
/// }
///
/// // impl FromRef<Context> for Arc<Config> { ... }
/// // impl FromRef<Context> for PokemonCache { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Derive `FromRef<Context>` by resolving each field from the context.
///
/// The context type defaults to `Context` and can be overridden:
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// #[from_context(Context = "TestContext")]
/// pub struct ColorService {
///     cache: TypesCache,
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}

/// Named fields of a struct, or a spanned error naming the derive.
pub(crate) fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            _ => Err(syn::Error::new_spanned(
                input,
                format!("{} can only be derived for structs with named fields", derive),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{} can only be derived for structs", derive),
        )),
    }
}
