//! HTTP API exposing type colors and Pokémon palettes.
//!
//! Routes:
//! - `GET /api/health`
//! - `GET /api/colors` - all type colors
//! - `GET /api/colors/:type` - one type's colors
//! - `GET /api/pokemon/:id` - colorized Pokémon with CSS snippets
//! - `GET /api/pokemon/:id/colors` - colors only

mod middleware;
mod routes;

use axum::routing::get;
use axum::Router;

use crate::context::Context;

pub use middleware::{cors_layer, X_RATELIMIT_LIMIT, X_RATELIMIT_REMAINING};
pub use routes::X_CACHE;

/// Build the API router over a shared context.
pub fn router(ctx: Context) -> Router {
    let limiter = ctx.rate_limiter.clone();

    Router::new()
        .route("/api/health", get(routes::health))
        .route("/api/colors", get(routes::list_colors))
        .route("/api/colors/:type", get(routes::get_type_color))
        .route("/api/pokemon/:id", get(routes::get_pokemon))
        .route("/api/pokemon/:id/colors", get(routes::get_pokemon_palette))
        .layer(axum::middleware::from_fn_with_state(
            limiter,
            middleware::rate_limit_middleware,
        ))
        .layer(cors_layer())
        .with_state(ctx)
}
