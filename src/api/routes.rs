//! Route handlers for the `/api` surface.

use axum::extract::{Path, State};
use axum::http::header::{self, HeaderName};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::cache::CacheStatus;
use crate::context::Context;
use crate::di::FromRef;
use crate::error::AppError;
use crate::models::PokemonPalette;
use crate::services::{ColorService, PokemonService};

/// Reports whether a response was served from the in-memory cache.
pub const X_CACHE: &str = "x-cache";

fn cache_control(max_age_secs: u64) -> String {
    format!("public, max-age={}", max_age_secs)
}

/// Wraps a JSON body with `Cache-Control` and `X-Cache` headers.
fn cached_json<T: serde::Serialize>(body: T, max_age_secs: u64, status: CacheStatus) -> Response {
    (
        [
            (header::CACHE_CONTROL, cache_control(max_age_secs)),
            (HeaderName::from_static(X_CACHE), status.as_str().to_string()),
        ],
        Json(body),
    )
        .into_response()
}

/// GET /api/health
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /api/colors
pub async fn list_colors(State(ctx): State<Context>) -> Response {
    let service = ColorService::from_ref(&ctx);
    let (list, status) = service.list_types();
    cached_json(list, service.max_age_secs(), status)
}

/// GET /api/colors/:type
pub async fn get_type_color(
    State(ctx): State<Context>,
    Path(name): Path<String>,
) -> Result<Response, AppError> {
    let service = ColorService::from_ref(&ctx);
    let color = service.get_type(&name)?;

    Ok((
        [(header::CACHE_CONTROL, cache_control(service.max_age_secs()))],
        Json(color),
    )
        .into_response())
}

/// GET /api/pokemon/:id
pub async fn get_pokemon(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let service = PokemonService::from_ref(&ctx);
    let (pokemon, status) = service.get_colors(&id).await?;
    Ok(cached_json(pokemon, service.max_age_secs(), status))
}

/// GET /api/pokemon/:id/colors
pub async fn get_pokemon_palette(
    State(ctx): State<Context>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let service = PokemonService::from_ref(&ctx);
    let (pokemon, status) = service.get_colors(&id).await?;
    Ok(cached_json(
        PokemonPalette::from(&pokemon),
        service.max_age_secs(),
        status,
    ))
}
