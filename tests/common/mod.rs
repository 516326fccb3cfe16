//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use palettedex::config::Config;
use palettedex::context::Context;
use palettedex::error::AppError;
use palettedex::models::Pokemon;
use palettedex::repositories::PokemonSource;

pub const CHARIZARD: &str = r#"{
    "id": 6,
    "name": "charizard",
    "types": [
        {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}},
        {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}}
    ],
    "sprites": {
        "front_default": "https://img/6.png",
        "other": {"official-artwork": {"front_default": "https://img/art/6.png"}}
    }
}"#;

pub const PIKACHU: &str = r#"{
    "id": 25,
    "name": "pikachu",
    "types": [{"slot": 1, "type": {"name": "electric"}}],
    "sprites": {"front_default": "https://img/25.png", "other": {}}
}"#;

pub const MR_MIME: &str = r#"{
    "id": 122,
    "name": "mr-mime",
    "types": [
        {"slot": 1, "type": {"name": "psychic"}},
        {"slot": 2, "type": {"name": "fairy"}}
    ],
    "sprites": {"front_default": null}
}"#;

/// In-memory Pokémon source keyed by lowercase name and id.
pub struct FakeSource {
    pokemon: HashMap<String, &'static str>,
    pub calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        let mut pokemon = HashMap::new();
        for (keys, json) in [
            (["6", "charizard"], CHARIZARD),
            (["25", "pikachu"], PIKACHU),
            (["122", "mr-mime"], MR_MIME),
        ] {
            for key in keys {
                pokemon.insert(key.to_string(), json);
            }
        }
        Self {
            pokemon,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PokemonSource for FakeSource {
    async fn fetch(&self, id_or_name: &str) -> Result<Pokemon, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pokemon.get(id_or_name) {
            Some(json) => serde_json::from_str(json).map_err(|e| AppError::UpstreamDecode(e.to_string())),
            None => Err(AppError::UpstreamStatus {
                status: 404,
                id: id_or_name.to_string(),
            }),
        }
    }
}

pub fn context_with(config: Config) -> (Context, Arc<FakeSource>) {
    let source = Arc::new(FakeSource::new());
    let ctx = Context::with_source(config, source.clone());
    (ctx, source)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn get_from(uri: &str, client: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-forwarded-for", client)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
