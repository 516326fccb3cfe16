//! Colors command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::models::PokemonPalette;
use crate::services::PokemonService;

use super::App;

impl App {
    /// Fetch one Pokémon and print its palette as JSON.
    pub async fn run_colors(&self, id: &str, css: bool) -> Result<()> {
        let config = Config::load()?;
        tracing::info!("Resolving colors for '{}'", id);

        let ctx = Context::from_config(config)?;
        let (pokemon, _) = PokemonService::from_ref(&ctx).get_colors(id).await?;

        let output = if css {
            serde_json::to_string_pretty(&pokemon)?
        } else {
            serde_json::to_string_pretty(&PokemonPalette::from(&pokemon))?
        };

        println!("{}", output);
        Ok(())
    }
}
