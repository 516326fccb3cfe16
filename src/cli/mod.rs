//! CLI module for Palettedex.
//!
//! Subcommands:
//! - `serve`: Run the HTTP API
//! - `types`: Print the type color table
//! - `colors`: Fetch one Pokémon and print its palette

mod colors;
mod serve;
mod types;

use clap::{Parser, Subcommand};

/// Palettedex - type-derived Pokémon color palettes
#[derive(Parser)]
#[command(name = "palettedex")]
#[command(about = "Type-derived color palettes for Pokémon - HTTP API and CLI")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve {
        /// Host address to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print all type colors as JSON
    Types,

    /// Fetch a Pokémon and print its colors as JSON
    Colors {
        /// Pokémon id or name
        id: String,

        /// Print the full response including CSS snippets
        #[arg(long)]
        css: bool,
    },
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Serve { ref host, port } => self.run_serve(host.clone(), port).await,
            Command::Types => self.run_types(),
            Command::Colors { ref id, css } => self.run_colors(id, css).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let app = App::try_parse_from(["palettedex", "serve", "--port", "8080"]).unwrap();
        assert!(matches!(
            app.command,
            Command::Serve {
                host: None,
                port: Some(8080)
            }
        ));
    }

    #[test]
    fn test_parse_colors_with_global_verbose() {
        let app = App::try_parse_from(["palettedex", "colors", "pikachu", "-v"]).unwrap();
        assert!(app.verbose);
        assert!(matches!(app.command, Command::Colors { ref id, css: false } if id == "pikachu"));
    }
}
