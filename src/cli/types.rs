//! Types command handler.

use color_eyre::Result;

use crate::config::Config;
use crate::context::Context;
use crate::di::FromRef;
use crate::services::ColorService;

use super::App;

impl App {
    /// Print the type color table as JSON.
    pub fn run_types(&self) -> Result<()> {
        let ctx = Context::from_config(Config::load()?)?;
        let (list, _) = ColorService::from_ref(&ctx).list_types();

        println!("{}", serde_json::to_string_pretty(&list)?);
        Ok(())
    }
}
