use crate::api::ApiClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::renderer::{ItemListRenderer, general_error};
use crate::errors::AppResult;
use crate::models::item::ItemList;
use crate::utils::date;
use std::io::{self, Write};
use std::path::Path;
use tracing::error;

/// Handle the `query` command (launcher script filter).
///
/// Always prints one well-formed `{"items": [...]}` document: failures
/// inside a branch become an error item there, anything before that
/// (config, client setup) becomes the generic error item.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Query { query } = cmd {
        let items = render(&query.join(" "), config_path);

        let mut out = io::stdout().lock();
        writeln!(out, "{}", items.to_json()?)?;
    }

    Ok(())
}

pub fn render(query: &str, config_path: &Path) -> ItemList {
    let client = Config::load(config_path).and_then(|cfg| ApiClient::new(&cfg));

    match client {
        Ok(client) => ItemListRenderer::new(&client, date::today()).render(query),
        Err(e) => {
            error!(error = %e, "workflow setup failed");
            general_error(&e)
        }
    }
}
