use crate::cli::parser::Commands;
use crate::config::{Config, StreamConfig};
use crate::errors::{AppError, AppResult};
use crate::stream::{PlayerLauncher, StreamResolver, VariantSelector, channel_from_input};
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};
use std::path::Path;
use tracing::debug;

/// Handle the `stream` command.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Stream {
        channel,
        quality,
        list,
        print_url,
    } = cmd
    {
        let cfg = load_stream_config(config_path)?;
        let channel = channel_from_input(channel.as_deref(), &cfg.default_channel);
        let quality = quality.clone().unwrap_or_else(|| cfg.quality.clone());

        let resolver = StreamResolver::new(cfg)?;
        let renditions = resolver.renditions(&channel)?;

        if *list {
            let mut table = Table::new(vec![Column::new("LABEL", 10), Column::new("URL", 0)]);
            for r in &renditions {
                table.add_row(vec![r.label.clone(), r.url.clone()]);
            }
            print!("{}", table.render());
            return Ok(());
        }

        let picked = VariantSelector::select(&renditions, &quality)?;

        if *print_url {
            println!("{}", picked.url);
            return Ok(());
        }

        PlayerLauncher::new(&resolver.config().player).launch(&picked.url)?;
        success(format!("Opened {} ({})", channel, picked.label));
    }

    Ok(())
}

/// The stream section is optional, and so is the whole file for this
/// command: a missing file means defaults.
fn load_stream_config(config_path: &Path) -> AppResult<StreamConfig> {
    match Config::load(config_path) {
        Ok(cfg) => Ok(cfg.stream),
        Err(AppError::ConfigNotFound(p)) => {
            debug!(path = %p.display(), "no configuration file, using stream defaults");
            Ok(StreamConfig::default())
        }
        Err(e) => Err(e),
    }
}
