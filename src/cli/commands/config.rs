use crate::cli::parser::Commands;
use crate::config::{Config, ConfigFormat};
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `config` command. Without flags it prints the path.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Config {
        path,
        print_config,
        check,
    } = cmd
    {
        if *path || !(*print_config || *check) {
            println!("{}", config_path.display());
        }

        if *print_config {
            let cfg = Config::load(config_path)?;
            println!("📄 Current configuration:\n");
            println!("{}", cfg.masked().render(ConfigFormat::from_path(config_path))?);
        }

        if *check {
            let cfg = Config::load(config_path)?;
            success(format!(
                "Configuration OK ({} → {})",
                config_path.display(),
                cfg.api.base_url
            ));
        }
    }

    Ok(())
}
