use crate::api::{ApiClient, AttendanceApi};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

/// Handle the `check` command: submit one attendance event.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Check { kind, email } = cmd {
        let cfg = Config::load(config_path)?;
        let client = ApiClient::new(&cfg)?;

        let record = client.submit_attendance_event(*kind, email.as_deref())?;

        success(format!(
            "{} ({}) - {} completed",
            record.username(),
            record.team_name(),
            kind.label()
        ));
    }

    Ok(())
}
