use crate::api::{ApiClient, AttendanceApi};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};
use std::path::Path;

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Handle the `delete` command.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Delete {
        date: date_str,
        email,
        yes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;
        let d_str = date::format_date(d);

        let cfg = Config::load(config_path)?;

        let prompt = format!(
            "Delete the worktime of {} for {}? This action is irreversible.",
            email, d_str
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let client = ApiClient::new(&cfg)?;
        let response = client.delete_worktime(email, &d_str)?;

        success(format!("Worktime of {} for {} has been deleted.", email, d_str));
        if !response.trim().is_empty() {
            info(response.trim());
        }
    }

    Ok(())
}
