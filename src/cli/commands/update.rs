use crate::api::request::WorktimeUpdate;
use crate::api::{ApiClient, AttendanceApi};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;
use serde_json::Value;
use std::path::Path;

/// Handle the `update` command: partial edit of one day's worktime.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::Update {
        date: date_str,
        email,
        start,
        end,
        memo,
        exceptions,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let update = build_update(
            email.as_deref().unwrap_or(""),
            &date::format_date(d),
            start.as_deref(),
            end.as_deref(),
            memo.as_deref(),
            exceptions.as_deref(),
        )?;

        let cfg = Config::load(config_path)?;
        let client = ApiClient::new(&cfg)?;
        let response = client.update_worktime(&update)?;

        success(format!("Worktime for {} updated.", update.wk_date));
        if !response.trim().is_empty() {
            info(response.trim());
        }
    }

    Ok(())
}

pub fn build_update(
    email: &str,
    wk_date: &str,
    start: Option<&str>,
    end: Option<&str>,
    memo: Option<&str>,
    exceptions: Option<&str>,
) -> AppResult<WorktimeUpdate> {
    let mut update = WorktimeUpdate::new(email, wk_date);

    if let Some(t) = start {
        update = update.start_time(t);
    }
    if let Some(t) = end {
        update = update.end_time(t);
    }
    if let Some(m) = memo {
        update = update.memo(m);
    }
    if let Some(raw) = exceptions {
        let list: Vec<Value> =
            serde_json::from_str(raw).map_err(|e| AppError::InvalidExceptions(e.to_string()))?;
        update = update.exceptions(list);
    }

    Ok(update)
}
