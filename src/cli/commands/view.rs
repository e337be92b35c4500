use crate::api::{ApiClient, AttendanceApi};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::approval;
use crate::models::worktime::AttendanceRecord;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_clock;

use std::path::Path;

/// Handle the `view` command: worktime records for one date as a table.
pub fn handle(cmd: &Commands, config_path: &Path) -> AppResult<()> {
    if let Commands::View { date: date_str, email } = cmd {
        //
        // 1. Resolve the date (default = today)
        //
        let d = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };
        let d_str = date::format_date(d);

        //
        // 2. Fetch
        //
        let cfg = Config::load(config_path)?;
        let client = ApiClient::new(&cfg)?;
        let records = client.fetch_worktime(&d_str, email.as_deref())?;

        if records.is_empty() {
            info(format!("No worktime records for {}", d_str));
            return Ok(());
        }

        //
        // 3. Print
        //
        println!("=== {} ===", d_str);
        print!("{}", render_table(&records));
    }

    Ok(())
}

pub fn render_table(records: &[AttendanceRecord]) -> String {
    let mut table = Table::new(vec![
        Column::new("NAME", 12),
        Column::new("TEAM", 14),
        Column::new("EMAIL", 24),
        Column::new("IN", 5),
        Column::new("OUT", 5),
        Column::new("WORKED", 8),
        Column::new("STATUS", 0),
    ]);

    for r in records {
        table.add_row(vec![
            r.username().to_string(),
            r.team_name().to_string(),
            r.email().to_string(),
            format_clock(r.wk_start_time.as_deref()),
            format_clock(r.wk_end_time.as_deref()),
            mins2readable(r.worked_minutes()),
            approval::localize(r.approval()),
        ]);
    }

    table.render()
}
