use crate::models::approval;
use crate::models::worktime::AttendanceRecord;
use crate::utils::formatting::mins2readable;
use crate::utils::time::format_clock;

/// Title/subtitle pair for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPair {
    pub title: String,
    pub subtitle: String,
}

/// Pure record → text mapping; no I/O.
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn format(record: &AttendanceRecord) -> DisplayPair {
        let start = format_clock(record.wk_start_time.as_deref());
        let end = format_clock(record.wk_end_time.as_deref());
        let worked = mins2readable(record.worked_minutes());
        let approval = approval::localize(record.approval());

        DisplayPair {
            title: format!("{} ({})", record.username(), record.team_name()),
            subtitle: format!(
                "출근: {} | 퇴근: {} | 근무: {} | {}",
                start, end, worked, approval
            ),
        }
    }
}
