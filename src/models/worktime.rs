use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::approval::DEFAULT_APPROVAL;

/// One user's worktime state for one date, as returned by the attendance API.
/// Every field is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub wk_start_time: Option<String>, // ISO-8601
    #[serde(default)]
    pub wk_end_time: Option<String>, // ISO-8601
    #[serde(default, deserialize_with = "de_minutes")]
    pub wk_time_today: Option<i64>,
    #[serde(default, deserialize_with = "de_minutes")]
    pub wk_time: Option<i64>,
    #[serde(default)]
    pub wk_approved: Option<String>,
}

/// Body of the worktime listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorktimeList {
    #[serde(default)]
    pub results: Vec<AttendanceRecord>,
}

impl AttendanceRecord {
    pub fn username(&self) -> &str {
        non_blank(&self.username).unwrap_or("Unknown")
    }

    pub fn team_name(&self) -> &str {
        non_blank(&self.team_name).unwrap_or("Unknown Team")
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Minutes worked: today's counter first, then the generic one.
    /// Negative values count as zero.
    pub fn worked_minutes(&self) -> i64 {
        self.wk_time_today.or(self.wk_time).unwrap_or(0).max(0)
    }

    pub fn approval(&self) -> &str {
        self.wk_approved.as_deref().unwrap_or(DEFAULT_APPROVAL)
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}

/// Minutes arrive as integers, floats or numeric strings depending on the
/// endpoint; anything else is treated as absent.
fn de_minutes<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    })
}
