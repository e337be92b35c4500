//! Outgoing request shapes for the attendance API.

use crate::models::check_type::CheckType;
use serde::Serialize;
use serde_json::Value;

/// Logical operations exposed by the attendance service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchWorktime,
    SubmitAttendanceEvent,
    UpdateWorktime,
    DeleteWorktime,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckRequest<'a> {
    pub check_type: CheckType,
    pub email: &'a str,
}

/// Partial update of one day's worktime. Unset or empty optional fields
/// are left out of the payload so the server keeps its current values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorktimeUpdate {
    /// Empty means "the configured default user"
    pub email: String,
    pub wk_date: String,
    #[serde(skip_serializing_if = "is_blank")]
    pub wk_start_time: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub wk_end_time: Option<String>,
    #[serde(skip_serializing_if = "is_blank")]
    pub wk_memo: Option<String>,
    #[serde(skip_serializing_if = "is_empty_list")]
    pub work_except: Option<Vec<Value>>,
}

impl WorktimeUpdate {
    pub fn new(email: impl Into<String>, wk_date: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            wk_date: wk_date.into(),
            ..Default::default()
        }
    }

    pub fn start_time(mut self, t: impl Into<String>) -> Self {
        self.wk_start_time = Some(t.into());
        self
    }

    pub fn end_time(mut self, t: impl Into<String>) -> Self {
        self.wk_end_time = Some(t.into());
        self
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.wk_memo = Some(memo.into());
        self
    }

    pub fn exceptions(mut self, list: Vec<Value>) -> Self {
        self.work_except = Some(list);
        self
    }
}

fn is_blank(v: &Option<String>) -> bool {
    v.as_deref().is_none_or(|s| s.is_empty())
}

fn is_empty_list(v: &Option<Vec<Value>>) -> bool {
    v.as_ref().is_none_or(|l| l.is_empty())
}
