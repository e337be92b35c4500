//! Attendance API transport.
//!
//! `AttendanceApi` is the seam between the HTTP client and everything that
//! renders its results; `ApiClient` is the blocking reqwest implementation.

pub mod client;
pub mod request;

use crate::models::check_type::CheckType;
use crate::models::worktime::AttendanceRecord;
use request::WorktimeUpdate;
use thiserror::Error;

pub use client::ApiClient;

/// Uniform transport failure: connection problems, timeouts, non-2xx
/// statuses and undecodable bodies all end up here. Never retried.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("API {method} request failed: {message}")]
pub struct ApiError {
    pub method: String,
    pub message: String,
}

impl ApiError {
    pub fn new(method: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self {
            method: method.into(),
            message: message.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub trait AttendanceApi {
    /// Records for `date` (`YYYY-MM-DD`, not validated here), optionally
    /// narrowed to one user.
    fn fetch_worktime(&self, date: &str, email: Option<&str>) -> ApiResult<Vec<AttendanceRecord>>;

    /// Check in, check out or go away. `None` means the default user.
    fn submit_attendance_event(
        &self,
        kind: CheckType,
        email: Option<&str>,
    ) -> ApiResult<AttendanceRecord>;

    /// Partial update; returns the raw response body.
    fn update_worktime(&self, update: &WorktimeUpdate) -> ApiResult<String>;

    /// Returns the raw response body.
    fn delete_worktime(&self, email: &str, date: &str) -> ApiResult<String>;
}
