use super::request::{CheckRequest, Operation, WorktimeUpdate};
use super::{ApiError, ApiResult, AttendanceApi};
use crate::config::{Config, Endpoints};
use crate::errors::{AppError, AppResult};
use crate::models::check_type::CheckType;
use crate::models::worktime::{AttendanceRecord, WorktimeList};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error as _;
use tracing::{debug, info};

/// Blocking client for the attendance API. Holds no state besides what
/// the configuration provides; one call, one HTTP request.
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
    default_email: String,
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if !cfg.auth.api_secret.is_empty() {
            let mut secret = HeaderValue::from_str(&cfg.auth.api_secret).map_err(|_| {
                AppError::Config("auth.api_secret is not a valid header value".into())
            })?;
            secret.set_sensitive(true);
            headers.insert(AUTHORIZATION, secret);
        }

        let http = Client::builder()
            .user_agent(cfg.auth.user_agent.as_str())
            .default_headers(headers)
            .timeout(cfg.timeout()?)
            .build()
            .map_err(|e| AppError::Other(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            http,
            base_url: cfg.api.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.auth.api_key.clone(),
            default_email: cfg.default_user.email.clone(),
            endpoints: cfg.endpoints.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}/{}", self.base_url, endpoint)
        }
    }

    /// Query parameters plus the API key, when one is configured.
    fn keyed_query<'a>(&'a self, mut params: Vec<(&'a str, String)>) -> Vec<(&'a str, String)> {
        if !self.api_key.is_empty() {
            params.push(("key", self.api_key.clone()));
        }
        params
    }

    /// JSON body plus the API key, when one is configured.
    fn keyed_body<B: Serialize>(&self, method: &str, body: &B) -> ApiResult<Value> {
        let mut value = serde_json::to_value(body).map_err(|e| ApiError::new(method, e))?;
        if let Value::Object(map) = &mut value
            && !self.api_key.is_empty()
        {
            map.insert("key".into(), Value::String(self.api_key.clone()));
        }
        Ok(value)
    }

    fn send(&self, method: &str, request: RequestBuilder) -> ApiResult<Response> {
        let response = request
            .send()
            .map_err(|e| ApiError::new(method, describe(e)))?;

        response
            .error_for_status()
            .map_err(|e| ApiError::new(method, describe(e)))
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: Vec<(&str, String)>) -> ApiResult<T> {
        let url = self.url(endpoint);
        debug!(%url, "GET");
        let request = self.http.get(&url).query(&self.keyed_query(params));
        self.send("GET", request)?
            .json::<T>()
            .map_err(|e| ApiError::new("GET", describe(e)))
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(&self, endpoint: &str, body: &B) -> ApiResult<T> {
        let url = self.url(endpoint);
        debug!(%url, "POST");
        let request = self.http.post(&url).json(&self.keyed_body("POST", body)?);
        self.send("POST", request)?
            .json::<T>()
            .map_err(|e| ApiError::new("POST", describe(e)))
    }

    fn put_text<B: Serialize>(&self, endpoint: &str, body: &B) -> ApiResult<String> {
        let url = self.url(endpoint);
        debug!(%url, "PUT");
        let request = self.http.put(&url).json(&self.keyed_body("PUT", body)?);
        self.send("PUT", request)?
            .text()
            .map_err(|e| ApiError::new("PUT", describe(e)))
    }

    fn delete_text(&self, endpoint: &str, params: Vec<(&str, String)>) -> ApiResult<String> {
        let url = self.url(endpoint);
        debug!(%url, "DELETE");
        let request = self.http.delete(&url).query(&self.keyed_query(params));
        self.send("DELETE", request)?
            .text()
            .map_err(|e| ApiError::new("DELETE", describe(e)))
    }

    /// Delete endpoint with the email filled in as one path segment.
    fn delete_path(&self, email: &str) -> String {
        self.endpoints
            .path(Operation::DeleteWorktime)
            .replace("{email}", &urlencoding::encode(email))
    }

    fn email_or_default<'a>(&'a self, email: Option<&'a str>) -> &'a str {
        email
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(&self.default_email)
    }
}

impl AttendanceApi for ApiClient {
    fn fetch_worktime(&self, date: &str, email: Option<&str>) -> ApiResult<Vec<AttendanceRecord>> {
        let mut params = vec![("date", date.to_string())];
        if let Some(e) = email.filter(|e| !e.is_empty()) {
            params.push(("email", e.to_string()));
        }

        let list: WorktimeList =
            self.get_json(self.endpoints.path(Operation::FetchWorktime), params)?;
        info!(date, records = list.results.len(), "worktime fetched");
        Ok(list.results)
    }

    fn submit_attendance_event(
        &self,
        kind: CheckType,
        email: Option<&str>,
    ) -> ApiResult<AttendanceRecord> {
        let body = CheckRequest {
            check_type: kind,
            email: self.email_or_default(email),
        };

        let record: AttendanceRecord =
            self.post_json(self.endpoints.path(Operation::SubmitAttendanceEvent), &body)?;
        info!(check_type = kind.as_str(), email = body.email, "attendance event submitted");
        Ok(record)
    }

    fn update_worktime(&self, update: &WorktimeUpdate) -> ApiResult<String> {
        let mut update = update.clone();
        if update.email.trim().is_empty() {
            update.email = self.default_email.clone();
        }

        let text = self.put_text(self.endpoints.path(Operation::UpdateWorktime), &update)?;
        info!(email = %update.email, date = %update.wk_date, "worktime updated");
        Ok(text)
    }

    fn delete_worktime(&self, email: &str, date: &str) -> ApiResult<String> {
        let endpoint = self.delete_path(email);
        let text = self.delete_text(&endpoint, vec![("wk_date", date.to_string())])?;
        info!(email, date, "worktime deleted");
        Ok(text)
    }
}

/// reqwest's Display stops at the outermost layer; include the causes so
/// the message says *why*. The URL is stripped since it carries the key.
fn describe(err: reqwest::Error) -> String {
    let err = err.without_url();
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }
    msg
}
