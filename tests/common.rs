#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::MockServer;

pub fn wsf() -> Command {
    let mut cmd = cargo_bin_cmd!("wsflow");
    cmd.env_remove("WSFLOW_CONFIG")
        .env_remove("WSFLOW_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Runtime that owns the mock server's async API. The blocking client
/// under test must be driven from the test thread, outside this runtime.
pub fn mock_server() -> (Runtime, MockServer) {
    let rt = Runtime::new().expect("tokio runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

pub const DEFAULT_EMAIL: &str = "me@example.com";

/// Write a config.json pointing the attendance API (and, when given, the
/// stream endpoints) at `base_url`.
pub fn write_config(dir: &TempDir, base_url: &str, api_key: &str, api_secret: &str) -> PathBuf {
    write_config_with(dir, base_url, api_key, api_secret, 5.0, None)
}

pub fn write_config_with(
    dir: &TempDir,
    base_url: &str,
    api_key: &str,
    api_secret: &str,
    timeout: f64,
    stream_base: Option<&str>,
) -> PathBuf {
    let mut cfg = serde_json::json!({
        "api": { "base_url": base_url, "timeout": timeout },
        "auth": { "api_key": api_key, "api_secret": api_secret, "user_agent": "wsflow-tests/1.0" },
        "default_user": { "email": DEFAULT_EMAIL },
        "endpoints": {
            "worktime_get": "/worktime",
            "worktime_post": "/worktime",
            "worktime_update": "/worktime",
            "worktime_delete": "/worktime/{email}"
        }
    });

    if let Some(base) = stream_base {
        cfg["stream"] = serde_json::json!({
            "default_channel": "somechan",
            "quality": "720p60",
            "client_id": "test-client",
            "gql_url": format!("{base}/gql"),
            "usher_url": base,
            "timeout": 5,
            "player": { "kind": "command", "program": "true" }
        });
    }

    let path = dir.path().join("config.json");
    fs::write(&path, serde_json::to_string_pretty(&cfg).expect("config json")).expect("write config");
    path
}

pub fn load_config(path: &PathBuf) -> wsflow::config::Config {
    wsflow::config::Config::load(path).expect("valid test config")
}

/// Parse the launcher output of a `query` run.
pub fn items(stdout: &[u8]) -> Vec<serde_json::Value> {
    let doc: serde_json::Value = serde_json::from_slice(stdout).expect("stdout is JSON");
    doc["items"].as_array().expect("items array").clone()
}
