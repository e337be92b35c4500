//! Unified application error type.
//! Every module (config, api, core, stream, cli) returns AppError so the
//! error handling stays consistent; transport failures keep their own
//! `ApiError` and convert into AppError at the boundary.

use crate::api::ApiError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    // ---------------------------
    // Transport
    // ---------------------------
    #[error(transparent)]
    Api(#[from] ApiError),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid work exception list: {0}")]
    InvalidExceptions(String),

    // ---------------------------
    // Stream errors
    // ---------------------------
    #[error("Stream error: {0}")]
    Stream(String),

    #[error("Rendition '{label}' not found (available: {})", .available.join(", "))]
    RenditionNotFound {
        label: String,
        available: Vec<String>,
    },

    #[error("Player error: {0}")]
    Player(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
