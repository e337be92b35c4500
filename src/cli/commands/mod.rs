pub mod check;
pub mod config;
pub mod delete;
pub mod query;
pub mod stream;
pub mod update;
pub mod view;
