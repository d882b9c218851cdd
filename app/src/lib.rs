//! Terminal front-end for a football teams catalog.
//!
//! This crate is the host for `teams-core`: it executes the requests the core
//! builds (reqwest on a current-thread tokio runtime), keeps the list and
//! detail screen state, and exposes both through the `teams` CLI.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod screens;

pub use api::TeamsApi;
pub use config::Config;
pub use error::{AppError, ConfigError};
