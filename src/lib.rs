//! folio - a terminal portfolio and resume viewer
//!
//! This library exposes modules for use in integration tests and benches.

pub mod aggregate;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod data;
pub mod derivation;
pub mod error;
pub mod logging;
pub mod models;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
