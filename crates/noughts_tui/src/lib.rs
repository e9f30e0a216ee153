//! Terminal front end for noughts.
//!
//! - **play**: interactive ratatui board driven by keyboard and mouse
//! - **replay**: runs a list of clicks and prints the outcome
//!
//! Both front ends drive a [`noughts_core::GameStore`]; this crate only maps
//! input to clicks and renders the state it is notified about.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::App;
pub use config::{BoardConfig, Config, ConfigError, LogConfig};
