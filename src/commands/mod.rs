//! Application command handlers for wavetrail.
//!
//! # Commands
//! - `live`: Live scrolling waveform view (default)
//! - `config`: Open configuration file in user's preferred editor
//! - `logs`: Display recent log entries

pub mod config;
pub mod live;
pub mod logs;

pub use config::handle_config;
pub use live::{handle_live, LiveOverrides};
pub use logs::handle_logs;
