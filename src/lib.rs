//! wavetrail: a live, left-scrolling audio waveform.
//!
//! The [`waveform`] module holds the renderer and its drawing collaborators;
//! everything else hosts it in a terminal.

pub mod app;
pub mod commands;
pub mod config;
pub mod logging;
pub mod recording;
pub mod waveform;
