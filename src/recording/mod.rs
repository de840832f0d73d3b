//! Live recording view for wavetrail.
//!
//! Hosts the waveform renderer in a terminal: session state, a synthetic
//! signal, and user interaction handling.

pub mod session;
pub mod source;
pub mod ui;

pub use session::LiveSession;
pub use source::SignalSource;
pub use ui::{LiveCommand, WavetrailTui};
