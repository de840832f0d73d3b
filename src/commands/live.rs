//! Live waveform view.
//!
//! Runs the scrolling waveform in the terminal until the user quits. Supports
//! an external pause toggle via SIGUSR1.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::WavetrailConfig;
use crate::recording::{LiveCommand, LiveSession, WavetrailTui};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveOverrides {
    pub fullscreen: bool,
    pub bar_width: Option<u32>,
    pub no_animate: bool,
}

impl LiveOverrides {
    /// Applies the overrides, re-validating the result.
    ///
    /// # Errors
    /// - If an override produces an invalid configuration
    pub fn apply(self, mut config: WavetrailConfig) -> anyhow::Result<WavetrailConfig> {
        if self.fullscreen {
            config.render.fullscreen = true;
        }
        if let Some(bar_width) = self.bar_width {
            config.render.bar_width = bar_width;
        }
        if self.no_animate {
            config.render.animate_current_pick = false;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Runs the live waveform view.
///
/// # Errors
/// - If the configuration cannot be loaded
/// - If the terminal cannot be initialized or drawn to
/// - If the signal handler cannot be registered
pub fn handle_live(overrides: LiveOverrides) -> anyhow::Result<()> {
    tracing::info!("=== wavetrail live view started ===");

    let config = WavetrailConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {e}");
        anyhow::anyhow!("Configuration error: {e}")
    })?;
    let config = overrides.apply(config)?;

    tracing::info!(
        "Configuration loaded: bar_width={}, unit={}, fullscreen={}, block_size={}, frame_interval={}ms",
        config.render.bar_width,
        config.render.unit,
        config.render.fullscreen,
        config.live.block_size,
        config.live.frame_interval_ms
    );

    let pause_requested = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGUSR1, Arc::clone(&pause_requested))
        .map_err(|e| anyhow::anyhow!("Failed to register signal handler: {e}"))?;

    let frame_interval = Duration::from_millis(config.live.frame_interval_ms);
    let mut session = LiveSession::new(&config);
    let mut tui = WavetrailTui::new()?;

    let mut frame_count = 0u64;
    loop {
        if pause_requested.swap(false, Ordering::Relaxed) {
            tracing::info!("Received SIGUSR1: toggling pause");
            session.toggle_pause();
        }

        match tui.handle_input(frame_interval) {
            Ok(LiveCommand::Continue) => {}
            Ok(LiveCommand::TogglePause) => session.toggle_pause(),
            Ok(LiveCommand::ToggleRecording) => session.toggle_recording(),
            Ok(LiveCommand::ToggleFullscreen) => session.toggle_fullscreen(),
            Ok(LiveCommand::ToggleAnimation) => session.toggle_animation(),
            Ok(LiveCommand::Quit) => break,
            Err(e) => {
                tracing::error!("Input handling error: {}", e);
                return Err(anyhow::anyhow!("Input handling error: {e}"));
            }
        }

        tui.render(&mut session).map_err(|e| {
            tracing::error!("Render failed: {}", e);
            anyhow::anyhow!("Render failed: {e}")
        })?;

        frame_count += 1;
        if frame_count % 300 == 0 {
            tracing::debug!(
                "{} frames: state={}, {} picks, {} visible bars",
                frame_count,
                session.state(),
                session.picks().len(),
                session.visible_bars()
            );
        }
    }

    tui.cleanup()?;
    tracing::info!("Live view closed after {} frames", frame_count);
    Ok(())
}
