//! Recording state resolved from the host's flags.

/// What the renderer should do with a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    /// Not recording: all history is discarded and nothing is drawn
    Stopped,
    /// Actively recording: history advances and bars use the main color
    Recording,
    /// Recording but paused: history is frozen and bars use the secondary color
    Paused,
}

impl RecordingState {
    /// Resolves the two host flags with precedence stop > pause > active.
    ///
    /// `is_paused` while not recording is treated as stopped.
    pub fn from_flags(is_recording: bool, is_paused: bool) -> Self {
        match (is_recording, is_paused) {
            (false, _) => Self::Stopped,
            (true, true) => Self::Paused,
            (true, false) => Self::Recording,
        }
    }

    pub fn is_paused(self) -> bool {
        self == Self::Paused
    }
}

impl std::fmt::Display for RecordingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped => write!(f, "stopped"),
            Self::Recording => write!(f, "recording"),
            Self::Paused => write!(f, "paused"),
        }
    }
}
