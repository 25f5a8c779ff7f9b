//! Notification sinks
//!
//! The window manager emits open/close/minimize cues. What a sink does with
//! them (audio, logging, forwarding to a host) is its own concern; a sink
//! reports failure through [`NotifyError`] and the manager swallows it.

mod cue;

use log::info;

pub use cue::{CueSpec, Waveform};

/// Failure reported by a notification sink
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NotifyError {
    /// The output device is missing or blocked
    #[error("output unavailable: {0}")]
    Unavailable(String),

    /// Playback or forwarding failed
    #[error("notification failed: {0}")]
    Failed(String),
}

/// Receiver for window lifecycle cues
pub trait NotificationSink {
    /// A window was opened or restored
    fn notify_open(&mut self) -> Result<(), NotifyError>;

    /// A window was closed
    fn notify_close(&mut self) -> Result<(), NotifyError>;

    /// A window was minimized
    fn notify_minimize(&mut self) -> Result<(), NotifyError>;
}

/// Sink that drops every cue
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify_open(&mut self) -> Result<(), NotifyError> {
        Ok(())
    }

    fn notify_close(&mut self) -> Result<(), NotifyError> {
        Ok(())
    }

    fn notify_minimize(&mut self) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Sink that logs each cue with its synth parameters
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    fn emit(name: &str, cue: CueSpec) -> Result<(), NotifyError> {
        info!(
            "cue {}: {:?} {}Hz -> {}Hz over {}s at gain {}",
            name, cue.waveform, cue.start_hz, cue.end_hz, cue.duration_secs, cue.gain
        );
        Ok(())
    }
}

impl NotificationSink for LogSink {
    fn notify_open(&mut self) -> Result<(), NotifyError> {
        Self::emit("open", CueSpec::OPEN)
    }

    fn notify_close(&mut self) -> Result<(), NotifyError> {
        Self::emit("close", CueSpec::CLOSE)
    }

    fn notify_minimize(&mut self) -> Result<(), NotifyError> {
        Self::emit("minimize", CueSpec::MINIMIZE)
    }
}
