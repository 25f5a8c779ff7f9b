//! Sound cue descriptors for window lifecycle notifications

use serde::Serialize;

use crate::window::Notification;

/// Oscillator shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Triangle,
    Square,
}

/// A short synthesized sweep: oscillator, exponential frequency ramp and
/// exponential gain decay to silence
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CueSpec {
    pub waveform: Waveform,
    pub start_hz: f32,
    pub end_hz: f32,
    pub gain: f32,
    pub duration_secs: f32,
}

impl CueSpec {
    /// Rising sine sweep
    pub const OPEN: CueSpec = CueSpec {
        waveform: Waveform::Sine,
        start_hz: 440.0,
        end_hz: 880.0,
        gain: 0.05,
        duration_secs: 0.15,
    };

    /// Falling triangle power-down
    pub const CLOSE: CueSpec = CueSpec {
        waveform: Waveform::Triangle,
        start_hz: 440.0,
        end_hz: 110.0,
        gain: 0.05,
        duration_secs: 0.2,
    };

    /// Short square blip
    pub const MINIMIZE: CueSpec = CueSpec {
        waveform: Waveform::Square,
        start_hz: 880.0,
        end_hz: 440.0,
        gain: 0.02,
        duration_secs: 0.1,
    };
}

impl Notification {
    /// Sound cue for this notification
    pub fn cue(self) -> CueSpec {
        match self {
            Notification::Open => CueSpec::OPEN,
            Notification::Close => CueSpec::CLOSE,
            Notification::Minimize => CueSpec::MINIMIZE,
        }
    }
}
