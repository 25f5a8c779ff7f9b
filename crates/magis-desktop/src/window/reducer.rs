//! Pure state transitions
//!
//! `reduce` computes the next full state from the prior state and one
//! command. It never touches the notification sink; the caller dispatches
//! the returned notification after committing the state.

use log::{debug, warn};

use crate::math::Vec2;
use super::{Command, DesktopState, Notification, WindowPhase};

/// Result of applying one command
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    /// Next full state
    pub state: DesktopState,
    /// Cue to dispatch, if any
    pub notification: Option<Notification>,
}

/// Z-index for the next raised window; pins at `u32::MAX` once exhausted
fn raised_z(state: &DesktopState) -> u32 {
    let max_z = state.max_z();
    if max_z == u32::MAX {
        warn!("z-index pool exhausted; raised windows tie at {}", max_z);
    }
    max_z.saturating_add(1)
}

/// Apply `command` to `state`
///
/// Unknown ids leave the state unchanged and emit nothing.
pub fn reduce(state: &DesktopState, command: &Command) -> Transition {
    let mut next = state.clone();
    let next_z = raised_z(state);

    let Some(target) = next.get_mut(command.target()) else {
        debug!("ignoring {:?}: unknown window", command);
        return Transition { state: next, notification: None };
    };

    let notification = match command {
        Command::Toggle { .. } => match target.phase() {
            WindowPhase::Closed => {
                target.is_open = true;
                target.is_minimized = false;
                target.z_index = next_z;
                Some(Notification::Open)
            }
            WindowPhase::Open => {
                target.is_minimized = true;
                Some(Notification::Minimize)
            }
            WindowPhase::Minimized => {
                target.is_minimized = false;
                target.z_index = next_z;
                Some(Notification::Open)
            }
        },
        Command::Focus { .. } => {
            target.z_index = next_z;
            None
        }
        Command::Close { .. } => {
            target.is_open = false;
            // A closed window is never minimized; the next toggle reopens it visible.
            target.is_minimized = false;
            Some(Notification::Close)
        }
        Command::Minimize { .. } => {
            if target.is_open {
                target.is_minimized = true;
                Some(Notification::Minimize)
            } else {
                None
            }
        }
        Command::SetPosition { x, y, .. } => {
            target.position = Vec2::new(*x, *y);
            None
        }
    };

    debug!(
        "{:?} -> {} phase={:?} z={}",
        command,
        target.id,
        target.phase(),
        target.z_index
    );

    Transition { state: next, notification }
}
