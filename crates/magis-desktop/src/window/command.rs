//! Commands and the notifications they emit

use serde::{Deserialize, Serialize};

use super::WindowId;

/// User intent applied to one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Cycle closed -> open -> minimized -> open
    Toggle { id: WindowId },
    /// Raise to the top of the stack
    Focus { id: WindowId },
    /// Remove from the stack and taskbar
    Close { id: WindowId },
    /// Hide from the desktop, keep in the taskbar
    Minimize { id: WindowId },
    /// Move the window origin
    SetPosition { id: WindowId, x: f32, y: f32 },
}

impl Command {
    /// The window this command targets
    pub fn target(&self) -> &WindowId {
        match self {
            Command::Toggle { id }
            | Command::Focus { id }
            | Command::Close { id }
            | Command::Minimize { id }
            | Command::SetPosition { id, .. } => id,
        }
    }
}

/// Fire-and-forget cue emitted by a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notification {
    Open,
    Close,
    Minimize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_json_shape() {
        let command: Command =
            serde_json::from_str(r#"{"type":"set_position","id":"media","x":5.0,"y":-3.5}"#).unwrap();

        assert_eq!(
            command,
            Command::SetPosition { id: WindowId::new("media"), x: 5.0, y: -3.5 }
        );
        assert_eq!(command.target().as_str(), "media");
    }

    #[test]
    fn test_command_tags() {
        let json = serde_json::to_string(&Command::Toggle { id: "live".into() }).unwrap();
        assert_eq!(json, r#"{"type":"toggle","id":"live"}"#);
    }
}
