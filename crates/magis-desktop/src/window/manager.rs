//! Window manager: owns the desktop state and dispatches notifications

use log::warn;

use crate::manifest::Manifest;
use crate::notify::NotificationSink;
use super::{reduce, Command, DesktopState, Notification, Transition, WindowRecord};

/// Handle returned by [`WindowManager::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&DesktopState)>;

/// Single source of truth for the desktop's window records
///
/// Every command runs the pure reducer, commits the next state, dispatches
/// the notification to the sink and then informs observers when the state
/// changed. Sink failures are logged and swallowed.
pub struct WindowManager {
    /// Current state
    state: DesktopState,
    /// Notification sink (sound cues)
    sink: Box<dyn NotificationSink>,
    /// Registered observers
    observers: Vec<(SubscriptionId, Observer)>,
    /// Next subscription handle
    next_subscription: u64,
}

impl WindowManager {
    /// Create a manager with the startup state of `manifest`
    pub fn new(manifest: &Manifest, sink: impl NotificationSink + 'static) -> Self {
        Self::from_state(DesktopState::from_manifest(manifest), sink)
    }

    /// Create a manager around an existing state
    pub fn from_state(state: DesktopState, sink: impl NotificationSink + 'static) -> Self {
        Self {
            state,
            sink: Box::new(sink),
            observers: Vec::new(),
            next_subscription: 1,
        }
    }

    /// Replace the notification sink
    pub fn set_sink(&mut self, sink: impl NotificationSink + 'static) {
        self.sink = Box::new(sink);
    }

    /// Current state
    #[inline]
    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    /// Get a record by id
    #[inline]
    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.state.get(id)
    }

    /// Highest z-index, floored at the baseline
    #[inline]
    pub fn max_z(&self) -> u32 {
        self.state.max_z()
    }

    /// Open, minimize or restore a window
    pub fn toggle(&mut self, id: &str) -> Option<Notification> {
        self.dispatch(Command::Toggle { id: id.into() })
    }

    /// Bring a window to the top of the stack
    pub fn focus(&mut self, id: &str) {
        self.dispatch(Command::Focus { id: id.into() });
    }

    /// Close a window
    pub fn close(&mut self, id: &str) -> Option<Notification> {
        self.dispatch(Command::Close { id: id.into() })
    }

    /// Minimize a window (never restores)
    pub fn minimize(&mut self, id: &str) -> Option<Notification> {
        self.dispatch(Command::Minimize { id: id.into() })
    }

    /// Move a window origin
    pub fn set_position(&mut self, id: &str, x: f32, y: f32) {
        self.dispatch(Command::SetPosition { id: id.into(), x, y });
    }

    /// Apply a command and return the notification it emitted
    pub fn dispatch(&mut self, command: Command) -> Option<Notification> {
        let Transition { state, notification } = reduce(&self.state, &command);
        let changed = state != self.state;
        self.state = state;

        if let Some(notification) = notification {
            self.deliver(notification);
        }
        if changed {
            for (_, observer) in self.observers.iter_mut() {
                observer(&self.state);
            }
        }

        notification
    }

    /// Register an observer called after every state change
    pub fn subscribe(&mut self, observer: impl FnMut(&DesktopState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn deliver(&mut self, notification: Notification) {
        let result = match notification {
            Notification::Open => self.sink.notify_open(),
            Notification::Close => self.sink.notify_close(),
            Notification::Minimize => self.sink.notify_minimize(),
        };
        if let Err(e) = result {
            warn!("{:?} notification dropped: {}", notification, e);
        }
    }
}
