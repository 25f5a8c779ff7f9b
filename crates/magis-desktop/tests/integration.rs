//! Integration tests for WindowManager
//!
//! These tests verify the full desktop workflow including:
//! - The open/minimize/restore cycle and z-order
//! - Notification dispatch
//! - Pointer-driven focus and drags
//! - Frames and frame diffs for the presentation layer

use std::cell::RefCell;
use std::rc::Rc;

use magis_desktop::{
    Command, Frame, FrameChange, InputRouter, Manifest, ManifestEntry, Notification,
    NotificationSink, NotifyError, NullSink, Vec2, WindowKind, WindowManager, WindowPhase,
    WindowRegion,
};

/// Sink recording every cue it receives
#[derive(Clone, Default)]
struct RecordingSink {
    cues: Rc<RefCell<Vec<Notification>>>,
}

impl NotificationSink for RecordingSink {
    fn notify_open(&mut self) -> Result<(), NotifyError> {
        self.cues.borrow_mut().push(Notification::Open);
        Ok(())
    }

    fn notify_close(&mut self) -> Result<(), NotifyError> {
        self.cues.borrow_mut().push(Notification::Close);
        Ok(())
    }

    fn notify_minimize(&mut self) -> Result<(), NotifyError> {
        self.cues.borrow_mut().push(Notification::Minimize);
        Ok(())
    }
}

fn two_windows() -> Manifest {
    Manifest::new(
        10,
        vec![
            ManifestEntry::new("a", "A.exe", WindowKind::Matrix, Vec2::new(100.0, 50.0)),
            ManifestEntry::new("b", "B.sh", WindowKind::Terminal, Vec2::new(200.0, 150.0)),
        ],
    )
}

// =============================================================================
// Reference Scenario
// =============================================================================

#[test]
fn test_reference_scenario() {
    let sink = RecordingSink::default();
    let cues = Rc::clone(&sink.cues);
    let mut wm = WindowManager::new(&two_windows(), sink);

    wm.toggle("a");
    let a = wm.get("a").unwrap();
    assert!(a.is_open && !a.is_minimized);
    assert_eq!(a.z_index, 11);

    wm.toggle("b");
    let b = wm.get("b").unwrap();
    assert!(b.is_open && !b.is_minimized);
    assert_eq!(b.z_index, 12);

    wm.focus("a");
    assert_eq!(wm.get("a").unwrap().z_index, 13);
    assert_eq!(wm.get("b").unwrap().z_index, 12);

    wm.toggle("a");
    let a = wm.get("a").unwrap();
    assert!(a.is_minimized);
    assert_eq!(a.z_index, 13);

    wm.close("b");
    assert!(!wm.get("b").unwrap().is_open);

    wm.toggle("a");
    let a = wm.get("a").unwrap();
    assert!(a.is_open && !a.is_minimized);
    assert_eq!(a.z_index, 14);
    assert_eq!(wm.get("b").unwrap().phase(), WindowPhase::Closed);

    assert_eq!(
        *cues.borrow(),
        vec![
            Notification::Open,
            Notification::Open,
            Notification::Minimize,
            Notification::Close,
            Notification::Open,
        ]
    );
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_toggle_three_times_cycles() {
    let mut wm = WindowManager::new(&Manifest::magis(), NullSink);
    wm.toggle("terminal");
    let first_z = wm.get("terminal").unwrap().z_index;
    assert_eq!(wm.get("terminal").unwrap().phase(), WindowPhase::Open);

    wm.toggle("live");
    wm.toggle("terminal");
    assert_eq!(wm.get("terminal").unwrap().phase(), WindowPhase::Minimized);

    wm.toggle("terminal");
    let terminal = wm.get("terminal").unwrap();
    assert_eq!(terminal.phase(), WindowPhase::Open);
    assert!(terminal.z_index > first_z);
    for other in wm.state().windows().iter().filter(|w| w.id != "terminal") {
        assert!(terminal.z_index > other.z_index);
    }
}

#[test]
fn test_close_is_idempotent() {
    let mut wm = WindowManager::new(&Manifest::magis(), NullSink);
    wm.toggle("media");

    wm.close("media");
    let once = wm.state().clone();
    wm.close("media");
    assert_eq!(*wm.state(), once);
}

#[test]
fn test_reopen_after_close_is_visible() {
    let mut wm = WindowManager::new(&Manifest::magis(), NullSink);
    wm.toggle("media");
    wm.toggle("media");
    wm.close("media");
    wm.toggle("media");

    let media = wm.get("media").unwrap();
    assert!(media.is_visible());
    assert_eq!(wm.state().focused().unwrap().id, "media");
}

#[test]
fn test_minimize_emits_cue_only_when_open() {
    let sink = RecordingSink::default();
    let cues = Rc::clone(&sink.cues);
    let mut wm = WindowManager::new(&two_windows(), sink);

    assert_eq!(wm.minimize("a"), None);
    wm.toggle("a");
    assert_eq!(wm.minimize("a"), Some(Notification::Minimize));
    assert_eq!(wm.minimize("a"), Some(Notification::Minimize));
    assert!(wm.get("a").unwrap().is_minimized);

    assert_eq!(
        *cues.borrow(),
        vec![Notification::Open, Notification::Minimize, Notification::Minimize]
    );
}

#[test]
fn test_dispatch_json_commands() {
    let mut wm = WindowManager::new(&Manifest::magis(), NullSink);
    let script = r#"[
        {"type": "toggle", "id": "cicd"},
        {"type": "set_position", "id": "cicd", "x": 12.0, "y": 34.0},
        {"type": "toggle", "id": "about"},
        {"type": "focus", "id": "cicd"},
        {"type": "close", "id": "chalamandra"}
    ]"#;
    let commands: Vec<Command> = serde_json::from_str(script).unwrap();
    for command in commands {
        wm.dispatch(command);
    }

    let cicd = wm.get("cicd").unwrap();
    assert!((cicd.position.x - 12.0).abs() < 0.001);
    assert!((cicd.position.y - 34.0).abs() < 0.001);
    assert_eq!(wm.state().focused().unwrap().id, "cicd");
    assert!(!wm.get("chalamandra").unwrap().is_open);
}

// =============================================================================
// Pointer Input
// =============================================================================

#[test]
fn test_drag_window_by_title_bar() {
    let manifest = Manifest::magis();
    let mut wm = WindowManager::new(&manifest, NullSink);
    let mut router = InputRouter::new();
    wm.toggle("matrix");

    router.pointer_down(&mut wm, "chalamandra", WindowRegion::TitleBar, Vec2::new(130.0, 60.0));
    assert_eq!(wm.state().focused().unwrap().id, "chalamandra");

    for step in 1..=5 {
        let d = step as f32 * 10.0;
        router.pointer_move(&mut wm, Vec2::new(130.0 + d, 60.0 + d));
    }
    router.pointer_up();

    let core = wm.get("chalamandra").unwrap();
    assert!((core.position.x - 150.0).abs() < 0.001);
    assert!((core.position.y - 100.0).abs() < 0.001);

    let frame = Frame::build(wm.state(), &manifest);
    assert_eq!(frame.focused().unwrap().id, "chalamandra");
}

#[test]
fn test_drag_can_leave_the_screen() {
    let mut wm = WindowManager::new(&Manifest::magis(), NullSink);
    let mut router = InputRouter::new();

    router.pointer_down(&mut wm, "chalamandra", WindowRegion::TitleBar, Vec2::new(100.0, 50.0));
    router.pointer_move(&mut wm, Vec2::new(-5000.0, -5000.0));

    let core = wm.get("chalamandra").unwrap();
    assert!((core.position.x - (-5000.0)).abs() < 0.001);
    assert!((core.position.y - (-5000.0)).abs() < 0.001);
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn test_frame_diff_sequence() {
    let manifest = Manifest::magis();
    let mut wm = WindowManager::new(&manifest, NullSink);
    let mut frame = Frame::build(wm.state(), &manifest);

    wm.toggle("live");
    let next = Frame::build(wm.state(), &manifest);
    let changes = next.diff(&frame);
    assert!(changes.contains(&FrameChange::Shown { id: "live".into() }));
    frame = next;

    wm.focus("chalamandra");
    let next = Frame::build(wm.state(), &manifest);
    let changes = next.diff(&frame);
    assert!(changes.contains(&FrameChange::Restacked { id: "chalamandra".into(), z_index: 18 }));
    assert!(changes.contains(&FrameChange::FocusChanged { id: Some("chalamandra".into()) }));
    assert!(changes.contains(&FrameChange::TaskbarChanged));
    assert!(!changes.contains(&FrameChange::DockChanged));
}

#[test]
fn test_observer_drives_redraw() {
    let manifest = Manifest::magis();
    let mut wm = WindowManager::new(&manifest, NullSink);
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    let observed = manifest.clone();
    wm.subscribe(move |state| sink.borrow_mut().push(Frame::build(state, &observed)));

    wm.toggle("about");
    wm.set_position("about", 0.0, 0.0);
    wm.toggle("ghost");

    let frames = frames.borrow();
    assert_eq!(frames.len(), 2);
    assert!(frames[0].panel("about").is_some());
    assert!(frames[1].panel("about").unwrap().position.approx_eq(Vec2::ZERO));
}
