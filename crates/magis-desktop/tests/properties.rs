//! Property tests for window manager invariants

use magis_desktop::{reduce, Command, DesktopState, Manifest, WindowId};
use proptest::prelude::*;

const IDS: [&str; 4] = ["matrix", "terminal", "chalamandra", "ghost"];

fn command() -> impl Strategy<Value = Command> {
    let id = prop::sample::select(IDS.to_vec()).prop_map(|id| WindowId::new(id));
    (id, 0u8..5, -2000.0f32..2000.0, -2000.0f32..2000.0).prop_map(|(id, op, x, y)| match op {
        0 => Command::Toggle { id },
        1 => Command::Focus { id },
        2 => Command::Close { id },
        3 => Command::Minimize { id },
        _ => Command::SetPosition { id, x, y },
    })
}

fn start() -> DesktopState {
    DesktopState::from_manifest(&Manifest::magis())
}

fn run(commands: &[Command]) -> DesktopState {
    commands
        .iter()
        .fold(start(), |state, command| reduce(&state, command).state)
}

proptest! {
    #[test]
    fn minimized_implies_open(commands in prop::collection::vec(command(), 0..64)) {
        let state = run(&commands);
        for w in state.windows() {
            prop_assert!(!w.is_minimized || w.is_open, "{} minimized while closed", w.id);
        }
    }

    #[test]
    fn focus_makes_unique_max(commands in prop::collection::vec(command(), 0..64), pick in 0usize..3) {
        let state = run(&commands);
        let id = WindowId::new(IDS[pick]);
        let next = reduce(&state, &Command::Focus { id: id.clone() }).state;

        let target = next.get(id.as_str()).unwrap();
        for (before, after) in state.windows().iter().zip(next.windows()) {
            prop_assert_eq!(before.is_open, after.is_open);
            prop_assert_eq!(before.is_minimized, after.is_minimized);
            if after.id != id {
                prop_assert!(after.z_index < target.z_index);
            }
        }
    }

    #[test]
    fn close_twice_equals_once(commands in prop::collection::vec(command(), 0..64), pick in 0usize..4) {
        let state = run(&commands);
        let close = Command::Close { id: WindowId::new(IDS[pick]) };
        let once = reduce(&state, &close).state;
        let twice = reduce(&once, &close).state;
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn only_set_position_moves(commands in prop::collection::vec(command(), 1..64)) {
        let mut state = start();
        for command in &commands {
            let next = reduce(&state, command).state;
            for (before, after) in state.windows().iter().zip(next.windows()) {
                let moved = !before.position.approx_eq(after.position);
                if moved {
                    let is_move = matches!(command, Command::SetPosition { .. });
                    prop_assert!(is_move);
                }
                if let Command::SetPosition { .. } = command {
                    prop_assert_eq!(before.z_index, after.z_index);
                    prop_assert_eq!(before.phase(), after.phase());
                }
            }
            state = next;
        }
    }

    #[test]
    fn max_z_never_decreases(commands in prop::collection::vec(command(), 1..64)) {
        let mut state = start();
        for command in &commands {
            let next = reduce(&state, command).state;
            prop_assert!(next.max_z() >= state.max_z());
            state = next;
        }
    }
}
