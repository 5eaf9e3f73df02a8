use desktop_window_manager::{
    reduce_windows, WindowAction, WindowDescriptor, WindowId, WindowManagerState,
};
use proptest::prelude::*;

const IDS: [&str; 4] = ["chat", "tracker", "terminal", "notes"];

/// Strategy over the small id pool plus one id that is never opened.
fn window_id() -> impl Strategy<Value = WindowId> {
    prop_oneof![
        (0..IDS.len()).prop_map(|i| WindowId::from(IDS[i])),
        Just(WindowId::from("never-opened")),
    ]
}

fn action() -> impl Strategy<Value = WindowAction> {
    prop_oneof![
        (window_id(), -500..2000i32, -500..2000i32).prop_map(|(id, x, y)| {
            WindowAction::Open(WindowDescriptor::new(id.clone(), id.to_string(), "*").with_geometry(
                x, y, 400, 300,
            ))
        }),
        window_id().prop_map(|window_id| WindowAction::Close { window_id }),
        window_id().prop_map(|window_id| WindowAction::Minimize { window_id }),
        window_id().prop_map(|window_id| WindowAction::Maximize { window_id }),
        window_id().prop_map(|window_id| WindowAction::Restore { window_id }),
        window_id().prop_map(|window_id| WindowAction::Focus { window_id }),
        (window_id(), -500..2000i32, -500..2000i32)
            .prop_map(|(window_id, x, y)| WindowAction::UpdatePosition { window_id, x, y }),
        (window_id(), 1..2000i32, 1..2000i32).prop_map(|(window_id, width, height)| {
            WindowAction::UpdateSize {
                window_id,
                width,
                height,
            }
        }),
    ]
}

/// Every non-open command, aimed at the id that is never opened.
fn ghost_action() -> impl Strategy<Value = WindowAction> {
    action().prop_filter_map("open command", |action| {
        let window_id = WindowId::from("never-opened");
        match action {
            WindowAction::Open(_) => None,
            WindowAction::Close { .. } => Some(WindowAction::Close { window_id }),
            WindowAction::Minimize { .. } => Some(WindowAction::Minimize { window_id }),
            WindowAction::Maximize { .. } => Some(WindowAction::Maximize { window_id }),
            WindowAction::Restore { .. } => Some(WindowAction::Restore { window_id }),
            WindowAction::Focus { .. } => Some(WindowAction::Focus { window_id }),
            WindowAction::UpdatePosition { x, y, .. } => {
                Some(WindowAction::UpdatePosition { window_id, x, y })
            }
            WindowAction::UpdateSize { width, height, .. } => Some(WindowAction::UpdateSize {
                window_id,
                width,
                height,
            }),
        }
    })
}

/// Drops `never-opened` opens so that id stays absent from every generated state.
fn tracked_only(actions: Vec<WindowAction>) -> Vec<WindowAction> {
    actions
        .into_iter()
        .filter(|a| !matches!(a, WindowAction::Open(d) if d.id.as_str() == "never-opened"))
        .collect()
}

fn run(actions: Vec<WindowAction>) -> WindowManagerState {
    let mut state = WindowManagerState::default();
    for action in actions {
        reduce_windows(&mut state, action);
    }
    state
}

proptest! {
    /// P1: zero or one focused window after any command sequence.
    #[test]
    fn at_most_one_window_is_focused(actions in prop::collection::vec(action(), 0..64)) {
        let state = run(actions);
        prop_assert!(state.windows.iter().filter(|w| w.is_focused).count() <= 1);
    }

    /// P2: ids never repeat.
    #[test]
    fn window_ids_stay_unique(actions in prop::collection::vec(action(), 0..64)) {
        let state = run(actions);
        let mut ids: Vec<&WindowId> = state.windows.iter().map(|w| &w.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        prop_assert_eq!(ids.len(), total);
    }

    /// I3: z-indices are unique and never exceed the issued top.
    #[test]
    fn z_indices_are_unique_and_bounded(actions in prop::collection::vec(action(), 0..64)) {
        let state = run(actions);
        let mut z: Vec<u64> = state.windows.iter().map(|w| w.z_index).collect();
        let total = z.len();
        z.sort_unstable();
        z.dedup();
        prop_assert_eq!(z.len(), total);
        prop_assert!(state.windows.iter().all(|w| w.z_index <= state.top_z_index));
    }

    /// P3: raising commands that match (or create) a record bump the counter and land on top.
    #[test]
    fn raising_commands_issue_a_new_top(
        actions in prop::collection::vec(action(), 0..48),
        target in 0..IDS.len(),
        kind in 0..3u8,
    ) {
        let mut state = run(actions);
        let window_id = WindowId::from(IDS[target]);
        let action = match kind {
            0 => WindowAction::Open(WindowDescriptor::new(window_id.clone(), "t", "*")),
            1 => WindowAction::Restore { window_id: window_id.clone() },
            _ => WindowAction::Focus { window_id: window_id.clone() },
        };
        let applies = kind == 0 || state.contains(&window_id);
        let before = state.top_z_index;

        reduce_windows(&mut state, action);

        if applies {
            prop_assert_eq!(state.top_z_index, before + 1);
            let record = state.window(&window_id).expect("tracked after raise");
            prop_assert_eq!(record.z_index, state.top_z_index);
            prop_assert!(record.is_focused);
        } else {
            prop_assert_eq!(state.top_z_index, before);
        }
    }

    /// P4: a repeated open never grows the collection.
    #[test]
    fn reopen_keeps_collection_size(
        actions in prop::collection::vec(action(), 0..48),
        target in 0..IDS.len(),
    ) {
        let mut state = run(actions);
        let descriptor = WindowDescriptor::new(IDS[target], "Same", "*");
        reduce_windows(&mut state, WindowAction::Open(descriptor.clone()));
        let len = state.windows.len();

        reduce_windows(&mut state, WindowAction::Open(descriptor));

        prop_assert_eq!(state.windows.len(), len);
    }

    /// P5: a minimized window is never left focused by minimize.
    #[test]
    fn minimize_clears_focus(
        actions in prop::collection::vec(action(), 0..48),
        target in 0..IDS.len(),
    ) {
        let mut state = run(actions);
        let window_id = WindowId::from(IDS[target]);

        reduce_windows(&mut state, WindowAction::Minimize { window_id: window_id.clone() });

        if let Some(record) = state.window(&window_id) {
            prop_assert!(record.is_minimized);
            prop_assert!(!record.is_focused);
        }
    }

    /// P6: any command naming an absent window changes nothing.
    #[test]
    fn unknown_window_commands_are_noops(
        actions in prop::collection::vec(action(), 0..48),
        probe in ghost_action(),
    ) {
        let mut state = run(tracked_only(actions));
        let before = state.clone();

        let effects = reduce_windows(&mut state, probe);

        prop_assert!(effects.is_empty());
        prop_assert_eq!(state, before);
    }

    /// I4 holds for any sequence that never calls focus on a minimized window.
    #[test]
    fn minimized_windows_are_never_focused_without_misrouted_focus(
        actions in prop::collection::vec(action(), 0..64),
    ) {
        let mut state = WindowManagerState::default();
        for action in actions {
            let misrouted = matches!(
                &action,
                WindowAction::Focus { window_id }
                    if state.window(window_id).is_some_and(|w| w.is_minimized)
            );
            if misrouted {
                continue;
            }
            reduce_windows(&mut state, action);
            prop_assert!(state.windows.iter().all(|w| !(w.is_minimized && w.is_focused)));
        }
    }
}
