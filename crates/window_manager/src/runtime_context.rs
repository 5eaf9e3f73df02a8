//! Reactive container and injection point for the window manager.
//!
//! [`WindowManagerContext`] owns the canonical window state signal, the reducer dispatch
//! callback, and the queue of effects awaiting the host. Consumers receive the handle from
//! [`WindowManagerContext::new`] or [`provide_window_manager`] and never mutate state directly.

use leptos::*;

use crate::{
    config::WindowManagerConfig,
    model::{WindowDescriptor, WindowId, WindowManagerState, WindowRecord, WindowSnapshot},
    reducer::{reduce_windows, WindowAction, WindowEffect},
};

#[derive(Clone, Copy)]
/// Handle for reading window snapshots and dispatching [`WindowAction`] values.
pub struct WindowManagerContext {
    /// Reactive window state signal.
    pub state: RwSignal<WindowManagerState>,
    /// Effects emitted by the reducer that the host has not drained yet.
    pub effects: RwSignal<Vec<WindowEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<WindowAction>,
}

impl std::fmt::Debug for WindowManagerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowManagerContext")
            .field("state", &self.state.get_untracked())
            .field("effects", &self.effects.get_untracked())
            .finish()
    }
}

impl WindowManagerContext {
    /// Creates the window state container. Must run inside a Leptos reactive runtime.
    pub fn new(config: WindowManagerConfig) -> Self {
        let state = create_rw_signal(config.initial_state());
        let effects = create_rw_signal(Vec::<WindowEffect>::new());
        let log_commands = config.log_commands;

        let dispatch = Callback::new(move |action: WindowAction| {
            let command = action.name();
            let window_id = action.window_id().clone();
            let mut next = state.get_untracked();

            let new_effects = reduce_windows(&mut next, action);
            if state.with_untracked(|current| *current != next) {
                if log_commands {
                    logging::log!("window {command}: {window_id}");
                }
                state.set(next);
            } else if !next.contains(&window_id) {
                logging::warn!("window {command} ignored, {window_id} is not open");
            }

            if !new_effects.is_empty() {
                effects.update(|queue| queue.extend(new_effects));
            }
        });

        Self {
            state,
            effects,
            dispatch,
        }
    }

    /// Dispatches a command through the reducer callback.
    pub fn dispatch_action(&self, action: WindowAction) {
        self.dispatch.call(action);
    }

    /// Opens a window, or raises the tracked window with the same id.
    pub fn open(&self, descriptor: WindowDescriptor) {
        self.dispatch_action(WindowAction::Open(descriptor));
    }

    /// Removes a window; focus is not handed to another window.
    pub fn close(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::Close {
            window_id: window_id.into(),
        });
    }

    /// Hides a window to the taskbar and clears its focus.
    pub fn minimize(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::Minimize {
            window_id: window_id.into(),
        });
    }

    /// Toggles full-viewport layout.
    pub fn maximize(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::Maximize {
            window_id: window_id.into(),
        });
    }

    /// Brings a minimized window back, focused and on top.
    pub fn restore(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::Restore {
            window_id: window_id.into(),
        });
    }

    /// Raises and focuses a window. A minimized window stays minimized; use [`Self::restore`].
    pub fn focus(&self, window_id: impl Into<WindowId>) {
        self.dispatch_action(WindowAction::Focus {
            window_id: window_id.into(),
        });
    }

    /// Stores the position reported at the end of a drag.
    pub fn update_window_position(&self, window_id: impl Into<WindowId>, x: i32, y: i32) {
        self.dispatch_action(WindowAction::UpdatePosition {
            window_id: window_id.into(),
            x,
            y,
        });
    }

    /// Stores the size reported at the end of a resize.
    pub fn update_window_size(&self, window_id: impl Into<WindowId>, width: i32, height: i32) {
        self.dispatch_action(WindowAction::UpdateSize {
            window_id: window_id.into(),
            width,
            height,
        });
    }

    /// Latest published snapshot. Tracked, so reactive readers re-run after each mutation.
    pub fn snapshot(&self) -> WindowSnapshot {
        self.state.with(WindowManagerState::snapshot)
    }

    /// Latest published snapshot, read without subscribing. For non-reactive hosts.
    pub fn snapshot_untracked(&self) -> WindowSnapshot {
        self.state.with_untracked(WindowManagerState::snapshot)
    }

    /// Tracked window records in insertion order.
    pub fn windows(&self) -> Vec<WindowRecord> {
        self.state.with(|state| state.windows.clone())
    }

    /// Highest z-index issued so far.
    pub fn top_z_index(&self) -> u64 {
        self.state.with(|state| state.top_z_index)
    }

    /// Focused window id, or `None` when no window holds focus.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.state
            .with(|state| state.focused_window_id().cloned())
    }

    /// Drains queued effects in emission order.
    pub fn take_effects(&self) -> Vec<WindowEffect> {
        self.effects
            .try_update_untracked(std::mem::take)
            .unwrap_or_default()
    }
}

/// Creates a [`WindowManagerContext`] and provides it to descendant components.
pub fn provide_window_manager(config: WindowManagerConfig) -> WindowManagerContext {
    let context = WindowManagerContext::new(config);
    provide_context(context);
    context
}
