//! Window commands, side-effect intents, and the transition function for the window manager.

use crate::{
    model::{WindowDescriptor, WindowId, WindowManagerState},
    window_manager::{find_window_mut, insert_window, raise_window, remove_window},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Commands accepted by [`reduce_windows`]. Every command naming an unknown window is a no-op.
pub enum WindowAction {
    /// Open a window, or bring an already-tracked window with the same id to the front.
    Open(WindowDescriptor),
    /// Remove a window record entirely.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Hide a window to the taskbar and drop its focus.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Toggle full-viewport layout.
    Maximize {
        /// Window to maximize or un-maximize.
        window_id: WindowId,
    },
    /// Bring a minimized window back, focused and on top.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Raise and focus a window.
    ///
    /// Does not clear the minimized flag; minimized windows should go through
    /// [`WindowAction::Restore`].
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Store the final position reported by a drag gesture.
    UpdatePosition {
        /// Window that moved.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Store the final size reported by a resize gesture.
    UpdateSize {
        /// Window that was resized.
        window_id: WindowId,
        /// New width.
        width: i32,
        /// New height.
        height: i32,
    },
}

impl WindowAction {
    /// Window targeted by the command.
    pub fn window_id(&self) -> &WindowId {
        match self {
            Self::Open(descriptor) => &descriptor.id,
            Self::Close { window_id }
            | Self::Minimize { window_id }
            | Self::Maximize { window_id }
            | Self::Restore { window_id }
            | Self::Focus { window_id }
            | Self::UpdatePosition { window_id, .. }
            | Self::UpdateSize { window_id, .. } => window_id,
        }
    }

    /// Short command name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "open",
            Self::Close { .. } => "close",
            Self::Minimize { .. } => "minimize",
            Self::Maximize { .. } => "maximize",
            Self::Restore { .. } => "restore",
            Self::Focus { .. } => "focus",
            Self::UpdatePosition { .. } => "move",
            Self::UpdateSize { .. } => "resize",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_windows`] for the host to execute.
pub enum WindowEffect {
    /// Move keyboard focus into the raised window's content.
    FocusWindowInput(WindowId),
    /// The number of tracked windows changed.
    WindowCountChanged(usize),
}

/// Applies a [`WindowAction`] to the window state and collects resulting side effects.
///
/// This is the authoritative stacking and focus transition. It never fails: a command for a
/// window that is not tracked leaves `state` untouched and returns no effects.
pub fn reduce_windows(state: &mut WindowManagerState, action: WindowAction) -> Vec<WindowEffect> {
    let mut effects = Vec::new();
    match action {
        WindowAction::Open(descriptor) => {
            let window_id = descriptor.id.clone();
            if !raise_window(state, &window_id, true) {
                insert_window(state, descriptor);
                effects.push(WindowEffect::WindowCountChanged(state.windows.len()));
            }
            effects.push(WindowEffect::FocusWindowInput(window_id));
        }
        WindowAction::Close { window_id } => {
            if remove_window(state, &window_id) {
                effects.push(WindowEffect::WindowCountChanged(state.windows.len()));
            }
        }
        WindowAction::Minimize { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.is_minimized = true;
                window.is_focused = false;
            }
        }
        WindowAction::Maximize { window_id } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.is_maximized = !window.is_maximized;
            }
        }
        WindowAction::Restore { window_id } => {
            if raise_window(state, &window_id, true) {
                effects.push(WindowEffect::FocusWindowInput(window_id));
            }
        }
        WindowAction::Focus { window_id } => {
            if raise_window(state, &window_id, false) {
                effects.push(WindowEffect::FocusWindowInput(window_id));
            }
        }
        WindowAction::UpdatePosition { window_id, x, y } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.x = x;
                window.y = y;
            }
        }
        WindowAction::UpdateSize {
            window_id,
            width,
            height,
        } => {
            if let Some(window) = find_window_mut(state, &window_id) {
                window.width = width;
                window.height = height;
            }
        }
    }
    effects
}
