//! Shared stacking and focus transition helpers used by the window reducer.

use crate::model::{WindowDescriptor, WindowId, WindowManagerState, WindowRecord};

/// Returns a mutable reference to the record for `window_id`, if tracked.
pub fn find_window_mut<'a>(
    state: &'a mut WindowManagerState,
    window_id: &WindowId,
) -> Option<&'a mut WindowRecord> {
    state.windows.iter_mut().find(|w| &w.id == window_id)
}

/// Issues the next stacking value and records it as the new top.
pub fn issue_z_index(state: &mut WindowManagerState) -> u64 {
    state.top_z_index += 1;
    state.top_z_index
}

/// Raises `window_id` to a fresh top z-index, focuses it, and clears focus on every other window.
///
/// When `unminimize` is set the window is also brought back from the taskbar. Returns `false`
/// without touching any state (including the z-index counter) when the window is not tracked.
pub fn raise_window(
    state: &mut WindowManagerState,
    window_id: &WindowId,
    unminimize: bool,
) -> bool {
    if !state.windows.iter().any(|w| &w.id == window_id) {
        return false;
    }

    let z_index = issue_z_index(state);
    for window in &mut state.windows {
        if &window.id == window_id {
            window.is_focused = true;
            window.z_index = z_index;
            if unminimize {
                window.is_minimized = false;
            }
        } else {
            window.is_focused = false;
        }
    }
    true
}

/// Appends a fresh focused record for `descriptor` on top of the stack.
pub fn insert_window(state: &mut WindowManagerState, descriptor: WindowDescriptor) {
    for window in &mut state.windows {
        window.is_focused = false;
    }
    let z_index = issue_z_index(state);
    state
        .windows
        .push(WindowRecord::from_descriptor(descriptor, z_index));
}

/// Removes `window_id` and reports whether a record was dropped. Focus is not reassigned.
pub fn remove_window(state: &mut WindowManagerState, window_id: &WindowId) -> bool {
    let before_len = state.windows.len();
    state.windows.retain(|w| &w.id != window_id);
    state.windows.len() != before_len
}
