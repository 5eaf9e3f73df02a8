//! Headless taskbar model: one entry per tracked window, clicks routed back as window commands.

use leptos::*;

use crate::{
    model::{WindowId, WindowRecord, WindowSnapshot},
    reducer::WindowAction,
    runtime_context::WindowManagerContext,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    /// Highlighted: focused and not minimized.
    pub is_active: bool,
    pub is_minimized: bool,
}

impl TaskbarEntry {
    pub fn from_record(record: &WindowRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            icon: record.icon.clone(),
            is_active: record.is_focused && !record.is_minimized,
            is_minimized: record.is_minimized,
        }
    }

    /// Command issued when the entry is clicked. Minimized windows are restored, others focused.
    pub fn activation(&self) -> WindowAction {
        let window_id = self.id.clone();
        if self.is_minimized {
            WindowAction::Restore { window_id }
        } else {
            WindowAction::Focus { window_id }
        }
    }
}

/// Taskbar entries in window insertion order.
pub fn taskbar_entries(snapshot: &WindowSnapshot) -> Vec<TaskbarEntry> {
    snapshot.windows.iter().map(TaskbarEntry::from_record).collect()
}

/// Taskbar consumer bound to a window manager handle.
#[derive(Debug, Clone, Copy)]
pub struct TaskbarModel {
    manager: WindowManagerContext,
}

impl TaskbarModel {
    pub fn new(manager: &WindowManagerContext) -> Self {
        Self { manager: *manager }
    }

    pub fn entries(&self) -> Vec<TaskbarEntry> {
        taskbar_entries(&self.manager.snapshot())
    }

    /// Handles a click on the entry for `window_id`. Unknown ids are ignored.
    pub fn activate(&self, window_id: &WindowId) {
        let entry = self
            .manager
            .state
            .with_untracked(|state| state.window(window_id).map(TaskbarEntry::from_record));
        if let Some(entry) = entry {
            self.manager.dispatch_action(entry.activation());
        }
    }
}
