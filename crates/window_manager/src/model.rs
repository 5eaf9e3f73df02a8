use std::fmt;

use serde::{Deserialize, Serialize};

/// Stacking base used when no configuration overrides it. The first window opens at base + 1.
pub const DEFAULT_TOP_Z_INDEX: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Caller-chosen window identifier, unique among the currently tracked windows.
pub struct WindowId(pub String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WindowId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Everything a caller supplies to open a window. Stacking and focus are assigned by the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowDescriptor {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub is_maximized: bool,
}

impl WindowDescriptor {
    pub fn new(id: impl Into<WindowId>, title: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            x: 48,
            y: 48,
            width: 420,
            height: 300,
            is_maximized: false,
        }
    }

    pub fn with_geometry(mut self, x: i32, y: i32, width: i32, height: i32) -> Self {
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        self
    }
}

/// One tracked window. Geometry is only meaningful while the window is not maximized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowRecord {
    pub id: WindowId,
    pub title: String,
    pub icon: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub z_index: u64,
    pub is_focused: bool,
    pub is_minimized: bool,
    pub is_maximized: bool,
}

impl WindowRecord {
    /// Builds a fresh focused, non-minimized record at `z_index`.
    pub fn from_descriptor(descriptor: WindowDescriptor, z_index: u64) -> Self {
        Self {
            id: descriptor.id,
            title: descriptor.title,
            icon: descriptor.icon,
            x: descriptor.x,
            y: descriptor.y,
            width: descriptor.width,
            height: descriptor.height,
            z_index,
            is_focused: true,
            is_minimized: false,
            is_maximized: descriptor.is_maximized,
        }
    }
}

/// Canonical window collection in insertion order plus the highest z-index ever issued.
///
/// The counter is 64-bit while configured bases are `u32`, so issuance cannot run out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowManagerState {
    pub windows: Vec<WindowRecord>,
    pub top_z_index: u64,
}

impl Default for WindowManagerState {
    fn default() -> Self {
        Self::with_top_z_index(u64::from(DEFAULT_TOP_Z_INDEX))
    }
}

impl WindowManagerState {
    pub fn with_top_z_index(top_z_index: u64) -> Self {
        Self {
            windows: Vec::new(),
            top_z_index,
        }
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.window(id).is_some()
    }

    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| &w.id)
    }

    pub fn snapshot(&self) -> WindowSnapshot {
        WindowSnapshot {
            windows: self.windows.clone(),
            top_z_index: self.top_z_index,
        }
    }
}

/// Read-only view of every window record, republished after each effective mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSnapshot {
    pub windows: Vec<WindowRecord>,
    pub top_z_index: u64,
}

impl WindowSnapshot {
    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == id)
    }

    /// Returns the focused window, or `None` when nothing holds focus.
    pub fn focused_window(&self) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.is_focused)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Non-minimized windows in paint order (lowest z-index first).
    pub fn visible_windows(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.is_minimized).collect();
        visible.sort_by_key(|w| w.z_index);
        visible
    }

    /// Encodes the snapshot with the field names browser renderers expect (`zIndex`,
    /// `isFocused`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }
}

#[derive(Debug, thiserror::Error)]
/// Failures while encoding a [`WindowSnapshot`] for an external renderer.
pub enum SnapshotError {
    /// JSON encoding failed.
    #[error("snapshot encode failed: {0}")]
    Encode(#[source] serde_json::Error),
}
