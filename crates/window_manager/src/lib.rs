//! Window manager core for the browser desktop: stacking order, focus, and visibility of every
//! open window, published as reactive snapshots.

pub mod config;
pub mod effect_executor;
pub mod model;
pub mod reducer;
pub mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use config::{ConfigError, WindowManagerConfig};
pub use model::*;
pub use reducer::{reduce_windows, WindowAction, WindowEffect};
pub use runtime_context::{provide_window_manager, WindowManagerContext};
pub use taskbar::{taskbar_entries, TaskbarEntry, TaskbarModel};
