//! Explicit effect-queue executor for reducer-emitted window effects.

use leptos::*;

use crate::{reducer::WindowEffect, runtime_context::WindowManagerContext};

/// Installs a reactive executor that drains queued window effects in order through `handler`.
pub fn install(manager: WindowManagerContext, handler: impl Fn(WindowEffect) + 'static) {
    // Take the queue without notifying so only later pushes re-run the executor; effects
    // enqueued by nested dispatches form a new batch.
    create_effect(move |_| {
        manager.effects.track();
        let queued = manager
            .effects
            .try_update_untracked(std::mem::take)
            .unwrap_or_default();

        for effect in queued {
            handler(effect);
        }
    });
}
