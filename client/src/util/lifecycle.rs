//! Mount tracking for async page work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches spawned by a page may resolve after the user has navigated away.
//! Pages create a [`MountGuard`] on render and check it before touching any
//! signal once an await returns.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// A guard that stays alive until [`Self::unmount`] is called.
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a guard cleared automatically when the current reactive owner
    /// is disposed.
    pub fn install() -> Self {
        let guard = Self::new();
        let on_drop = guard.clone();
        leptos::prelude::on_cleanup(move || on_drop.unmount());
        guard
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
