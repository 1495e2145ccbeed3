//! Scoped pointer-move subscription.
//!
//! egui delivers input by polling rather than through registered listeners, so there
//! is nothing to register. The guard instead gates access to the pointer-move events in
//! `ctx.input`: the page reads movement only through a [`PointerSubscription`]. The app
//! acquires one when it is created and drops it on teardown, so once the page is
//! unmounted there is no handle left to read events with.

use crate::types::PointerPosition;
use eframe::egui;

/// Live subscription to pointer-move events.
pub struct PointerSubscription {
    label: &'static str,
}

impl PointerSubscription {
    /// Subscribes to pointer movement. The subscription lasts until the guard is dropped.
    pub fn acquire(label: &'static str) -> Self {
        log::debug!("pointer subscription acquired: {label}");
        Self { label }
    }

    /// Collects this frame's pointer-move events in the order they arrived.
    pub fn poll(&self, ctx: &egui::Context) -> Vec<PointerPosition> {
        ctx.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerMoved(pos) => Some(PointerPosition::new(pos.x, pos.y)),
                    _ => None,
                })
                .collect()
        })
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        log::debug!("pointer subscription released: {}", self.label);
    }
}
