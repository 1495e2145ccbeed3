//! User interface for the valentine page.
//!
//! This module wires the egui frame loop to the page state: it feeds pointer events to
//! the evasion logic, advances the "No" button's spring, and renders whichever screen
//! the view state selects.
//!
//! # Module Organization
//!
//! - `animation` - Spring easing for the "No" button's displacement
//! - `pointer` - Scoped pointer-move subscription
//! - `rendering` - Question and celebration screens
//! - `state` - App configuration and the main `ValentineApp`

mod animation;
mod pointer;
mod rendering;
mod state;

pub use state::{AppConfig, ValentineApp};

use crate::types::*;
use eframe::egui;

impl eframe::App for ValentineApp {
    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}

impl ValentineApp {
    /// Runs one frame of the page: input, animation, then drawing.
    ///
    /// Kept separate from `eframe::App::update` so headless tests can drive it with a
    /// bare `egui::Context`.
    pub fn run_frame(&mut self, ctx: &egui::Context) {
        if !self.is_mounted() {
            return;
        }
        let viewport = viewport_of(ctx);

        // Geometry from the previous frame is what the pointer was reacting to
        self.handle_pointer_events(ctx, viewport);

        self.advance_no_button(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_background(ui);
            self.draw_screens(ui, viewport);
        });
        self.has_drawn_frame = true;
    }

    /// Runs the proximity check for every pointer move received this frame.
    fn handle_pointer_events(&mut self, ctx: &egui::Context, viewport: Viewport) {
        let Some(subscription) = &self.pointer else {
            return;
        };
        for pointer in subscription.poll(ctx) {
            if self
                .page
                .pointer_moved(pointer, self.no_button.geometry.as_ref(), viewport)
            {
                log_reposition("pointer proximity", self.page.button_offset());
            }
        }
    }

    /// Retargets the spring at the page's offset and steps it by the frame time.
    fn advance_no_button(&mut self, ctx: &egui::Context) {
        let target = self.page.button_offset();
        self.no_button
            .spring
            .set_target(egui::vec2(target.x, target.y));
        let dt = ctx.input(|i| i.stable_dt);
        self.no_button.spring.step(dt);
        if !self.no_button.spring.is_settled() {
            ctx.request_repaint();
        }
    }
}

/// Samples the current viewport size.
fn viewport_of(ctx: &egui::Context) -> Viewport {
    let rect = ctx.input(|i| i.content_rect());
    Viewport::new(rect.width(), rect.height())
}

fn log_reposition(cause: &str, offset: ButtonOffset) {
    log::debug!(
        "no button evaded ({cause}); new offset ({:.1}, {:.1})",
        offset.x,
        offset.y
    );
}

#[cfg(test)]
mod tests;
