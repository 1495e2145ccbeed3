//! Screen rendering for the question and celebration views.
//!
//! The question view lays out the heading and both answer buttons. The "No" button's
//! row slot is only reserved; the button itself is drawn in a foreground area at the
//! slot plus its animated offset so it can roam the whole viewport.

use super::animation::{pulse_scale, wobble_angle};
use super::log_reposition;
use super::state::ValentineApp;
use crate::constants::*;
use crate::types::*;
use eframe::egui::{self, Color32};

const HEADING_COLOR: Color32 = Color32::from_rgb(88, 28, 135);
const ACCENT_COLOR: Color32 = Color32::from_rgb(124, 58, 237);
const YES_FILL: Color32 = Color32::from_rgb(147, 51, 234);
const NO_FILL: Color32 = Color32::from_rgb(59, 130, 246);
const CELEBRATION_COLOR: Color32 = Color32::from_rgb(219, 39, 119);

impl ValentineApp {
    /// Paints the two faint decorative circles in opposite corners.
    pub(super) fn draw_background(&self, ui: &egui::Ui) {
        let rect = ui.max_rect();
        let radius = 192.0;
        let inset = egui::vec2(radius - 80.0, radius - 80.0);
        let painter = ui.painter();
        painter.circle_filled(
            rect.left_top() + inset,
            radius,
            Color32::from_rgba_unmultiplied(216, 180, 254, 40),
        );
        painter.circle_filled(
            rect.right_bottom() - inset,
            radius,
            Color32::from_rgba_unmultiplied(147, 197, 253, 40),
        );
    }

    /// Picks the screen(s) to draw and cross-fades between them.
    ///
    /// The question fades in from the first frame after mounting. The celebration only
    /// starts fading in once the question has fully faded out.
    pub(super) fn draw_screens(&mut self, ui: &mut egui::Ui, viewport: Viewport) {
        let ctx = ui.ctx().clone();
        let pending = self.page.view_state().is_pending();

        let question_opacity = ctx.animate_bool_with_time(
            egui::Id::new("question_screen"),
            pending && self.has_drawn_frame,
            SCREEN_FADE_SECONDS,
        );
        let celebration_opacity = ctx.animate_bool_with_time(
            egui::Id::new("celebration_screen"),
            !pending && question_opacity == 0.0,
            SCREEN_FADE_SECONDS,
        );

        self.question_opacity = question_opacity;
        self.celebration_opacity = celebration_opacity;

        // Still laid out while transparent so the "No" button has geometry from the start
        if pending || question_opacity > 0.0 {
            self.draw_question(ui, viewport, question_opacity);
        } else {
            // Question view is unmounted; its buttons have no geometry any more
            self.no_button.geometry = None;
            self.no_button.hovered = false;
            self.yes_button_rect = None;
        }

        if celebration_opacity > 0.0 {
            self.draw_celebration(ui, celebration_opacity);
        }
    }

    /// Draws the greeting and the answer buttons, and reacts to clicks on them.
    fn draw_question(&mut self, ui: &mut egui::Ui, viewport: Viewport, opacity: f32) {
        let button_size = egui::vec2(ANSWER_BUTTON_SIZE.0, ANSWER_BUTTON_SIZE.1);
        let recipient = self.config.recipient.as_str();

        let (yes, no_slot) = ui
            .scope(|ui| {
                ui.set_opacity(opacity);
                ui.vertical_centered(|ui| {
                    // Roughly center the whole block vertically
                    let block_height = HEADING_FONT_SIZE * 2.6 + HEADING_GAP + button_size.y;
                    ui.add_space(((ui.available_height() - block_height) / 2.0).max(0.0));

                    ui.label(
                        egui::RichText::new(format!("Hey {recipient},"))
                            .size(HEADING_FONT_SIZE)
                            .strong()
                            .color(HEADING_COLOR),
                    );
                    ui.label(
                        egui::RichText::new("will you be my valentine?")
                            .size(HEADING_FONT_SIZE)
                            .strong()
                            .color(ACCENT_COLOR),
                    );
                    ui.add_space(HEADING_GAP);

                    ui.horizontal(|ui| {
                        ui.spacing_mut().item_spacing.x = 0.0;
                        let row_width = 2.0 * button_size.x + ANSWER_BUTTON_GAP;
                        ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                        let yes = ui.add_sized(button_size, answer_button("Yes", YES_FILL));
                        ui.add_space(ANSWER_BUTTON_GAP);
                        let (no_slot, _) = ui.allocate_exact_size(button_size, egui::Sense::hover());
                        (yes, no_slot)
                    })
                    .inner
                })
                .inner
            })
            .inner;

        self.yes_button_rect = Some(yes.rect);
        if yes.clicked() && self.page.accept() {
            log::info!("{} said yes", self.config.recipient);
        }

        self.draw_no_button(ui.ctx(), no_slot, viewport, opacity);
    }

    /// Draws the evasive button at its layout slot plus the animated offset.
    fn draw_no_button(
        &mut self,
        ctx: &egui::Context,
        slot: egui::Rect,
        viewport: Viewport,
        opacity: f32,
    ) {
        let displayed = self.no_button.spring.position();
        let rect = slot.translate(displayed);

        let response = egui::Area::new(egui::Id::new("no_button"))
            .order(egui::Order::Foreground)
            .constrain(false)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                ui.set_opacity(opacity);
                ui.add_sized(rect.size(), answer_button("No", NO_FILL))
            })
            .inner;

        let geometry = ButtonGeometry::from_bounds(
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            ButtonOffset::new(displayed.x, displayed.y),
        );
        self.no_button.geometry = Some(geometry);

        let hovered = response.hovered();
        let entered = hovered && !self.no_button.hovered;
        self.no_button.hovered = hovered;

        if entered && self.page.no_button_entered(Some(&geometry), viewport) {
            log_reposition("pointer enter", self.page.button_offset());
        }
        if response.clicked() && self.page.no_button_activated(Some(&geometry), viewport) {
            log_reposition("click", self.page.button_offset());
        }
    }

    /// Draws the pulsing, wobbling bouquet and the cheer.
    fn draw_celebration(&self, ui: &mut egui::Ui, opacity: f32) {
        let ctx = ui.ctx().clone();
        let time = ctx.input(|i| i.time);
        let phase = ((time % PULSE_PERIOD_SECONDS) / PULSE_PERIOD_SECONDS) as f32;
        // Grows from half size while fading in
        let entrance = 0.5 + 0.5 * opacity;

        let center = ui.max_rect().center();
        let mut painter = ui.painter().clone();
        painter.set_opacity(opacity);

        // Text shapes rotate around their top-left corner, so offset to spin about the center
        let bouquet = painter.layout_no_wrap(
            "💐".to_owned(),
            egui::FontId::proportional(128.0 * pulse_scale(phase) * entrance),
            CELEBRATION_COLOR,
        );
        let angle = wobble_angle(phase);
        let bouquet_center = center - egui::vec2(0.0, 80.0 * entrance);
        let top_left = bouquet_center - egui::emath::Rot2::from_angle(angle) * (bouquet.size() / 2.0);
        painter.add(
            egui::epaint::TextShape::new(top_left, bouquet, CELEBRATION_COLOR).with_angle(angle),
        );

        painter.text(
            center + egui::vec2(0.0, 90.0 * entrance),
            egui::Align2::CENTER_CENTER,
            "Yaay!",
            egui::FontId::proportional(96.0 * entrance),
            ACCENT_COLOR,
        );

        // The pulse never stops
        ctx.request_repaint();
    }
}

fn answer_button(label: &str, fill: Color32) -> egui::Button<'static> {
    egui::Button::new(
        egui::RichText::new(label)
            .size(ANSWER_FONT_SIZE)
            .strong()
            .color(Color32::WHITE),
    )
    .fill(fill)
    .corner_radius(egui::CornerRadius::same(ANSWER_BUTTON_CORNER_RADIUS))
}
