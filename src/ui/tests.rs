use super::*;
use crate::evasion::{EvasionConfig, EvasionController};
use crate::page::ValentinePage;
use eframe::egui;
use rand::rngs::StdRng;
use rand::SeedableRng;

const SCREEN: (f32, f32) = (1000.0, 800.0);

/// Drives headless egui frames against one context so interaction state persists.
struct Harness {
    ctx: egui::Context,
    frame: u32,
}

impl Harness {
    fn new() -> Self {
        Self {
            ctx: egui::Context::default(),
            frame: 0,
        }
    }

    fn step(&mut self, app: &mut ValentineApp, events: Vec<egui::Event>) -> egui::FullOutput {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(SCREEN.0, SCREEN.1),
        ));
        raw.time = Some(f64::from(self.frame) / 60.0);
        raw.predicted_dt = 1.0 / 60.0;
        raw.events = events;
        self.frame += 1;

        self.ctx.run(raw, |ctx| {
            ctx.set_visuals(egui::Visuals::light());
            app.run_frame(ctx);
        })
    }

    fn idle(&mut self, app: &mut ValentineApp, frames: usize) {
        for _ in 0..frames {
            let _ = self.step(app, Vec::new());
        }
    }
}

fn seeded_app(seed: u64) -> ValentineApp {
    let page = ValentinePage::with_controller(EvasionController::with_rng(
        EvasionConfig::default(),
        StdRng::seed_from_u64(seed),
    ));
    ValentineApp::with_page(AppConfig::default(), page)
}

fn click_at(harness: &mut Harness, app: &mut ValentineApp, pos: egui::Pos2) {
    let _ = harness.step(app, vec![egui::Event::PointerMoved(pos)]);
    for pressed in [true, false] {
        let _ = harness.step(
            app,
            vec![egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            }],
        );
    }
}

#[test]
fn no_button_has_no_geometry_before_first_frame() {
    let app = seeded_app(1);
    assert!(app.no_button.geometry.is_none());
    assert!(app.is_mounted());
}

#[test]
fn pointer_near_no_button_moves_it_inside_padded_viewport() {
    let mut harness = Harness::new();
    let mut app = seeded_app(2);
    harness.idle(&mut app, 1);

    let geometry = app.no_button.geometry.expect("no button drawn on first frame");
    let (cx, cy) = geometry.center;
    let _ = harness.step(&mut app, vec![egui::Event::PointerMoved(egui::pos2(cx + 5.0, cy))]);

    let offset = app.page.button_offset();
    assert_ne!(offset, ButtonOffset::ZERO);
    let (lx, ly) = geometry.layout_center();
    let (x, y) = (lx + offset.x, ly + offset.y);
    assert!((100.0..=SCREEN.0 - 100.0).contains(&x), "x out of bounds: {x}");
    assert!((100.0..=SCREEN.1 - 100.0).contains(&y), "y out of bounds: {y}");
    assert_eq!(app.page.view_state(), ViewState::Pending);
}

#[test]
fn pointer_far_from_no_button_leaves_it_alone() {
    let mut harness = Harness::new();
    let mut app = seeded_app(3);
    harness.idle(&mut app, 1);
    let before = app.no_button.geometry;

    let _ = harness.step(&mut app, vec![egui::Event::PointerMoved(egui::pos2(10.0, 10.0))]);

    assert_eq!(app.page.button_offset(), ButtonOffset::ZERO);
    assert_eq!(app.no_button.geometry, before);
}

#[test]
fn no_button_animates_to_its_new_resting_place() {
    let mut harness = Harness::new();
    let mut app = seeded_app(4);
    harness.idle(&mut app, 1);

    let (cx, cy) = app.no_button.geometry.expect("drawn").center;
    let _ = harness.step(&mut app, vec![egui::Event::PointerMoved(egui::pos2(cx, cy))]);
    // Take the pointer away so the moving button cannot be re-triggered
    let _ = harness.step(&mut app, vec![egui::Event::PointerGone]);
    harness.idle(&mut app, 180);

    let offset = app.page.button_offset();
    let geometry = app.no_button.geometry.expect("still drawn");
    assert!(app.no_button.spring.is_settled());
    let (lx, ly) = geometry.layout_center();
    assert!((geometry.center.0 - (lx + offset.x)).abs() < 0.01);
    assert!((geometry.center.1 - (ly + offset.y)).abs() < 0.01);
}

#[test]
fn clicking_yes_accepts_and_disarms_no_button() {
    let mut harness = Harness::new();
    let mut app = seeded_app(5);
    harness.idle(&mut app, 1);

    let no_geometry = app.no_button.geometry.expect("drawn");
    let yes_center = app.yes_button_rect.expect("yes drawn").center();
    click_at(&mut harness, &mut app, yes_center);

    assert_eq!(app.page.view_state(), ViewState::Accepted);
    assert_eq!(app.page.button_offset(), ButtonOffset::ZERO);

    // Pointer directly over where "No" used to be
    let (cx, cy) = no_geometry.center;
    let _ = harness.step(&mut app, vec![egui::Event::PointerMoved(egui::pos2(cx, cy))]);
    harness.idle(&mut app, 60);

    assert_eq!(app.page.button_offset(), ButtonOffset::ZERO);
    assert_eq!(app.page.view_state(), ViewState::Accepted);
}

#[test]
fn question_view_unmounts_after_accepting() {
    let mut harness = Harness::new();
    let mut app = seeded_app(6);
    harness.idle(&mut app, 1);

    app.page.accept();
    harness.idle(&mut app, 60);

    assert!(app.no_button.geometry.is_none());
    assert!(app.yes_button_rect.is_none());
}

#[test]
fn unmounted_page_ignores_pointer() {
    let mut harness = Harness::new();
    let mut app = seeded_app(7);
    harness.idle(&mut app, 1);
    let (cx, cy) = app.no_button.geometry.expect("drawn").center;

    app.unmount();
    assert!(!app.is_mounted());
    let _ = harness.step(&mut app, vec![egui::Event::PointerMoved(egui::pos2(cx, cy))]);

    assert_eq!(app.page.button_offset(), ButtonOffset::ZERO);
}

#[test]
fn question_fades_in_after_mounting() {
    let mut harness = Harness::new();
    let mut app = seeded_app(8);
    harness.idle(&mut app, 1);

    assert!(app.question_opacity < 1.0);
    // Laid out while transparent so evasion works from the start
    assert!(app.no_button.geometry.is_some());

    // 0.5 s at 60 fps, past the 0.4 s fade
    harness.idle(&mut app, 30);
    assert_eq!(app.question_opacity, 1.0);
    assert_eq!(app.celebration_opacity, 0.0);
}

#[test]
fn celebration_fades_in_after_question_fades_out() {
    let mut harness = Harness::new();
    let mut app = seeded_app(9);
    harness.idle(&mut app, 31);

    app.page.accept();
    harness.idle(&mut app, 10);
    assert!(app.question_opacity > 0.0 && app.question_opacity < 1.0);
    assert_eq!(app.celebration_opacity, 0.0);

    harness.idle(&mut app, 60);
    assert_eq!(app.question_opacity, 0.0);
    assert_eq!(app.celebration_opacity, 1.0);
}

#[test]
fn default_config_greets_precious() {
    let app = ValentineApp::default();
    assert_eq!(app.config.recipient, "Precious");
    assert_eq!(app.config.evasion, EvasionConfig::default());
}
