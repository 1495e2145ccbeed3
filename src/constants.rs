//! Shared application-wide constants.
//! Centralizes tweakable values used across evasion logic, rendering and animation.

// Evasion
/// Minimum margin (in points) kept between the "No" button's center and the viewport edges.
pub const EDGE_PADDING: f32 = 100.0;
/// Extra reach beyond the button's half-width that counts as "too close".
/// 19 points is roughly 5mm on a 96 DPI display.
pub const PROXIMITY_MARGIN: f32 = 19.0;

// Button layout
/// Size of both answer buttons.
pub const ANSWER_BUTTON_SIZE: (f32, f32) = (180.0, 72.0);
/// Horizontal gap between the "Yes" and "No" buttons.
pub const ANSWER_BUTTON_GAP: f32 = 32.0;
/// Corner radius of the answer buttons.
pub const ANSWER_BUTTON_CORNER_RADIUS: u8 = 16;
/// Font size of the answer button labels.
pub const ANSWER_FONT_SIZE: f32 = 24.0;

// Question view
/// Default name used in the greeting.
pub const DEFAULT_RECIPIENT: &str = "Precious";
/// Font size of the greeting heading.
pub const HEADING_FONT_SIZE: f32 = 40.0;
/// Vertical space between the heading and the buttons.
pub const HEADING_GAP: f32 = 48.0;

// Spring animation for the "No" button offset
/// Spring stiffness (per unit mass).
pub const SPRING_STIFFNESS: f32 = 400.0;
/// Spring damping coefficient (per unit mass).
pub const SPRING_DAMPING: f32 = 25.0;
/// Distance and speed below which the spring snaps to rest.
pub const SPRING_REST_EPSILON: f32 = 0.5;
/// Integration substep in seconds.
pub const SPRING_SUBSTEP: f32 = 1.0 / 240.0;
/// Upper bound on a single frame's delta time fed to the spring.
pub const SPRING_MAX_FRAME_DT: f32 = 1.0 / 20.0;

// Screen transitions
/// Fade duration for entering/leaving the question view, in seconds.
pub const SCREEN_FADE_SECONDS: f32 = 0.4;
/// Period of the bouquet pulse on the celebration screen, in seconds.
pub const PULSE_PERIOD_SECONDS: f64 = 2.0;
/// Peak scale of the bouquet pulse.
pub const PULSE_PEAK_SCALE: f32 = 1.2;
/// Largest tilt of the bouquet wobble, in degrees.
pub const WOBBLE_DEGREES: f32 = 10.0;
