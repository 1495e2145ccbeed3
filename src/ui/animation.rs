//! Spring animation for the "No" button's displacement.
//!
//! The evasion logic hands out target offsets; this animator eases the rendered
//! offset towards the latest target with a damped spring instead of snapping.

use crate::constants::*;
use eframe::egui::Vec2;

/// Damped spring integrating a 2D position towards a target.
#[derive(Debug, Clone)]
pub struct SpringAnimator {
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    stiffness: f32,
    damping: f32,
}

impl Default for SpringAnimator {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl SpringAnimator {
    /// Creates an animator at rest at the origin.
    ///
    /// # Arguments
    ///
    /// * `stiffness` - Spring constant per unit mass
    /// * `damping` - Damping coefficient per unit mass
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            target: Vec2::ZERO,
            stiffness,
            damping,
        }
    }

    /// Sets the point the spring pulls towards. Current velocity is kept.
    pub fn set_target(&mut self, target: Vec2) {
        self.target = target;
    }

    /// The current (displayed) position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the spring is at rest on its target.
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == Vec2::ZERO
    }

    /// Advances the simulation by `dt` seconds and returns the new position.
    ///
    /// Large frame gaps are clamped so a stalled tab does not fling the button.
    pub fn step(&mut self, dt: f32) -> Vec2 {
        if self.is_settled() {
            return self.position;
        }

        let mut remaining = dt.clamp(0.0, SPRING_MAX_FRAME_DT);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP);
            let acceleration =
                (self.target - self.position) * self.stiffness - self.velocity * self.damping;
            // Semi-implicit Euler
            self.velocity += acceleration * h;
            self.position += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.position).length() < SPRING_REST_EPSILON
            && self.velocity.length() < SPRING_REST_EPSILON
        {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
        }
        self.position
    }
}

/// Bouquet scale over one pulse period; `phase` runs from 0 to 1 and the scale goes
/// 1 -> peak -> 1.
pub fn pulse_scale(phase: f32) -> f32 {
    1.0 + (PULSE_PEAK_SCALE - 1.0) * (phase.clamp(0.0, 1.0) * std::f32::consts::PI).sin()
}

/// Bouquet tilt in radians over one period: 0, +max, -max, +max, 0 at evenly spaced
/// keyframes, linearly interpolated.
pub fn wobble_angle(phase: f32) -> f32 {
    const KEYFRAMES: [f32; 5] = [0.0, 1.0, -1.0, 1.0, 0.0];
    let segments = (KEYFRAMES.len() - 1) as f32;
    let t = phase.clamp(0.0, 1.0) * segments;
    let index = (t.floor() as usize).min(KEYFRAMES.len() - 2);
    let local = t - index as f32;
    let factor = KEYFRAMES[index] + (KEYFRAMES[index + 1] - KEYFRAMES[index]) * local;
    (WOBBLE_DEGREES * factor).to_radians()
}
