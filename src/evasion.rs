//! Pointer-proximity evasion for the "No" button.
//!
//! The controller watches pointer positions relative to the button's live geometry
//! and, when the pointer gets too close, picks a new random resting place inside the
//! padded viewport. It only ever produces a target [`ButtonOffset`]; moving the
//! button there smoothly is the rendering layer's job.

use crate::constants::{EDGE_PADDING, PROXIMITY_MARGIN};
use crate::types::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Tunables for the evasion behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvasionConfig {
    /// Minimum distance between the button's new center and any viewport edge
    pub padding: f32,
    /// Reach beyond the button's half-width that triggers evasion
    pub proximity_margin: f32,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            padding: EDGE_PADDING,
            proximity_margin: PROXIMITY_MARGIN,
        }
    }
}

/// Decides when the "No" button flees and where it goes.
///
/// Generic over the random source so tests can use a seeded generator.
pub struct EvasionController<R: Rng = StdRng> {
    config: EvasionConfig,
    /// Current target displacement from the layout position
    offset: ButtonOffset,
    rng: R,
}

impl EvasionController<StdRng> {
    /// Creates a controller seeded from the operating system's entropy source.
    pub fn new(config: EvasionConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl Default for EvasionController<StdRng> {
    fn default() -> Self {
        Self::new(EvasionConfig::default())
    }
}

impl<R: Rng> EvasionController<R> {
    /// Creates a controller drawing positions from the given generator.
    pub fn with_rng(config: EvasionConfig, rng: R) -> Self {
        Self {
            config,
            offset: ButtonOffset::ZERO,
            rng,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &EvasionConfig {
        &self.config
    }

    /// The target displacement the button should animate towards.
    pub fn offset(&self) -> ButtonOffset {
        self.offset
    }

    /// Proximity radius around the button's center for the given geometry.
    pub fn threshold(&self, geometry: &ButtonGeometry) -> f32 {
        self.config.proximity_margin + geometry.width / 2.0
    }

    /// Returns true when the pointer is strictly inside the proximity radius.
    pub fn is_within_reach(&self, pointer: PointerPosition, geometry: &ButtonGeometry) -> bool {
        let (cx, cy) = geometry.center;
        pointer.distance_to(cx, cy) < self.threshold(geometry)
    }

    /// Handles a pointer-move event.
    ///
    /// The view state is checked on every call, so a controller that was armed
    /// while the question was open goes quiet as soon as the answer is accepted.
    ///
    /// # Arguments
    ///
    /// * `pointer` - Pointer position from the event
    /// * `geometry` - Live geometry of the button, `None` if it has not been rendered yet
    /// * `viewport` - Current viewport size
    /// * `view_state` - Current view state
    ///
    /// # Returns
    ///
    /// `true` if the button was repositioned.
    pub fn on_pointer_move(
        &mut self,
        pointer: PointerPosition,
        geometry: Option<&ButtonGeometry>,
        viewport: Viewport,
        view_state: ViewState,
    ) -> bool {
        if !view_state.is_pending() {
            return false;
        }
        let Some(geometry) = geometry else {
            return false;
        };
        if !self.is_within_reach(pointer, geometry) {
            return false;
        }
        self.reposition(Some(geometry), viewport)
    }

    /// Moves the button to a random spot inside the padded viewport.
    ///
    /// The new offset is chosen so that the button's absolute center lands on the
    /// sampled target once the animation settles. Without geometry this is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if a new offset was computed.
    pub fn reposition(&mut self, geometry: Option<&ButtonGeometry>, viewport: Viewport) -> bool {
        let Some(geometry) = geometry else {
            return false;
        };
        let (layout_x, layout_y) = geometry.layout_center();
        let (target_x, target_y) = self.sample_target(viewport);
        self.offset = ButtonOffset::new(target_x - layout_x, target_y - layout_y);
        true
    }

    /// Samples an absolute center uniformly within the padded viewport, per axis.
    pub fn sample_target(&mut self, viewport: Viewport) -> (f32, f32) {
        let padding = self.config.padding;
        let x = sample_axis(&mut self.rng, viewport.width, padding);
        let y = sample_axis(&mut self.rng, viewport.height, padding);
        (x, y)
    }
}

/// Picks a coordinate in `[padding, extent - padding)`.
///
/// An axis too small to honour the padding on both sides collapses to its midpoint.
fn sample_axis<R: Rng>(rng: &mut R, extent: f32, padding: f32) -> f32 {
    let span = extent - 2.0 * padding;
    if span > 0.0 {
        padding + rng.random::<f32>() * span
    } else {
        extent / 2.0
    }
}
