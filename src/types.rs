//! Core data types for the valentine page.
//!
//! These types are deliberately free of any egui dependency so the evasion logic
//! can be exercised without a rendering context. The UI layer converts to and
//! from egui's geometry types at its boundary.

/// Which screen the page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// The question is still open; the "No" button is armed.
    #[default]
    Pending,
    /// "Yes" was chosen. Terminal for the session.
    Accepted,
}

impl ViewState {
    /// Whether the evasion controller should react to pointer events.
    pub fn is_pending(self) -> bool {
        matches!(self, ViewState::Pending)
    }
}

/// Pointer coordinates in viewport points, as reported by the latest pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl PointerPosition {
    /// Creates a pointer position.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to a point.
    pub fn distance_to(self, x: f32, y: f32) -> f32 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }
}

/// Displacement of the "No" button from its static layout position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonOffset {
    /// Horizontal displacement
    pub x: f32,
    /// Vertical displacement
    pub y: f32,
}

impl ButtonOffset {
    /// No displacement.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Creates an offset.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Viewport size in points, sampled when a reposition is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width
    pub width: f32,
    /// Viewport height
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport of the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Live rendered geometry of the "No" button.
///
/// `center`, `width` and `height` describe the bounding box as it was last drawn.
/// `applied_offset` is the displacement that was in effect for that drawing, which
/// can lag behind the target offset while the spring animation is still moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    /// Absolute center of the rendered button
    pub center: (f32, f32),
    /// Rendered width
    pub width: f32,
    /// Rendered height
    pub height: f32,
    /// Displacement applied to the layout position when it was rendered
    pub applied_offset: ButtonOffset,
}

impl ButtonGeometry {
    /// Builds geometry from a bounding box given by its top-left corner and size.
    pub fn from_bounds(left: f32, top: f32, width: f32, height: f32, applied_offset: ButtonOffset) -> Self {
        Self {
            center: (left + width / 2.0, top + height / 2.0),
            width,
            height,
            applied_offset,
        }
    }

    /// The button's static layout center, i.e. where it would sit with no displacement.
    pub fn layout_center(&self) -> (f32, f32) {
        (
            self.center.0 - self.applied_offset.x,
            self.center.1 - self.applied_offset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_starts_pending() {
        assert_eq!(ViewState::default(), ViewState::Pending);
        assert!(ViewState::Pending.is_pending());
        assert!(!ViewState::Accepted.is_pending());
    }

    #[test]
    fn geometry_from_bounds_computes_center() {
        let geometry = ButtonGeometry::from_bounds(400.0, 364.0, 200.0, 72.0, ButtonOffset::ZERO);
        assert_eq!(geometry.center, (500.0, 400.0));
    }

    #[test]
    fn layout_center_removes_applied_offset() {
        let geometry =
            ButtonGeometry::from_bounds(100.0, 50.0, 200.0, 100.0, ButtonOffset::new(-300.0, -250.0));
        assert_eq!(geometry.layout_center(), (500.0, 350.0));
    }

    #[test]
    fn pointer_distance_is_euclidean() {
        let p = PointerPosition::new(3.0, 4.0);
        assert!((p.distance_to(0.0, 0.0) - 5.0).abs() < 1e-6);
    }
}
