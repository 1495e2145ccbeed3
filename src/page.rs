//! The page object that owns all session state.
//!
//! [`ValentinePage`] holds the view state and the evasion controller and exposes the
//! handful of operations the UI invokes in response to input. Nothing here touches
//! egui, so the whole interaction contract can be tested directly.

use crate::evasion::{EvasionConfig, EvasionController};
use crate::types::*;
use rand::rngs::StdRng;
use rand::Rng;

/// Session state for the valentine prompt.
pub struct ValentinePage<R: Rng = StdRng> {
    view_state: ViewState,
    evasion: EvasionController<R>,
}

impl ValentinePage<StdRng> {
    /// Creates a page in the `Pending` state with an OS-seeded controller.
    pub fn new(config: EvasionConfig) -> Self {
        Self::with_controller(EvasionController::new(config))
    }
}

impl Default for ValentinePage<StdRng> {
    fn default() -> Self {
        Self::new(EvasionConfig::default())
    }
}

impl<R: Rng> ValentinePage<R> {
    /// Creates a page around an existing controller.
    pub fn with_controller(evasion: EvasionController<R>) -> Self {
        Self {
            view_state: ViewState::Pending,
            evasion,
        }
    }

    /// Which screen should be rendered.
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    /// Target displacement of the "No" button.
    pub fn button_offset(&self) -> ButtonOffset {
        self.evasion.offset()
    }

    /// Read access to the evasion controller.
    pub fn evasion(&self) -> &EvasionController<R> {
        &self.evasion
    }

    /// Accepts the valentine. Only the first call changes anything.
    ///
    /// # Returns
    ///
    /// `true` if this call performed the `Pending -> Accepted` transition.
    pub fn accept(&mut self) -> bool {
        if self.view_state == ViewState::Accepted {
            return false;
        }
        self.view_state = ViewState::Accepted;
        true
    }

    /// Pointer-move handler; runs the proximity check while the question is open.
    pub fn pointer_moved(
        &mut self,
        pointer: PointerPosition,
        geometry: Option<&ButtonGeometry>,
        viewport: Viewport,
    ) -> bool {
        self.evasion
            .on_pointer_move(pointer, geometry, viewport, self.view_state)
    }

    /// Pointer-enter handler for the "No" button.
    pub fn no_button_entered(&mut self, geometry: Option<&ButtonGeometry>, viewport: Viewport) -> bool {
        if !self.view_state.is_pending() {
            return false;
        }
        self.evasion.reposition(geometry, viewport)
    }

    /// Click handler for the "No" button. Relocates the button; never answers.
    pub fn no_button_activated(&mut self, geometry: Option<&ButtonGeometry>, viewport: Viewport) -> bool {
        self.evasion.reposition(geometry, viewport)
    }
}
