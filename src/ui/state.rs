//! Application state structures.
//!
//! This module contains the app configuration and the main [`ValentineApp`] struct
//! that ties the page state to its egui rendering collaborators.

use super::animation::SpringAnimator;
use super::pointer::PointerSubscription;
use crate::constants::DEFAULT_RECIPIENT;
use crate::evasion::EvasionConfig;
use crate::page::ValentinePage;
use crate::types::*;

/// Runtime configuration for the app.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Name greeted in the question heading
    pub recipient: String,
    /// Evasion tunables for the "No" button
    pub evasion: EvasionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_owned(),
            evasion: EvasionConfig::default(),
        }
    }
}

/// Rendering state of the "No" button.
#[derive(Default)]
pub struct NoButtonState {
    /// Eases the displayed offset towards the page's target offset
    pub spring: SpringAnimator,
    /// Geometry from the most recent frame in which the button was drawn
    pub geometry: Option<ButtonGeometry>,
    /// Whether the pointer was over the button last frame (for enter detection)
    pub hovered: bool,
}

/// The main application structure.
///
/// Owns the page state and everything the egui layer needs to render it. This struct
/// implements the `eframe::App` trait.
pub struct ValentineApp {
    /// Configuration the app was created with
    pub config: AppConfig,
    /// View state and evasion controller
    pub page: ValentinePage,
    /// Pointer-move subscription, held while the page is mounted
    pub pointer: Option<PointerSubscription>,
    /// Animated "No" button
    pub no_button: NoButtonState,
    /// Rect of the "Yes" button from the last frame it was drawn
    pub yes_button_rect: Option<eframe::egui::Rect>,
    /// Set after the first frame; the question fades in from there
    pub has_drawn_frame: bool,
    /// Question view opacity from the last frame
    pub question_opacity: f32,
    /// Celebration view opacity from the last frame
    pub celebration_opacity: f32,
}

impl Default for ValentineApp {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl ValentineApp {
    /// Creates and mounts the app with an OS-seeded page.
    pub fn new(config: AppConfig) -> Self {
        let page = ValentinePage::new(config.evasion);
        Self::with_page(config, page)
    }

    /// Creates and mounts the app around an existing page.
    pub fn with_page(config: AppConfig, page: ValentinePage) -> Self {
        log::info!("mounting valentine page for {}", config.recipient);
        Self {
            config,
            page,
            pointer: Some(PointerSubscription::acquire("valentine page")),
            no_button: NoButtonState::default(),
            yes_button_rect: None,
            has_drawn_frame: false,
            question_opacity: 0.0,
            celebration_opacity: 0.0,
        }
    }

    /// Whether the page is currently subscribed to pointer movement.
    pub fn is_mounted(&self) -> bool {
        self.pointer.is_some()
    }

    /// Releases the pointer subscription. Later frames no longer run the proximity check.
    pub fn unmount(&mut self) {
        if self.pointer.take().is_some() {
            log::info!("unmounting valentine page");
        }
    }
}
