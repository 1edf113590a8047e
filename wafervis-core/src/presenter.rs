//! Interfaces of the rendering collaborators driven by the controller

use crate::flags::{FeatureFlags, FeatureLayer};
use crate::mode::ViewMode;
use crate::types::UnitIndex;

/// Coarse per-unit aggregate visuals.
pub trait OverviewPresenter {
    fn set_visible(&mut self, index: UnitIndex, visible: bool);
}

/// Per-layer visibility of one detail tier.
pub trait LayerPresenter {
    fn set_layer_visible(&mut self, layer: FeatureLayer, visible: bool);
}

/// The sprite tier, which must materialize a unit's content before it is
/// first displayed.
pub trait SpritePresenter: LayerPresenter {
    fn prepare(&mut self, index: UnitIndex, flags: &FeatureFlags);
}

/// Unit index labels, muted while detail is shown.
pub trait NumberOverlay {
    fn disable(&mut self);
    fn recover(&mut self);
}

/// Flushes all pending visibility changes to the screen.
pub trait Stage {
    fn redraw(&mut self);
}

/// UI chrome showing whether automatic or manual mode is active.
pub trait ModeIndicator {
    fn show_mode(&mut self, mode: ViewMode);
}

/// The collaborators owned by a [`crate::LodController`].
pub struct Presenters {
    pub overview: Box<dyn OverviewPresenter>,
    /// Detail tier one
    pub sprites: Box<dyn SpritePresenter>,
    /// Detail tier two
    pub graphics: Box<dyn LayerPresenter>,
    pub numbers: Box<dyn NumberOverlay>,
    pub stage: Box<dyn Stage>,
    pub indicator: Box<dyn ModeIndicator>,
}
