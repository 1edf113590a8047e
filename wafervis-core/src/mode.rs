//! Exclusive switching between automatic and manual view modes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LodResult;
use crate::lod::LodController;
use crate::types::UnitIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// The controller decides what is detailed
    Auto,
    /// The user toggles detail per unit
    Manual,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Auto => f.write_str("auto"),
            ViewMode::Manual => f.write_str("manual"),
        }
    }
}

/// Owns the current [`ViewMode`]. Exactly one mode is active; the automatic
/// one is backed by the [`LodController`].
#[derive(Debug, Clone)]
pub struct ModeCoordinator {
    mode: ViewMode,
}

impl Default for ModeCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeCoordinator {
    /// Starts in manual mode with the controller disabled.
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Manual,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch to automatic mode, carrying over the detail level the manual
    /// view was showing. Returns `false` if auto mode was already active.
    pub fn enter_auto(
        &mut self,
        controller: &mut LodController,
        focus: Option<UnitIndex>,
        tier_one: bool,
        tier_two: bool,
    ) -> LodResult<bool> {
        if self.mode == ViewMode::Auto && controller.is_enabled() {
            return Ok(false);
        }
        controller.initialize(focus, tier_one, tier_two)?;
        self.mode = ViewMode::Auto;
        log::info!("Switched to {} mode", self.mode);
        Ok(true)
    }

    /// Switch to manual mode, returning the wafer to the overview first.
    pub fn enter_manual(&mut self, controller: &mut LodController) -> bool {
        if self.mode == ViewMode::Manual {
            return false;
        }
        controller.disable();
        self.mode = ViewMode::Manual;
        log::info!("Switched to {} mode", self.mode);
        true
    }
}
