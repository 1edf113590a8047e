//! Scale-driven tier selection
//!
//! Thresholds follow the DetailOne/DetailTwo split of the stage: detail one
//! starts once a single unit (plus an edge above and below) fills the canvas
//! height, detail two at a fixed multiple of that.

use serde::{Deserialize, Serialize};

use crate::error::LodResult;
use crate::geometry::UnitGeometry;
use crate::lod::LodController;
use crate::types::{DetailTier, UnitIndex};

/// Detail two threshold as a multiple of the detail one threshold
pub const DETAIL_TWO_FACTOR: f64 = 8.0;

/// Scale factors at which the detail tiers begin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomThresholds {
    pub detail_one: f64,
    pub detail_two: f64,
}

impl Default for ZoomThresholds {
    fn default() -> Self {
        Self {
            detail_one: 4.0,
            detail_two: 4.0 * DETAIL_TWO_FACTOR,
        }
    }
}

impl ZoomThresholds {
    pub fn new(detail_one: f64, detail_two: f64) -> Self {
        Self {
            detail_one,
            detail_two,
        }
    }

    /// Thresholds for a canvas of `canvas_height` pixels.
    pub fn for_canvas(canvas_height: f64, geometry: &UnitGeometry) -> Self {
        let detail_one = canvas_height / (geometry.unit_height + 2.0 * geometry.edge());
        Self::new(detail_one, detail_one * DETAIL_TWO_FACTOR)
    }

    pub fn tier_for_scale(&self, scale: f64) -> DetailTier {
        if scale < self.detail_one {
            DetailTier::Overview
        } else if scale < self.detail_two {
            DetailTier::DetailOne
        } else {
            DetailTier::DetailTwo
        }
    }
}

/// Maps stage zoom changes onto controller transitions.
#[derive(Debug, Clone, Default)]
pub struct ZoomDriver {
    thresholds: ZoomThresholds,
}

impl ZoomDriver {
    pub fn new(thresholds: ZoomThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ZoomThresholds {
        &self.thresholds
    }

    /// React to the stage being zoomed to `scale`.
    ///
    /// `focus_hint` is the hovered (or closest) unit and is only consulted
    /// when leaving the overview. A disabled controller is left alone.
    pub fn on_scale(
        &self,
        controller: &mut LodController,
        scale: f64,
        focus_hint: Option<UnitIndex>,
    ) -> LodResult<DetailTier> {
        if !controller.is_enabled() {
            return Ok(controller.active_tier());
        }
        let target = self.thresholds.tier_for_scale(scale);
        if controller.select_tier(target, focus_hint)? {
            log::debug!("Scale {:.2} selected {}", scale, target);
        }
        Ok(controller.active_tier())
    }
}
