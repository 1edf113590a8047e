//! In-memory scene implementing every presenter interface
//!
//! Used for headless session replay and as the presenter double in tests.
//! All role handles share one state, and every call is appended to an
//! ordered journal.

use serde::Serialize;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::flags::{FeatureFlags, FeatureLayer};
use crate::mode::ViewMode;
use crate::presenter::{
    LayerPresenter, ModeIndicator, NumberOverlay, OverviewPresenter, Presenters, SpritePresenter,
    Stage,
};
use crate::types::{DetailTier, UnitIndex};

/// One presenter call, in the order it happened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SceneEvent {
    OverviewVisible { unit: UnitIndex, visible: bool },
    Prepared { unit: UnitIndex },
    LayerVisible { tier: DetailTier, layer: FeatureLayer, visible: bool },
    NumbersDisabled,
    NumbersRecovered,
    ModeShown { mode: ViewMode },
    Redraw,
}

#[derive(Debug, Default)]
struct SceneState {
    /// Units whose overview visuals are hidden; all others show
    hidden_overview: BTreeSet<UnitIndex>,
    prepared: BTreeMap<UnitIndex, FeatureFlags>,
    layers: BTreeMap<(DetailTier, FeatureLayer), bool>,
    numbers_muted: bool,
    mode: Option<ViewMode>,
    frames: usize,
    journal: Vec<SceneEvent>,
}

/// Cloneable handle to a shared in-memory scene
#[derive(Debug, Clone, Default)]
pub struct Scene {
    state: Rc<RefCell<SceneState>>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Boxed role handles for a [`crate::LodController`].
    pub fn presenters(&self) -> Presenters {
        Presenters {
            overview: Box::new(self.clone()),
            sprites: Box::new(self.tier(DetailTier::DetailOne)),
            graphics: Box::new(self.tier(DetailTier::DetailTwo)),
            numbers: Box::new(self.clone()),
            stage: Box::new(self.clone()),
            indicator: Box::new(self.clone()),
        }
    }

    /// Layer handle for one detail tier
    pub fn tier(&self, tier: DetailTier) -> TierLayers {
        TierLayers {
            scene: self.clone(),
            tier,
        }
    }

    pub fn overview_visible(&self, unit: UnitIndex) -> bool {
        !self.state.borrow().hidden_overview.contains(&unit)
    }

    pub fn hidden_overview(&self) -> Vec<UnitIndex> {
        self.state.borrow().hidden_overview.iter().copied().collect()
    }

    pub fn layer_visible(&self, tier: DetailTier, layer: FeatureLayer) -> bool {
        self.state
            .borrow()
            .layers
            .get(&(tier, layer))
            .copied()
            .unwrap_or(false)
    }

    pub fn visible_layers(&self, tier: DetailTier) -> Vec<FeatureLayer> {
        FeatureLayer::ALL
            .into_iter()
            .filter(|&layer| self.layer_visible(tier, layer))
            .collect()
    }

    /// Visibility of every (tier, layer) pair set so far
    pub fn layer_states(&self) -> BTreeMap<(DetailTier, FeatureLayer), bool> {
        self.state.borrow().layers.clone()
    }

    pub fn prepared_units(&self) -> Vec<UnitIndex> {
        self.state.borrow().prepared.keys().copied().collect()
    }

    /// Flags the unit was last prepared with
    pub fn prepared_flags(&self, unit: UnitIndex) -> Option<FeatureFlags> {
        self.state.borrow().prepared.get(&unit).copied()
    }

    pub fn numbers_muted(&self) -> bool {
        self.state.borrow().numbers_muted
    }

    pub fn mode(&self) -> Option<ViewMode> {
        self.state.borrow().mode
    }

    /// Number of redraws so far
    pub fn frames(&self) -> usize {
        self.state.borrow().frames
    }

    pub fn journal(&self) -> Vec<SceneEvent> {
        self.state.borrow().journal.clone()
    }

    /// Drain the journal, keeping the scene itself.
    pub fn take_journal(&self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.state.borrow_mut().journal)
    }

    fn record(&self, event: SceneEvent) {
        self.state.borrow_mut().journal.push(event);
    }
}

impl OverviewPresenter for Scene {
    fn set_visible(&mut self, index: UnitIndex, visible: bool) {
        {
            let mut state = self.state.borrow_mut();
            if visible {
                state.hidden_overview.remove(&index);
            } else {
                state.hidden_overview.insert(index);
            }
        }
        self.record(SceneEvent::OverviewVisible {
            unit: index,
            visible,
        });
    }
}

impl NumberOverlay for Scene {
    fn disable(&mut self) {
        self.state.borrow_mut().numbers_muted = true;
        self.record(SceneEvent::NumbersDisabled);
    }

    fn recover(&mut self) {
        self.state.borrow_mut().numbers_muted = false;
        self.record(SceneEvent::NumbersRecovered);
    }
}

impl Stage for Scene {
    fn redraw(&mut self) {
        self.state.borrow_mut().frames += 1;
        self.record(SceneEvent::Redraw);
    }
}

impl ModeIndicator for Scene {
    fn show_mode(&mut self, mode: ViewMode) {
        self.state.borrow_mut().mode = Some(mode);
        self.record(SceneEvent::ModeShown { mode });
    }
}

/// Layer visibility of one tier within a [`Scene`]
#[derive(Debug, Clone)]
pub struct TierLayers {
    scene: Scene,
    tier: DetailTier,
}

impl LayerPresenter for TierLayers {
    fn set_layer_visible(&mut self, layer: FeatureLayer, visible: bool) {
        self.scene
            .state
            .borrow_mut()
            .layers
            .insert((self.tier, layer), visible);
        self.scene.record(SceneEvent::LayerVisible {
            tier: self.tier,
            layer,
            visible,
        });
    }
}

impl SpritePresenter for TierLayers {
    fn prepare(&mut self, index: UnitIndex, flags: &FeatureFlags) {
        self.scene.state.borrow_mut().prepared.insert(index, *flags);
        self.scene.record(SceneEvent::Prepared { unit: index });
    }
}
