/*!
# Level of Detail (LOD) Controller

Decides which wafer units are shown in which detail tier while auto mode is
enabled:
- Overview: aggregate visuals for every unit
- DetailOne: sprite layers for the focused unit and its neighborhood
- DetailTwo: vector graphics layers for the same neighborhood

Every public transition applies all visibility changes first and then issues
exactly one redraw, including transitions composed of several steps
(`initialize`, `navigate`, `select_tier`).
*/

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{LodError, LodResult};
use crate::flags::{FeatureFlags, FeatureLayer, FlagSource};
use crate::mode::ViewMode;
use crate::presenter::{LayerPresenter, Presenters};
use crate::topology::GridTopology;
use crate::types::{DetailTier, Direction, UnitIndex};

/// The focus plus its eight surrounding units
pub const MAX_NEIGHBORHOOD: usize = 9;

/// Units promoted to detail together, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Neighborhood {
    units: Vec<UnitIndex>,
}

impl Neighborhood {
    pub fn new() -> Self {
        Self {
            units: Vec::with_capacity(MAX_NEIGHBORHOOD),
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn contains(&self, index: UnitIndex) -> bool {
        self.units.contains(&index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UnitIndex> {
        self.units.iter()
    }

    pub fn as_slice(&self) -> &[UnitIndex] {
        &self.units
    }

    fn push(&mut self, index: UnitIndex) {
        self.units.push(index);
    }
}

impl<'a> IntoIterator for &'a Neighborhood {
    type Item = &'a UnitIndex;
    type IntoIter = std::slice::Iter<'a, UnitIndex>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.iter()
    }
}

/// Compute the neighborhood of `focus`.
///
/// Order: center, N, NW, NE, E, S, SW, SE, W. Diagonals are reached through
/// the northern or southern neighbor, so they are only included when that
/// neighbor exists.
pub fn neighborhood<T: GridTopology + ?Sized>(topology: &T, focus: UnitIndex) -> Neighborhood {
    let mut hood = Neighborhood::new();
    hood.push(focus);

    if let Some(north) = topology.neighbor(focus, Direction::North) {
        hood.push(north);
        if let Some(north_west) = topology.neighbor(north, Direction::West) {
            hood.push(north_west);
        }
        if let Some(north_east) = topology.neighbor(north, Direction::East) {
            hood.push(north_east);
        }
    }
    if let Some(east) = topology.neighbor(focus, Direction::East) {
        hood.push(east);
    }
    if let Some(south) = topology.neighbor(focus, Direction::South) {
        hood.push(south);
        if let Some(south_west) = topology.neighbor(south, Direction::West) {
            hood.push(south_west);
        }
        if let Some(south_east) = topology.neighbor(south, Direction::East) {
            hood.push(south_east);
        }
    }
    if let Some(west) = topology.neighbor(focus, Direction::West) {
        hood.push(west);
    }

    hood
}

/// Mutable record owned by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomodeState {
    pub enabled: bool,
    pub focused_unit: Option<UnitIndex>,
    pub active_tier: DetailTier,
    pub neighborhood: Neighborhood,
}

/// Drives the presenters through ordered tier transitions.
///
/// Not re-entrant: callers must not trigger a transition from inside a
/// presenter callback.
pub struct LodController {
    topology: Arc<dyn GridTopology>,
    flags: Box<dyn FlagSource>,
    presenters: Presenters,
    state: AutomodeState,
}

impl LodController {
    /// Create a disabled controller with no focus.
    pub fn new(
        topology: Arc<dyn GridTopology>,
        flags: Box<dyn FlagSource>,
        presenters: Presenters,
    ) -> Self {
        Self {
            topology,
            flags,
            presenters,
            state: AutomodeState::default(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled
    }

    pub fn active_tier(&self) -> DetailTier {
        self.state.active_tier
    }

    pub fn focused_unit(&self) -> Option<UnitIndex> {
        self.state.focused_unit
    }

    pub fn current_neighborhood(&self) -> &Neighborhood {
        &self.state.neighborhood
    }

    pub fn state(&self) -> &AutomodeState {
        &self.state
    }

    /// Enter auto mode, optionally starting directly in a detail tier.
    ///
    /// `start_tier_two` only applies on top of `start_tier_one`.
    pub fn initialize(
        &mut self,
        focus: Option<UnitIndex>,
        start_tier_one: bool,
        start_tier_two: bool,
    ) -> LodResult<()> {
        if self.state.enabled {
            return Err(LodError::AlreadyEnabled);
        }
        let detail_focus = if start_tier_one {
            let focus = focus.ok_or(LodError::MissingFocus(DetailTier::DetailOne))?;
            self.check_unit(focus)?;
            Some(focus)
        } else {
            if start_tier_two {
                log::warn!("Ignoring detail tier two request without detail tier one");
            }
            None
        };

        log::debug!(
            "Initializing auto mode (focus={:?}, tier_one={}, tier_two={})",
            focus,
            start_tier_one,
            start_tier_two
        );
        self.state.enabled = true;
        self.presenters.indicator.show_mode(ViewMode::Auto);

        if let Some(focus) = detail_focus {
            self.apply_detail_one(focus, true);
            if start_tier_two {
                self.apply_detail_two();
            }
        }
        self.flush();
        Ok(())
    }

    /// Return to the overview. Safe to call in any state.
    pub fn leave(&mut self) {
        log::debug!("Leaving {} for overview", self.state.active_tier);
        self.apply_overview();
        self.flush();
    }

    /// Leave auto mode, restoring the overview first and switching the
    /// indicator back to manual.
    pub fn disable(&mut self) {
        if !self.state.enabled {
            return;
        }
        log::debug!("Disabling auto mode");
        self.apply_overview();
        self.state.enabled = false;
        self.presenters.indicator.show_mode(ViewMode::Manual);
        self.flush();
    }

    /// Show `focus` and its neighborhood in detail tier one.
    ///
    /// With `recompute_and_draw` unset the current neighborhood is reused,
    /// which is how tier two steps back down. An empty neighborhood is always
    /// recomputed.
    pub fn enter_detail_one(&mut self, focus: UnitIndex, recompute_and_draw: bool) -> LodResult<()> {
        self.ensure_enabled()?;
        self.check_unit(focus)?;

        log::debug!(
            "Entering detail one at unit {} (recompute={})",
            focus,
            recompute_and_draw
        );
        self.apply_detail_one(focus, recompute_and_draw);
        self.flush();
        Ok(())
    }

    /// Swap the sprite layers for vector graphics. Only valid in detail one.
    pub fn enter_detail_two(&mut self) -> LodResult<()> {
        self.ensure_enabled()?;
        if self.state.active_tier != DetailTier::DetailOne {
            return Err(LodError::InvalidTransition {
                from: self.state.active_tier,
                to: DetailTier::DetailTwo,
            });
        }

        log::debug!("Entering detail two at unit {:?}", self.state.focused_unit);
        self.apply_detail_two();
        self.flush();
        Ok(())
    }

    /// Move the focus one unit in `direction`, keeping the active tier.
    ///
    /// The neighbor is looked up at call time. Without one the call fails
    /// with [`LodError::NoNeighbor`] and nothing changes.
    pub fn navigate(&mut self, direction: Direction) -> LodResult<UnitIndex> {
        self.ensure_enabled()?;
        let from = match (self.state.active_tier, self.state.focused_unit) {
            (DetailTier::Overview, _) | (_, None) => {
                return Err(LodError::InvalidTransition {
                    from: self.state.active_tier,
                    to: DetailTier::DetailOne,
                })
            }
            (_, Some(focus)) => focus,
        };
        let target = self
            .topology
            .neighbor(from, direction)
            .ok_or(LodError::NoNeighbor { from, direction })?;

        log::debug!("Navigating {} from unit {} to {}", direction, from, target);
        let was_tier_two = self.state.active_tier == DetailTier::DetailTwo;
        self.apply_overview();
        self.apply_detail_one(target, true);
        if was_tier_two {
            self.apply_detail_two();
        }
        self.flush();
        Ok(target)
    }

    /// Move to `target` through the legal chain of tiers with a single
    /// redraw. `focus` is required when leaving the overview.
    ///
    /// Returns `false` if `target` is already active.
    pub fn select_tier(&mut self, target: DetailTier, focus: Option<UnitIndex>) -> LodResult<bool> {
        self.ensure_enabled()?;
        let current = self.state.active_tier;
        if current == target {
            return Ok(false);
        }

        match target {
            DetailTier::Overview => self.apply_overview(),
            DetailTier::DetailOne | DetailTier::DetailTwo => {
                let entry = match current {
                    DetailTier::Overview => {
                        let focus = focus.ok_or(LodError::MissingFocus(target))?;
                        self.check_unit(focus)?;
                        Some((focus, true))
                    }
                    // stepping down from tier two keeps the neighborhood
                    DetailTier::DetailTwo => {
                        let focus = self
                            .state
                            .focused_unit
                            .ok_or(LodError::MissingFocus(target))?;
                        Some((focus, false))
                    }
                    DetailTier::DetailOne => None,
                };
                if let Some((focus, recompute)) = entry {
                    self.apply_detail_one(focus, recompute);
                }
                if target == DetailTier::DetailTwo {
                    self.apply_detail_two();
                }
            }
        }

        log::debug!("Selected {} (was {})", target, current);
        self.flush();
        Ok(true)
    }

    fn ensure_enabled(&self) -> LodResult<()> {
        if self.state.enabled {
            Ok(())
        } else {
            Err(LodError::Disabled)
        }
    }

    fn check_unit(&self, index: UnitIndex) -> LodResult<()> {
        if self.topology.contains(index) {
            Ok(())
        } else {
            Err(LodError::UnitOutOfRange {
                index,
                range: self.topology.index_range(),
            })
        }
    }

    fn apply_overview(&mut self) {
        for &unit in &self.state.neighborhood {
            log::trace!("Restoring overview of unit {}", unit);
            self.presenters.overview.set_visible(unit, true);
        }
        self.presenters.numbers.recover();
        apply_layers(&mut *self.presenters.sprites, &FeatureFlags::none(), false);
        apply_layers(&mut *self.presenters.graphics, &FeatureFlags::none(), false);

        self.state.focused_unit = None;
        self.state.neighborhood = Neighborhood::new();
        self.state.active_tier = DetailTier::Overview;
    }

    fn apply_detail_one(&mut self, focus: UnitIndex, recompute_and_draw: bool) {
        let flags = self.flags.snapshot();
        if recompute_and_draw || self.state.neighborhood.is_empty() {
            let next = neighborhood(&*self.topology, focus);
            // units dropping out of detail get their overview back
            for &unit in &self.state.neighborhood {
                if !next.contains(unit) {
                    self.presenters.overview.set_visible(unit, true);
                }
            }
            for &unit in &next {
                log::trace!("Preparing detail content of unit {}", unit);
                self.presenters.sprites.prepare(unit, &flags);
            }
            self.state.neighborhood = next;
        }

        for &unit in &self.state.neighborhood {
            self.presenters.overview.set_visible(unit, false);
        }
        self.presenters.numbers.disable();
        apply_layers(&mut *self.presenters.sprites, &flags, true);
        apply_layers(&mut *self.presenters.graphics, &flags, false);

        self.state.active_tier = DetailTier::DetailOne;
        self.state.focused_unit = Some(focus);
    }

    fn apply_detail_two(&mut self) {
        let flags = self.flags.snapshot();
        apply_layers(&mut *self.presenters.sprites, &flags, false);
        apply_layers(&mut *self.presenters.graphics, &flags, true);
        self.state.active_tier = DetailTier::DetailTwo;
    }

    fn flush(&mut self) {
        self.presenters.stage.redraw();
    }
}

fn apply_layers<P: LayerPresenter + ?Sized>(presenter: &mut P, flags: &FeatureFlags, enabled: bool) {
    for layer in FeatureLayer::ALL {
        presenter.set_layer_visible(layer, flags.layer_visible(layer, enabled));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{FlagName, SharedFlags};
    use crate::scene::{Scene, SceneEvent};
    use crate::topology::WaferGrid;

    fn setup(columns: u32, rows: u32) -> (LodController, Scene, SharedFlags) {
        let grid = WaferGrid::rectangular(columns, rows).unwrap();
        let scene = Scene::new();
        let flags = SharedFlags::new(FeatureFlags::all());
        let controller = LodController::new(
            Arc::new(grid),
            Box::new(flags.clone()),
            scene.presenters(),
        );
        (controller, scene, flags)
    }

    fn sorted(hood: &Neighborhood) -> Vec<UnitIndex> {
        let mut units = hood.as_slice().to_vec();
        units.sort_unstable();
        units
    }

    #[test]
    fn test_neighborhood_order_interior() {
        let grid = WaferGrid::rectangular(4, 4).unwrap();
        let hood = neighborhood(&grid, 5);
        // center, N, NW, NE, E, S, SW, SE, W
        assert_eq!(hood.as_slice(), &[5, 1, 0, 2, 6, 9, 8, 10, 4]);
    }

    #[test]
    fn test_neighborhood_corner_and_edge() {
        let grid = WaferGrid::rectangular(4, 4).unwrap();
        assert_eq!(neighborhood(&grid, 0).as_slice(), &[0, 1, 4, 5]);
        assert_eq!(neighborhood(&grid, 15).len(), 4);
        // top edge, not a corner
        assert_eq!(neighborhood(&grid, 1).as_slice(), &[1, 2, 5, 4, 6, 0]);
    }

    #[test]
    fn test_neighborhood_on_single_row() {
        let grid = WaferGrid::rectangular(3, 1).unwrap();
        assert_eq!(neighborhood(&grid, 0).as_slice(), &[0, 1]);
        assert_eq!(neighborhood(&grid, 1).as_slice(), &[1, 2, 0]);
    }

    #[test]
    fn test_operations_require_enabled() {
        let (mut controller, scene, _) = setup(4, 4);
        assert_eq!(controller.enter_detail_one(5, true), Err(LodError::Disabled));
        assert_eq!(controller.enter_detail_two(), Err(LodError::Disabled));
        assert_eq!(controller.navigate(Direction::East), Err(LodError::Disabled));
        assert_eq!(scene.frames(), 0);
    }

    #[test]
    fn test_initialize_overview_only() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(None, false, false).unwrap();

        assert!(controller.is_enabled());
        assert_eq!(controller.active_tier(), DetailTier::Overview);
        assert!(controller.current_neighborhood().is_empty());
        assert_eq!(scene.mode(), Some(ViewMode::Auto));
        assert_eq!(scene.frames(), 1);
        assert_eq!(controller.initialize(None, false, false), Err(LodError::AlreadyEnabled));
    }

    #[test]
    fn test_initialize_into_tier_two_redraws_once() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(Some(5), true, true).unwrap();

        assert_eq!(controller.active_tier(), DetailTier::DetailTwo);
        assert_eq!(controller.focused_unit(), Some(5));
        assert_eq!(controller.current_neighborhood().len(), 9);
        assert_eq!(scene.frames(), 1);
        assert_eq!(scene.journal().last(), Some(&SceneEvent::Redraw));
        for layer in FeatureLayer::ALL {
            assert!(!scene.layer_visible(DetailTier::DetailOne, layer));
            assert!(scene.layer_visible(DetailTier::DetailTwo, layer));
        }
    }

    #[test]
    fn test_initialize_rejects_missing_or_invalid_focus() {
        let (mut controller, scene, _) = setup(4, 4);
        assert_eq!(
            controller.initialize(None, true, false),
            Err(LodError::MissingFocus(DetailTier::DetailOne))
        );
        assert!(matches!(
            controller.initialize(Some(99), true, false),
            Err(LodError::UnitOutOfRange { index: 99, .. })
        ));
        assert!(!controller.is_enabled());
        assert!(scene.journal().is_empty());
    }

    #[test]
    fn test_enter_detail_one_hides_overview_of_neighborhood_only() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(None, false, false).unwrap();
        controller.enter_detail_one(5, true).unwrap();

        let hood = sorted(controller.current_neighborhood());
        assert_eq!(hood, vec![0, 1, 2, 4, 5, 6, 8, 9, 10]);
        assert_eq!(scene.hidden_overview(), hood);
        for unit in 0..16 {
            assert_eq!(scene.overview_visible(unit), !hood.contains(&unit));
        }
        assert!(scene.numbers_muted());
        assert_eq!(scene.prepared_units(), hood);
    }

    #[test]
    fn test_enter_detail_two_requires_detail_one() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(None, false, false).unwrap();
        let frames = scene.frames();

        assert_eq!(
            controller.enter_detail_two(),
            Err(LodError::InvalidTransition {
                from: DetailTier::Overview,
                to: DetailTier::DetailTwo
            })
        );
        assert_eq!(controller.active_tier(), DetailTier::Overview);
        assert_eq!(scene.frames(), frames);

        controller.enter_detail_one(5, true).unwrap();
        controller.enter_detail_two().unwrap();
        assert!(controller.enter_detail_two().is_err());
        assert_eq!(controller.active_tier(), DetailTier::DetailTwo);
    }

    #[test]
    fn test_flag_gating_with_neurons_off() {
        let (mut controller, scene, flags) = setup(4, 4);
        flags.set(FlagName::Neurons, false);
        controller.initialize(None, false, false).unwrap();
        controller.enter_detail_one(5, true).unwrap();

        assert!(!scene.layer_visible(DetailTier::DetailOne, FeatureLayer::Neurons));
        for layer in FeatureLayer::ALL {
            if layer != FeatureLayer::Neurons {
                assert!(scene.layer_visible(DetailTier::DetailOne, layer), "{}", layer);
            }
            assert!(!scene.layer_visible(DetailTier::DetailTwo, layer));
        }
    }

    #[test]
    fn test_flag_change_applies_only_on_next_transition() {
        let (mut controller, scene, flags) = setup(4, 4);
        controller.initialize(Some(5), true, false).unwrap();
        assert!(scene.layer_visible(DetailTier::DetailOne, FeatureLayer::Synapses));

        flags.set(FlagName::Synapses, false);
        // still visible: gating is only re-applied by a transition
        assert!(scene.layer_visible(DetailTier::DetailOne, FeatureLayer::Synapses));

        controller.enter_detail_two().unwrap();
        assert!(!scene.layer_visible(DetailTier::DetailTwo, FeatureLayer::Synapses));
        assert!(scene.layer_visible(DetailTier::DetailTwo, FeatureLayer::Neurons));
    }

    #[test]
    fn test_prepare_uses_snapshot_flags() {
        let (mut controller, scene, flags) = setup(4, 4);
        flags.set(FlagName::SynDrivers, false);
        controller.initialize(Some(0), true, false).unwrap();

        let prepared = scene.prepared_flags(0).unwrap();
        assert!(!prepared.syn_drivers);
        assert!(prepared.synapses);
    }

    /// Turns every flag off after the first read
    struct FadingFlags {
        reads: std::rc::Rc<std::cell::Cell<usize>>,
    }

    impl FlagSource for FadingFlags {
        fn snapshot(&self) -> FeatureFlags {
            let reads = self.reads.get();
            self.reads.set(reads + 1);
            if reads == 0 {
                FeatureFlags::all()
            } else {
                FeatureFlags::none()
            }
        }
    }

    #[test]
    fn test_detail_one_reads_flags_once() {
        let scene = Scene::new();
        let reads = std::rc::Rc::new(std::cell::Cell::new(0));
        let mut controller = LodController::new(
            Arc::new(WaferGrid::rectangular(4, 4).unwrap()),
            Box::new(FadingFlags { reads: reads.clone() }),
            scene.presenters(),
        );
        controller.initialize(Some(5), true, false).unwrap();

        assert_eq!(reads.get(), 1);
        assert_eq!(scene.prepared_flags(5), Some(FeatureFlags::all()));
        for layer in FeatureLayer::ALL {
            assert!(scene.layer_visible(DetailTier::DetailOne, layer), "{}", layer);
        }
    }

    #[test]
    fn test_leave_restores_overview_and_hides_detail() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(Some(5), true, true).unwrap();
        controller.leave();

        assert_eq!(controller.active_tier(), DetailTier::Overview);
        assert_eq!(controller.focused_unit(), None);
        assert!(controller.current_neighborhood().is_empty());
        assert!(scene.hidden_overview().is_empty());
        assert!(!scene.numbers_muted());
        for layer in FeatureLayer::ALL {
            assert!(!scene.layer_visible(DetailTier::DetailOne, layer));
            assert!(!scene.layer_visible(DetailTier::DetailTwo, layer));
        }
        assert!(controller.is_enabled());
    }

    #[test]
    fn test_leave_is_idempotent() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(None, false, false).unwrap();
        controller.leave();
        controller.leave();
        assert_eq!(controller.state(), &AutomodeState {
            enabled: true,
            ..AutomodeState::default()
        });
        assert!(scene.hidden_overview().is_empty());
    }

    #[test]
    fn test_navigate_keeps_tier_two() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(Some(5), true, true).unwrap();
        let frames = scene.frames();

        assert_eq!(controller.navigate(Direction::South), Ok(9));
        assert_eq!(controller.active_tier(), DetailTier::DetailTwo);
        assert_eq!(controller.focused_unit(), Some(9));
        assert_eq!(scene.frames(), frames + 1);
        assert_eq!(
            scene.hidden_overview(),
            sorted(controller.current_neighborhood())
        );
    }

    #[test]
    fn test_navigate_without_neighbor_changes_nothing() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(Some(3), true, false).unwrap();
        let before = controller.state().clone();
        scene.take_journal();

        assert_eq!(
            controller.navigate(Direction::East),
            Err(LodError::NoNeighbor {
                from: 3,
                direction: Direction::East
            })
        );
        assert_eq!(controller.state(), &before);
        assert!(scene.journal().is_empty());
    }

    #[test]
    fn test_navigate_from_overview_is_rejected() {
        let (mut controller, _, _) = setup(4, 4);
        controller.initialize(None, false, false).unwrap();
        assert!(matches!(
            controller.navigate(Direction::North),
            Err(LodError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_recompute_in_detail_restores_dropped_units() {
        let (mut controller, scene, _) = setup(6, 6);
        controller.initialize(Some(7), true, false).unwrap();
        // jump to the far corner without leaving first
        controller.enter_detail_one(35, true).unwrap();

        let hood = sorted(controller.current_neighborhood());
        assert_eq!(hood, vec![28, 29, 34, 35]);
        assert_eq!(scene.hidden_overview(), hood);
    }

    #[test]
    fn test_tier_round_trip_has_no_drift() {
        let (mut controller, scene, flags) = setup(4, 4);
        flags.set(FlagName::RightBuses, false);
        controller.initialize(Some(10), true, false).unwrap();
        let tier_one = scene.layer_states();
        let hood = controller.current_neighborhood().clone();

        controller.enter_detail_two().unwrap();
        controller.enter_detail_one(10, false).unwrap();

        assert_eq!(scene.layer_states(), tier_one);
        assert_eq!(controller.current_neighborhood(), &hood);
        assert_eq!(scene.prepared_units().len(), hood.len());
    }

    #[test]
    fn test_select_tier_composes_with_single_redraw() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(None, false, false).unwrap();
        let frames = scene.frames();

        assert_eq!(controller.select_tier(DetailTier::DetailTwo, Some(6)), Ok(true));
        assert_eq!(controller.active_tier(), DetailTier::DetailTwo);
        assert_eq!(scene.frames(), frames + 1);

        assert_eq!(controller.select_tier(DetailTier::DetailTwo, None), Ok(false));
        assert_eq!(controller.select_tier(DetailTier::DetailOne, None), Ok(true));
        assert_eq!(controller.focused_unit(), Some(6));
        assert_eq!(controller.select_tier(DetailTier::Overview, None), Ok(true));
        assert!(controller.current_neighborhood().is_empty());
        assert_eq!(
            controller.select_tier(DetailTier::DetailOne, None),
            Err(LodError::MissingFocus(DetailTier::DetailOne))
        );
    }

    #[test]
    fn test_disable_returns_to_overview() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.initialize(Some(5), true, false).unwrap();
        controller.disable();

        assert!(!controller.is_enabled());
        assert_eq!(controller.active_tier(), DetailTier::Overview);
        assert!(scene.hidden_overview().is_empty());
        assert_eq!(scene.mode(), Some(ViewMode::Manual));
        assert_eq!(scene.frames(), 2);
        assert_eq!(scene.journal().last(), Some(&SceneEvent::Redraw));

        controller.initialize(None, false, false).unwrap();
        assert_eq!(scene.mode(), Some(ViewMode::Auto));
    }

    #[test]
    fn test_disable_when_disabled_is_silent() {
        let (mut controller, scene, _) = setup(4, 4);
        controller.disable();
        assert_eq!(scene.mode(), None);
        assert!(scene.journal().is_empty());
    }
}
