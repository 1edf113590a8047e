//! Headless UI session: a controller driving an in-memory scene

use anyhow::Result;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use wafervis_core::{
    closest_unit, drag_directions, DetailTier, FeatureFlags, FeatureLayer, FlagName, LodController,
    LodResult, ModeCoordinator, Point, Scene, SharedFlags, UnitGeometry, UnitIndex, ViewMode,
    WaferGrid, ZoomDriver,
};

use crate::config::Config;
use crate::script::Command;

/// Observable state after a command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub mode: ViewMode,
    pub enabled: bool,
    pub tier: DetailTier,
    pub focus: Option<UnitIndex>,
    pub neighborhood: Vec<UnitIndex>,
    pub scale: f64,
    pub frames: usize,
    pub numbers_muted: bool,
    pub sprite_layers: Vec<FeatureLayer>,
    pub graphics_layers: Vec<FeatureLayer>,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mode={} tier={}", self.mode, self.tier)?;
        if let Some(focus) = self.focus {
            write!(f, " focus={}", focus)?;
        }
        write!(
            f,
            " neighborhood={:?} scale={} frames={}",
            self.neighborhood, self.scale, self.frames
        )
    }
}

pub struct Session {
    grid: Arc<WaferGrid>,
    geometry: UnitGeometry,
    scene: Scene,
    flags: SharedFlags,
    controller: LodController,
    modes: ModeCoordinator,
    zoom: ZoomDriver,
    scale: f64,
    center: Point,
}

impl Session {
    /// Build a session in manual mode, viewing the whole wafer at scale 1.
    pub fn new(config: &Config) -> Result<Self> {
        let grid = Arc::new(config.build_grid()?);
        let scene = Scene::new();
        let flags = SharedFlags::new(config.flags);
        let controller = LodController::new(grid.clone(), Box::new(flags.clone()), scene.presenters());
        let center = wafer_center(&grid, &config.geometry);
        let thresholds = config.zoom_thresholds();

        log::debug!(
            "Session on {} units, detail thresholds {:.2}/{:.2}",
            grid.len(),
            thresholds.detail_one,
            thresholds.detail_two
        );
        Ok(Self {
            grid,
            geometry: config.geometry,
            scene,
            flags,
            controller,
            modes: ModeCoordinator::new(),
            zoom: ZoomDriver::new(thresholds),
            scale: 1.0,
            center,
        })
    }

    pub fn execute(&mut self, command: &Command) -> LodResult<()> {
        log::debug!("Executing '{}'", command);
        match *command {
            Command::Auto { focus, tier_one, tier_two } => {
                self.modes
                    .enter_auto(&mut self.controller, focus, tier_one, tier_two)?;
            }
            Command::Manual => {
                self.modes.enter_manual(&mut self.controller);
            }
            Command::Zoom { scale, unit } => {
                self.scale = scale;
                let hint = unit.or_else(|| closest_unit(&self.grid, &self.geometry, self.center));
                self.zoom.on_scale(&mut self.controller, scale, hint)?;
            }
            Command::Nav(direction) => {
                self.controller.navigate(direction)?;
            }
            Command::Drag { dx, dy, cx, cy } => {
                self.center = Point::new(cx, cy);
                if let (true, Some(focus)) = (self.controller.is_enabled(), self.controller.focused_unit()) {
                    let moves = drag_directions(
                        &self.grid,
                        &self.geometry,
                        focus,
                        self.center,
                        self.scale,
                        (dx, dy),
                    );
                    for direction in moves {
                        self.controller.navigate(direction)?;
                    }
                }
            }
            Command::One(unit) => self.controller.enter_detail_one(unit, true)?,
            Command::Two => self.controller.enter_detail_two()?,
            Command::Leave => self.controller.leave(),
            Command::Flag { name, value } => self.flags.set(name, value),
            Command::Show => {}
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.modes.mode(),
            enabled: self.controller.is_enabled(),
            tier: self.controller.active_tier(),
            focus: self.controller.focused_unit(),
            neighborhood: self.controller.current_neighborhood().as_slice().to_vec(),
            scale: self.scale,
            frames: self.scene.frames(),
            numbers_muted: self.scene.numbers_muted(),
            sprite_layers: self.scene.visible_layers(DetailTier::DetailOne),
            graphics_layers: self.scene.visible_layers(DetailTier::DetailTwo),
        }
    }

    /// Multi-line report used by `show`
    pub fn describe(&self) -> String {
        let snapshot = self.snapshot();
        let flags: FeatureFlags = self.flags.get();
        let mut report = format!("{}\n", snapshot);
        report.push_str(&format!("  sprite layers:   {}\n", join(&snapshot.sprite_layers)));
        report.push_str(&format!("  graphics layers: {}\n", join(&snapshot.graphics_layers)));
        report.push_str(&format!(
            "  hidden overview: {}\n",
            self.scene.hidden_overview().len()
        ));
        report.push_str(&format!("  numbers muted:   {}\n", snapshot.numbers_muted));
        let disabled: Vec<_> = FlagName::ALL
            .into_iter()
            .filter(|&name| !flags.get(name))
            .collect();
        report.push_str(&format!("  flags off:       {}", join(&disabled)));
        report
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn controller(&self) -> &LodController {
        &self.controller
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Middle of the bounding box of all unit centers
fn wafer_center(grid: &WaferGrid, geometry: &UnitGeometry) -> Point {
    let (mut min, mut max) = (
        Point::new(f64::INFINITY, f64::INFINITY),
        Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    );
    for (_, pos) in grid.iter() {
        let center = geometry.unit_center(pos);
        min = Point::new(min.x.min(center.x), min.y.min(center.y));
        max = Point::new(max.x.max(center.x), max.y.max(center.y));
    }
    Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
}
