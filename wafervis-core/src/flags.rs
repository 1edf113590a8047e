//! Feature flags and the display layers they gate

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::ParseNameError;

/// Point-in-time values of the user's feature toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub synapses: bool,
    pub syn_drivers: bool,
    pub neurons: bool,
    pub left_buses: bool,
    pub right_buses: bool,
    pub horizontal_buses: bool,
    pub repeaters: bool,
    pub syn_grids: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl FeatureFlags {
    pub fn all() -> Self {
        Self::uniform(true)
    }

    pub fn none() -> Self {
        Self::uniform(false)
    }

    fn uniform(value: bool) -> Self {
        Self {
            synapses: value,
            syn_drivers: value,
            neurons: value,
            left_buses: value,
            right_buses: value,
            horizontal_buses: value,
            repeaters: value,
            syn_grids: value,
        }
    }

    pub fn get(&self, name: FlagName) -> bool {
        match name {
            FlagName::Synapses => self.synapses,
            FlagName::SynDrivers => self.syn_drivers,
            FlagName::Neurons => self.neurons,
            FlagName::LeftBuses => self.left_buses,
            FlagName::RightBuses => self.right_buses,
            FlagName::HorizontalBuses => self.horizontal_buses,
            FlagName::Repeaters => self.repeaters,
            FlagName::SynGrids => self.syn_grids,
        }
    }

    pub fn set(&mut self, name: FlagName, value: bool) {
        let slot = match name {
            FlagName::Synapses => &mut self.synapses,
            FlagName::SynDrivers => &mut self.syn_drivers,
            FlagName::Neurons => &mut self.neurons,
            FlagName::LeftBuses => &mut self.left_buses,
            FlagName::RightBuses => &mut self.right_buses,
            FlagName::HorizontalBuses => &mut self.horizontal_buses,
            FlagName::Repeaters => &mut self.repeaters,
            FlagName::SynGrids => &mut self.syn_grids,
        };
        *slot = value;
    }

    /// Builder-style [`FeatureFlags::set`].
    pub fn with(mut self, name: FlagName, value: bool) -> Self {
        self.set(name, value);
        self
    }

    /// Whether `layer` shows while its tier is `tier_enabled`. A disabled
    /// tier hides every layer regardless of flags.
    pub fn layer_visible(&self, layer: FeatureLayer, tier_enabled: bool) -> bool {
        tier_enabled && self.get(layer.flag())
    }
}

/// Names of the feature toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagName {
    Synapses,
    SynDrivers,
    Neurons,
    LeftBuses,
    RightBuses,
    HorizontalBuses,
    Repeaters,
    SynGrids,
}

impl FlagName {
    pub const ALL: [FlagName; 8] = [
        FlagName::Synapses,
        FlagName::SynDrivers,
        FlagName::Neurons,
        FlagName::LeftBuses,
        FlagName::RightBuses,
        FlagName::HorizontalBuses,
        FlagName::Repeaters,
        FlagName::SynGrids,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FlagName::Synapses => "synapses",
            FlagName::SynDrivers => "syn_drivers",
            FlagName::Neurons => "neurons",
            FlagName::LeftBuses => "left_buses",
            FlagName::RightBuses => "right_buses",
            FlagName::HorizontalBuses => "horizontal_buses",
            FlagName::Repeaters => "repeaters",
            FlagName::SynGrids => "syn_grids",
        }
    }
}

impl fmt::Display for FlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlagName {
    type Err = ParseNameError;

    /// Accepts snake_case (`left_buses`) as well as camelCase (`leftBuses`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        FlagName::ALL
            .into_iter()
            .find(|name| name.as_str().replace('_', "") == normalized)
            .ok_or_else(|| ParseNameError::new("feature flag", s))
    }
}

/// Display layers shared by both detail tiers.
///
/// `syn_drivers` has no layer of its own; it only affects which content is
/// prepared for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureLayer {
    Synapses,
    Neurons,
    Repeaters,
    LeftBuses,
    RightBuses,
    HorizontalBuses,
    SynGrids,
}

impl FeatureLayer {
    pub const ALL: [FeatureLayer; 7] = [
        FeatureLayer::Synapses,
        FeatureLayer::Neurons,
        FeatureLayer::Repeaters,
        FeatureLayer::LeftBuses,
        FeatureLayer::RightBuses,
        FeatureLayer::HorizontalBuses,
        FeatureLayer::SynGrids,
    ];

    /// The flag gating this layer
    pub fn flag(self) -> FlagName {
        match self {
            FeatureLayer::Synapses => FlagName::Synapses,
            FeatureLayer::Neurons => FlagName::Neurons,
            FeatureLayer::Repeaters => FlagName::Repeaters,
            FeatureLayer::LeftBuses => FlagName::LeftBuses,
            FeatureLayer::RightBuses => FlagName::RightBuses,
            FeatureLayer::HorizontalBuses => FlagName::HorizontalBuses,
            FeatureLayer::SynGrids => FlagName::SynGrids,
        }
    }
}

impl fmt::Display for FeatureLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag().as_str())
    }
}

/// Read-only access to the user's current flag values.
pub trait FlagSource {
    fn snapshot(&self) -> FeatureFlags;
}

/// A fixed flag set.
impl FlagSource for FeatureFlags {
    fn snapshot(&self) -> FeatureFlags {
        *self
    }
}

/// Cloneable handle to a mutable flag set. Every clone observes the same
/// values, so a UI can toggle flags while the controller holds another clone.
#[derive(Debug, Clone, Default)]
pub struct SharedFlags {
    inner: Rc<Cell<FeatureFlags>>,
}

impl SharedFlags {
    pub fn new(flags: FeatureFlags) -> Self {
        Self {
            inner: Rc::new(Cell::new(flags)),
        }
    }

    pub fn get(&self) -> FeatureFlags {
        self.inner.get()
    }

    pub fn set(&self, name: FlagName, value: bool) {
        let mut flags = self.inner.get();
        flags.set(name, value);
        self.inner.set(flags);
    }
}

impl FlagSource for SharedFlags {
    fn snapshot(&self) -> FeatureFlags {
        self.inner.get()
    }
}
