//! Wafervis Core Library
//!
//! Grid topology, feature flags, presenter interfaces and the level-of-detail
//! controller that decides which wafer units are drawn in which detail tier.

pub mod types;
pub mod error;
pub mod topology;
pub mod flags;
pub mod presenter;
pub mod lod;
pub mod zoom;
pub mod geometry;
pub mod mode;
pub mod scene;

// Re-export commonly used types and functions
pub use types::{DetailTier, Direction, GridPos, UnitIndex};
pub use error::{GridError, LodError, LodResult, ParseNameError};
pub use topology::{GridTopology, IndexRange, RowSpan, WaferGrid};
pub use flags::{FeatureFlags, FeatureLayer, FlagName, FlagSource, SharedFlags};
pub use presenter::{
    LayerPresenter, ModeIndicator, NumberOverlay, OverviewPresenter, Presenters, SpritePresenter,
    Stage,
};
pub use lod::{neighborhood, AutomodeState, LodController, Neighborhood, MAX_NEIGHBORHOOD};
pub use zoom::{ZoomDriver, ZoomThresholds};
pub use geometry::{closest_unit, drag_directions, Point, UnitGeometry};
pub use mode::{ModeCoordinator, ViewMode};
pub use scene::{Scene, SceneEvent};

/// Version information for the wafervis core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
