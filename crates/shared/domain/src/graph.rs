//! The fixed power-flow graph: Grid → Charging Station → Car.
//!
//! Nodes and edges never change at runtime, so they are plain enums with `const`
//! accessors instead of a mutable graph structure.

use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

/// A point in diagram (data) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum FlowNode {
    #[strum(to_string = "Grid")]
    Grid,
    #[strum(to_string = "Charging Station")]
    ChargingStation,
    #[strum(to_string = "Car")]
    Car,
}

impl FlowNode {
    pub const ALL: [Self; 3] = [Self::Grid, Self::ChargingStation, Self::Car];

    #[must_use]
    pub const fn position(self) -> Point {
        match self {
            Self::Grid => Point::new(0.0, 3.0),
            Self::ChargingStation => Point::new(3.0, 3.0),
            Self::Car => Point::new(7.0, 3.0),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Grid => "⚡️",
            Self::ChargingStation => "🔌",
            Self::Car => "🚗🔋",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Caption drawn above the node marker.
    #[must_use]
    pub fn caption(self) -> String {
        format!("{} {}", self.label(), self.symbol())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub enum FlowEdge {
    #[strum(to_string = "Grid → Charging Station")]
    GridToStation,
    #[strum(to_string = "Charging Station → Car")]
    StationToCar,
}

impl FlowEdge {
    pub const ALL: [Self; 2] = [Self::GridToStation, Self::StationToCar];

    #[must_use]
    pub const fn endpoints(self) -> (FlowNode, FlowNode) {
        match self {
            Self::GridToStation => (FlowNode::Grid, FlowNode::ChargingStation),
            Self::StationToCar => (FlowNode::ChargingStation, FlowNode::Car),
        }
    }
}
