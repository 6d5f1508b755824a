use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};
use v2g_domain::FlowEdge;

/// Line width of a plain edge.
pub const DEFAULT_EDGE_WIDTH: u8 = 1;
/// Line width of an emphasized edge.
pub const EMPHASIZED_EDGE_WIDTH: u8 = 3;

/// Overall compatibility of a selection, shown as the diagram's border colour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Classification {
    /// Not enough has been selected to decide.
    #[default]
    Neutral,
    Compatible,
    Incompatible,
}

impl Classification {
    #[must_use]
    pub const fn border_color(self) -> LineColor {
        match self {
            Self::Neutral => LineColor::Black,
            Self::Compatible => LineColor::Green,
            Self::Incompatible => LineColor::Red,
        }
    }
}

/// Human-readable warnings attached to an incompatible verdict.
///
/// The texts are user-facing and kept verbatim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum Warning {
    #[serde(rename = "Charger type doesn't compatible with car")]
    #[strum(to_string = "Charger type doesn't compatible with car")]
    ChargerIncompatibleWithCar,
    #[serde(rename = "Tesla not compatible with discharging action")]
    #[strum(to_string = "Tesla not compatible with discharging action")]
    TeslaDischarging,
    #[serde(rename = "Discharging action not supported with this charger type")]
    #[strum(to_string = "Discharging action not supported with this charger type")]
    DischargingUnsupported,
}

impl Warning {
    #[must_use]
    pub fn text(self) -> &'static str {
        self.into()
    }
}

/// The derived compatibility verdict. Never stored, always recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Verdict {
    pub classification: Classification,
    pub message: Option<Warning>,
}

impl Verdict {
    #[must_use]
    pub const fn neutral() -> Self {
        Self { classification: Classification::Neutral, message: None }
    }

    #[must_use]
    pub const fn compatible() -> Self {
        Self { classification: Classification::Compatible, message: None }
    }

    #[must_use]
    pub const fn incompatible(warning: Warning) -> Self {
        Self { classification: Classification::Incompatible, message: Some(warning) }
    }

    #[must_use]
    pub const fn is_incompatible(&self) -> bool {
        matches!(self.classification, Classification::Incompatible)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LineColor {
    Black,
    #[default]
    Green,
    Red,
}

impl LineColor {
    /// CSS colour keyword.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Green => "green",
            Self::Red => "red",
        }
    }
}

/// Styling of one graph edge.
///
/// Hidden edges keep the default styling so a renderer that ignores
/// visibility still draws them as compatible-looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EdgeStyle {
    pub visible: bool,
    pub color: LineColor,
    pub width: u8,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self::hidden()
    }
}

impl EdgeStyle {
    #[must_use]
    pub const fn hidden() -> Self {
        Self { visible: false, color: LineColor::Green, width: DEFAULT_EDGE_WIDTH }
    }

    #[must_use]
    pub const fn plain(color: LineColor) -> Self {
        Self { visible: true, color, width: DEFAULT_EDGE_WIDTH }
    }

    #[must_use]
    pub const fn emphasized(color: LineColor) -> Self {
        Self { visible: true, color, width: EMPHASIZED_EDGE_WIDTH }
    }
}

/// Styling for both fixed edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyles {
    pub grid_to_station: EdgeStyle,
    pub station_to_car: EdgeStyle,
}

impl EdgeStyles {
    #[must_use]
    pub const fn get(&self, edge: FlowEdge) -> EdgeStyle {
        match edge {
            FlowEdge::GridToStation => self.grid_to_station,
            FlowEdge::StationToCar => self.station_to_car,
        }
    }
}

/// Everything the rendering layer needs to redraw the diagram.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Resolution {
    pub verdict: Verdict,
    pub edges: EdgeStyles,
}

impl Resolution {
    #[must_use]
    pub const fn border_color(&self) -> LineColor {
        self.verdict.classification.border_color()
    }
}
