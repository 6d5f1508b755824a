//! The four closed option sets a user picks from, and the [`Selection`] tuple holding them.
//!
//! Every enum shares one string form for display, parsing and serde, so the value a UI
//! sends back is exactly the label it was offered.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// A closed set of user-selectable values backing one dropdown.
pub trait Choice:
    Copy + Eq + IntoEnumIterator + Into<&'static str> + FromStr<Err = strum::ParseError>
{
    /// Field name used in wire payloads and error messages.
    const FIELD: &'static str;

    /// Label presented to the user; identical to the wire value.
    fn label(self) -> &'static str {
        self.into()
    }

    /// All values in presentation order.
    fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

/// Regulatory framework the grid connection is operated under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum Region {
    #[serde(rename = "EU")]
    #[strum(to_string = "EU")]
    Eu,
    Asian,
    #[serde(rename = "UK")]
    #[strum(to_string = "UK")]
    Uk,
    #[serde(rename = "USA")]
    #[strum(to_string = "USA")]
    Usa,
}

impl Region {
    /// Grid options offered by the region's regulatory framework.
    #[must_use]
    pub const fn grid_options(self) -> &'static [&'static str] {
        match self {
            Self::Eu => &["Option 1", "Option 2", "Option 3"],
            Self::Asian => &["Option A", "Option B", "Option C"],
            Self::Uk => &["Option X", "Option Y", "Option Z"],
            Self::Usa => &["Option I", "Option II", "Option III"],
        }
    }
}

impl Choice for Region {
    const FIELD: &'static str = "region";
}

/// Direction of power flow between grid and car.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum Action {
    /// Grid → Car.
    Charging,
    /// Car → Grid.
    Discharging,
}

impl Choice for Action {
    const FIELD: &'static str = "action";
}

/// Charger hardware class.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum ChargerType {
    #[serde(rename = "Level-1")]
    #[strum(to_string = "Level-1")]
    Level1,
    #[serde(rename = "Level-2")]
    #[strum(to_string = "Level-2")]
    Level2,
    #[serde(rename = "CCS")]
    #[strum(to_string = "CCS")]
    Ccs,
    #[serde(rename = "Level-3")]
    #[strum(to_string = "Level-3")]
    Level3,
}

impl Choice for ChargerType {
    const FIELD: &'static str = "charger";
}

/// Supported electric car models.
///
/// Older clients spell two of the models differently; both spellings parse.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[strum(ascii_case_insensitive)]
pub enum CarModel {
    #[serde(rename = "Nissan Leaf")]
    #[strum(to_string = "Nissan Leaf")]
    NissanLeaf,
    #[serde(rename = "Ford F-150 Lightning", alias = "Ford F-150 Lighting")]
    #[strum(to_string = "Ford F-150 Lightning", serialize = "Ford F-150 Lighting")]
    FordF150Lightning,
    #[serde(rename = "Nissan e-NV200", alias = "Nissan e-NV 200")]
    #[strum(to_string = "Nissan e-NV200", serialize = "Nissan e-NV 200")]
    NissanENv200,
    #[serde(rename = "Kia EV6")]
    #[strum(to_string = "Kia EV6")]
    KiaEv6,
    #[serde(rename = "Tesla Model S")]
    #[strum(to_string = "Tesla Model S")]
    TeslaModelS,
}

impl Choice for CarModel {
    const FIELD: &'static str = "car";
}

/// The user's current picks. Every field stays unset until chosen.
///
/// This is the only mutable state in the system and it belongs to the UI layer;
/// the default value is the reset state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Selection {
    pub region: Option<Region>,
    pub action: Option<Action>,
    pub charger: Option<ChargerType>,
    pub car: Option<CarModel>,
}

impl Selection {
    #[must_use]
    pub const fn new() -> Self {
        Self { region: None, action: None, charger: None, car: None }
    }

    #[must_use]
    pub const fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    #[must_use]
    pub const fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub const fn with_charger(mut self, charger: ChargerType) -> Self {
        self.charger = Some(charger);
        self
    }

    #[must_use]
    pub const fn with_car(mut self, car: CarModel) -> Self {
        self.car = Some(car);
        self
    }

    /// `true` when nothing has been picked yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.region.is_none() && self.action.is_none() && self.charger.is_none() && self.car.is_none()
    }
}
