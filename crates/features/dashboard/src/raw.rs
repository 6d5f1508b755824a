//! Untyped input as it arrives from the page: dropdown values are plain strings and
//! an empty string means the dropdown was cleared.

use crate::error::DashboardError;
use crate::state::{Dashboard, DashboardEvent};
use serde::Deserialize;
use v2g_domain::config::SimulationConfig;
use v2g_domain::{Choice, Selection};

/// Parses one dropdown value. Blank input is "not selected".
///
/// # Errors
/// Returns [`DashboardError::InvalidOption`] for a value outside `T`'s options.
pub fn parse_choice<T: Choice>(raw: Option<&str>) -> Result<Option<T>, DashboardError> {
    let Some(value) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    value.parse::<T>().map(Some).map_err(|_| DashboardError::invalid_option(T::FIELD, value))
}

/// The four dropdown values as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema, utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(default)]
pub struct RawSelection {
    /// Regulatory framework, e.g. `EU`.
    pub region: Option<String>,
    /// `Charging` or `Discharging`.
    pub action: Option<String>,
    /// Charger type, e.g. `Level-3`.
    pub charger: Option<String>,
    /// Car model, e.g. `Tesla Model S`.
    pub car: Option<String>,
}

impl RawSelection {
    /// # Errors
    /// Returns the first [`DashboardError::InvalidOption`] encountered.
    pub fn parse(&self) -> Result<Selection, DashboardError> {
        Ok(Selection {
            region: parse_choice(self.region.as_deref())?,
            action: parse_choice(self.action.as_deref())?,
            charger: parse_choice(self.charger.as_deref())?,
            car: parse_choice(self.car.as_deref())?,
        })
    }
}

impl From<Selection> for RawSelection {
    fn from(selection: Selection) -> Self {
        let label = |value: Option<&'static str>| value.map(str::to_owned);
        Self {
            region: label(selection.region.map(Choice::label)),
            action: label(selection.action.map(Choice::label)),
            charger: label(selection.charger.map(Choice::label)),
            car: label(selection.car.map(Choice::label)),
        }
    }
}

/// A dashboard event as submitted by the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RawEvent {
    RegionSelected {
        #[serde(default)]
        value: Option<String>,
    },
    ActionSelected {
        #[serde(default)]
        value: Option<String>,
    },
    ChargerSelected {
        #[serde(default)]
        value: Option<String>,
    },
    CarSelected {
        #[serde(default)]
        value: Option<String>,
    },
    DischargeChanged {
        value: i64,
    },
    Reset {
        #[serde(rename = "nClicks", default)]
        n_clicks: u32,
    },
}

impl RawEvent {
    /// # Errors
    /// Returns [`DashboardError::InvalidOption`] for an unknown dropdown value.
    pub fn parse(&self) -> Result<DashboardEvent, DashboardError> {
        Ok(match self {
            Self::RegionSelected { value } => {
                DashboardEvent::RegionSelected(parse_choice(value.as_deref())?)
            },
            Self::ActionSelected { value } => {
                DashboardEvent::ActionSelected(parse_choice(value.as_deref())?)
            },
            Self::ChargerSelected { value } => {
                DashboardEvent::ChargerSelected(parse_choice(value.as_deref())?)
            },
            Self::CarSelected { value } => {
                DashboardEvent::CarSelected(parse_choice(value.as_deref())?)
            },
            Self::DischargeChanged { value } => DashboardEvent::DischargeChanged(*value),
            Self::Reset { n_clicks } => DashboardEvent::Reset { n_clicks: *n_clicks },
        })
    }
}

/// An event together with the client-held state it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub selection: RawSelection,
    /// Current slider position; the configured default when absent.
    #[serde(default)]
    pub discharge_percent: Option<i64>,
    #[serde(default)]
    pub reset_clicks: u32,
    pub event: RawEvent,
}

impl EventRequest {
    /// Rebuilds the dashboard the event applies to, and parses the event.
    ///
    /// # Errors
    /// Returns [`DashboardError::InvalidOption`] for an unknown dropdown value in either
    /// the state or the event.
    pub fn to_dashboard(
        &self,
        config: &SimulationConfig,
    ) -> Result<(Dashboard, DashboardEvent), DashboardError> {
        let mut dashboard = Dashboard::new(config)
            .with_selection(self.selection.parse()?)
            .with_reset_clicks(self.reset_clicks);
        if let Some(percent) = self.discharge_percent {
            dashboard = dashboard.with_discharge(percent);
        }

        Ok((dashboard, self.event.parse()?))
    }
}
