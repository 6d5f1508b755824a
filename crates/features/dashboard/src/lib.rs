//! # Dashboard
//!
//! UI-layer state for the charging simulation: the dropdown and slider definitions,
//! the [`Dashboard`] selection state and the events that change it. With the `server`
//! feature the crate also exposes the HTTP handlers.
//!
//! ```rust
//! use v2g_dashboard::{Dashboard, DashboardEvent};
//! use v2g_domain::Action;
//!
//! let mut dashboard = Dashboard::default();
//! let update = dashboard
//!     .apply(DashboardEvent::ActionSelected(Some(Action::Discharging)))
//!     .expect("selection changed");
//! assert!(update.slider.is_some());
//!
//! // The page fires the reset callback once on load with zero clicks.
//! assert!(dashboard.apply(DashboardEvent::Reset { n_clicks: 0 }).is_none());
//! ```

#[cfg(feature = "server")]
mod api;
mod controls;
mod error;
mod raw;
mod state;

#[cfg(feature = "server")]
pub use crate::api::dashboard_router;
pub use crate::controls::{
    DISCHARGE_LABEL, DischargeSlider, Dropdown, DropdownOption, DropdownOptions,
    RegionGridOptions, SliderMark, options,
};
#[cfg(feature = "server")]
pub use crate::error::ErrorBody;
pub use crate::error::DashboardError;
pub use crate::raw::{EventRequest, RawEvent, RawSelection, parse_choice};
pub use crate::state::{Dashboard, DashboardEvent, DashboardUpdate, Snapshot};
