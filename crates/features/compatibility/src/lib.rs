//! # Compatibility Resolver
//!
//! Turns the user's four picks into a verdict and edge styling for the
//! Grid → Charging Station → Car diagram.
//!
//! The resolver is a pure function of [`Selection`]: it owns no state, every call
//! recomputes from scratch, and identical inputs always give identical output.
//!
//! ```rust
//! use v2g_compatibility::{Classification, Warning, resolve};
//! use v2g_domain::{Action, CarModel, ChargerType, Selection};
//!
//! let selection = Selection::new()
//!     .with_action(Action::Charging)
//!     .with_charger(ChargerType::Level3)
//!     .with_car(CarModel::NissanLeaf);
//!
//! let resolution = resolve(&selection);
//! assert_eq!(resolution.verdict.classification, Classification::Incompatible);
//! assert_eq!(resolution.verdict.message, Some(Warning::ChargerIncompatibleWithCar));
//! ```

mod model;
mod observed;
mod table;

pub use crate::model::{
    Classification, DEFAULT_EDGE_WIDTH, EMPHASIZED_EDGE_WIDTH, EdgeStyle, EdgeStyles, LineColor,
    Resolution, Verdict, Warning,
};
pub use v2g_domain::config::RuleSet;

use v2g_domain::Selection;

/// Resolves a selection with the [`RuleSet::Observed`] rules.
#[must_use]
pub fn resolve(selection: &Selection) -> Resolution {
    resolve_with(RuleSet::Observed, selection)
}

/// Resolves a selection with an explicit rule set.
#[must_use]
pub fn resolve_with(rules: RuleSet, selection: &Selection) -> Resolution {
    let verdict = match rules {
        RuleSet::Observed => observed::classify(selection),
        RuleSet::Table => table::classify(selection),
    };

    let grid_to_station = match rules {
        RuleSet::Observed => observed::grid_edge(selection),
        RuleSet::Table => table::grid_edge(selection, &verdict),
    };

    Resolution {
        verdict,
        edges: EdgeStyles { grid_to_station, station_to_car: car_edge(selection, &verdict) },
    }
}

/// Station → Car mirrors the final classification once a car is chosen.
fn car_edge(selection: &Selection, verdict: &Verdict) -> EdgeStyle {
    if selection.car.is_none() {
        return EdgeStyle::hidden();
    }
    let color = if verdict.is_incompatible() { LineColor::Red } else { LineColor::Green };
    EdgeStyle::emphasized(color)
}
