//! Rules read off the charger compatibility table.
//!
//! Level-1, Level-2 and CCS chargers work in every regulatory region and in both
//! directions. Level-3 charging is limited to the Tesla Model S and Level-3
//! discharging is supported by no car at all.

use crate::model::{EdgeStyle, LineColor, Verdict, Warning};
use v2g_domain::{Action, CarModel, ChargerType, Selection};

/// Cars able to charge from a Level-3 charger.
const LEVEL3_CHARGING: &[CarModel] = &[CarModel::TeslaModelS];
/// Cars able to discharge into a Level-3 charger.
const LEVEL3_DISCHARGING: &[CarModel] = &[];

pub(crate) fn classify(selection: &Selection) -> Verdict {
    let (Some(action), Some(charger)) = (selection.action, selection.charger) else {
        return Verdict::neutral();
    };

    if charger != ChargerType::Level3 {
        return Verdict::compatible();
    }

    let (supported, warning) = match action {
        Action::Charging => (LEVEL3_CHARGING, Warning::ChargerIncompatibleWithCar),
        Action::Discharging => (LEVEL3_DISCHARGING, Warning::DischargingUnsupported),
    };

    if supported.is_empty() {
        return Verdict::incompatible(warning);
    }

    match selection.car {
        None => Verdict::neutral(),
        Some(car) if supported.contains(&car) => Verdict::compatible(),
        Some(_) => Verdict::incompatible(warning),
    }
}

pub(crate) fn grid_edge(selection: &Selection, verdict: &Verdict) -> EdgeStyle {
    match selection.action {
        None => EdgeStyle::hidden(),
        Some(Action::Discharging) if verdict.is_incompatible() => {
            EdgeStyle::emphasized(LineColor::Red)
        },
        Some(Action::Charging) if verdict.is_incompatible() => {
            EdgeStyle::emphasized(LineColor::Green)
        },
        Some(_) => EdgeStyle::plain(LineColor::Green),
    }
}
