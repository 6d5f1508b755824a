//! Rules as the dashboard has always applied them.
//!
//! The discharging branch reports Tesla as the incompatible car although Tesla is the
//! only model with bidirectional support in the compatibility table. The behavior is
//! kept as-is; the `table` rules hold the table-driven alternative.

use crate::model::{EdgeStyle, LineColor, Verdict, Warning};
use v2g_domain::{Action, CarModel, ChargerType, Selection};

pub(crate) fn classify(selection: &Selection) -> Verdict {
    let (Some(action), Some(charger)) = (selection.action, selection.charger) else {
        return Verdict::neutral();
    };

    match action {
        Action::Charging => {
            if charger == ChargerType::Level3
                && matches!(selection.car, Some(CarModel::NissanLeaf | CarModel::KiaEv6))
            {
                Verdict::incompatible(Warning::ChargerIncompatibleWithCar)
            } else {
                Verdict::compatible()
            }
        },
        Action::Discharging => match (charger, selection.car) {
            (ChargerType::Level3, Some(CarModel::TeslaModelS)) => {
                Verdict::incompatible(Warning::TeslaDischarging)
            },
            (ChargerType::Level3, _) => Verdict::incompatible(Warning::DischargingUnsupported),
            _ => Verdict::compatible(),
        },
    }
}

/// Grid → Charging Station: drawn once an action is chosen, emphasized for Level-3
/// when both charger and region are set.
pub(crate) fn grid_edge(selection: &Selection) -> EdgeStyle {
    let Some(action) = selection.action else {
        return EdgeStyle::hidden();
    };

    let level3_in_region =
        selection.region.is_some() && selection.charger == Some(ChargerType::Level3);

    match action {
        Action::Charging if level3_in_region && selection.car != Some(CarModel::TeslaModelS) => {
            EdgeStyle::emphasized(LineColor::Green)
        },
        Action::Discharging if level3_in_region => EdgeStyle::emphasized(LineColor::Red),
        _ => EdgeStyle::plain(LineColor::Green),
    }
}
