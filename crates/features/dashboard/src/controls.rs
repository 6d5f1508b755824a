//! Stateless control definitions: the four dropdowns, the regional grid options and
//! the discharge slider.

use serde::Serialize;
use v2g_domain::constants::{
    DISCHARGE_MARK_INTERVAL, DISCHARGE_MAX, DISCHARGE_MIN, DISCHARGE_STEP,
};
use v2g_domain::{Action, CarModel, ChargerType, Choice, Region};

pub const DISCHARGE_LABEL: &str = "Select Discharge Percentage:";

/// One selectable entry. The label doubles as the value sent back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DropdownOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// Options for `T` in presentation order.
#[must_use]
pub fn options<T: Choice>() -> Vec<DropdownOption> {
    T::all()
        .into_iter()
        .map(|choice| {
            let label = choice.label();
            DropdownOption { label, value: label }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Dropdown {
    pub id: &'static str,
    pub label: &'static str,
    /// Payload field carrying the picked value.
    pub field: &'static str,
    pub options: Vec<DropdownOption>,
}

impl Dropdown {
    fn of<T: Choice>(id: &'static str, label: &'static str) -> Self {
        Self { id, label, field: T::FIELD, options: options::<T>() }
    }
}

/// Grid options offered under one regulatory framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RegionGridOptions {
    pub region: Region,
    pub options: Vec<&'static str>,
}

/// Every dropdown on the dashboard, in page order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DropdownOptions {
    pub region: Dropdown,
    pub action: Dropdown,
    pub charger: Dropdown,
    pub car: Dropdown,
    pub grid_options: Vec<RegionGridOptions>,
}

impl DropdownOptions {
    #[must_use]
    pub fn all() -> Self {
        Self {
            region: Dropdown::of::<Region>("regulation-dropdown", "Select Regulatory Framework:"),
            action: Dropdown::of::<Action>("action-dropdown", "Select Action:"),
            charger: Dropdown::of::<ChargerType>("charger-dropdown", "Select Charger Type:"),
            car: Dropdown::of::<CarModel>("car-dropdown", "Select Car Model:"),
            grid_options: Region::all()
                .into_iter()
                .map(|region| RegionGridOptions {
                    region,
                    options: region.grid_options().to_vec(),
                })
                .collect(),
        }
    }

    /// The dropdowns in page order.
    #[must_use]
    pub fn dropdowns(&self) -> [&Dropdown; 4] {
        [&self.region, &self.action, &self.charger, &self.car]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SliderMark {
    pub value: u8,
    pub label: String,
}

/// The discharge percentage slider shown while discharging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DischargeSlider {
    pub id: &'static str,
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
    pub step: u8,
    pub value: u8,
    pub marks: Vec<SliderMark>,
}

impl DischargeSlider {
    /// A slider positioned at `value`, clamped into range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        let marks = (DISCHARGE_MIN..=DISCHARGE_MAX)
            .step_by(usize::from(DISCHARGE_MARK_INTERVAL))
            .map(|value| SliderMark { value, label: format!("{value}%") })
            .collect();

        Self {
            id: "discharge-slider",
            label: DISCHARGE_LABEL,
            min: DISCHARGE_MIN,
            max: DISCHARGE_MAX,
            step: DISCHARGE_STEP,
            value: value.clamp(DISCHARGE_MIN, DISCHARGE_MAX),
            marks,
        }
    }

    /// The slider is only part of the page while discharging.
    #[must_use]
    pub fn for_action(action: Option<Action>, value: u8) -> Option<Self> {
        matches!(action, Some(Action::Discharging)).then(|| Self::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_every_ten_percent() {
        let slider = DischargeSlider::new(50);
        let labels: Vec<_> = slider.marks.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(
            labels,
            ["0%", "10%", "20%", "30%", "40%", "50%", "60%", "70%", "80%", "90%", "100%"]
        );
    }

    #[test]
    fn value_is_clamped() {
        assert_eq!(DischargeSlider::new(250).value, 100);
    }
}
