use crate::controls::DischargeSlider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use v2g_compatibility::{EdgeStyles, RuleSet, Verdict};
use v2g_domain::config::SimulationConfig;
use v2g_domain::constants::{DISCHARGE_DEFAULT, DISCHARGE_MAX, DISCHARGE_MIN};
use v2g_domain::{Action, CarModel, ChargerType, Region, Selection};
use v2g_flowchart::{Figure, draw};

/// Something the user did on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    RegionSelected(Option<Region>),
    ActionSelected(Option<Action>),
    ChargerSelected(Option<ChargerType>),
    CarSelected(Option<CarModel>),
    /// Requested slider position; clamped to the slider range.
    DischargeChanged(i64),
    /// The reset button's click counter as reported by the page.
    Reset { n_clicks: u32 },
}

/// The client-held part of the dashboard state, echoed back with each event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    pub selection: Selection,
    pub discharge_percent: u8,
    pub reset_clicks: u32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self { selection: Selection::default(), discharge_percent: DISCHARGE_DEFAULT, reset_clicks: 0 }
    }
}

/// Everything the page redraws after an event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DashboardUpdate {
    pub selection: Selection,
    pub verdict: Verdict,
    pub edges: EdgeStyles,
    pub figure: Figure,
    /// Present only while discharging.
    pub slider: Option<DischargeSlider>,
    pub discharge_percent: u8,
    pub reset_clicks: u32,
}

impl DashboardUpdate {
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            selection: self.selection,
            discharge_percent: self.discharge_percent,
            reset_clicks: self.reset_clicks,
        }
    }
}

/// Dashboard state: the current picks plus the slider and reset bookkeeping.
///
/// The verdict and figure are never stored; [`Dashboard::view`] derives them from the
/// selection on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    snapshot: Snapshot,
    rules: RuleSet,
    discharge_default: u8,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}

impl Dashboard {
    #[must_use]
    pub fn new(config: &SimulationConfig) -> Self {
        let discharge_default = clamp_percent(i64::from(config.discharge_default));
        Self {
            snapshot: Snapshot { discharge_percent: discharge_default, ..Snapshot::default() },
            rules: config.rules,
            discharge_default,
        }
    }

    /// Restores client-held state on top of this dashboard's configuration.
    #[must_use]
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = Snapshot {
            discharge_percent: clamp_percent(i64::from(snapshot.discharge_percent)),
            ..snapshot
        };
        self
    }

    #[must_use]
    pub const fn with_selection(mut self, selection: Selection) -> Self {
        self.snapshot.selection = selection;
        self
    }

    /// Moves the slider, clamping into range.
    #[must_use]
    pub fn with_discharge(mut self, percent: i64) -> Self {
        self.snapshot.discharge_percent = clamp_percent(percent);
        self
    }

    #[must_use]
    pub const fn with_reset_clicks(mut self, reset_clicks: u32) -> Self {
        self.snapshot.reset_clicks = reset_clicks;
        self
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.snapshot.selection
    }

    #[must_use]
    pub const fn discharge_percent(&self) -> u8 {
        self.snapshot.discharge_percent
    }

    #[must_use]
    pub const fn reset_clicks(&self) -> u32 {
        self.snapshot.reset_clicks
    }

    #[must_use]
    pub const fn rules(&self) -> RuleSet {
        self.rules
    }

    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        self.snapshot
    }

    /// The slider, if the current action shows it.
    #[must_use]
    pub fn slider(&self) -> Option<DischargeSlider> {
        DischargeSlider::for_action(self.snapshot.selection.action, self.snapshot.discharge_percent)
    }

    /// Applies one event and returns what to redraw.
    ///
    /// A reset whose click counter is still zero is the page's initial callback, not a
    /// click; it changes nothing and yields `None`.
    pub fn apply(&mut self, event: DashboardEvent) -> Option<DashboardUpdate> {
        let selection = &mut self.snapshot.selection;
        match event {
            DashboardEvent::RegionSelected(region) => selection.region = region,
            DashboardEvent::ActionSelected(action) => selection.action = action,
            DashboardEvent::ChargerSelected(charger) => selection.charger = charger,
            DashboardEvent::CarSelected(car) => selection.car = car,
            DashboardEvent::DischargeChanged(percent) => {
                self.snapshot.discharge_percent = clamp_percent(percent);
            },
            DashboardEvent::Reset { n_clicks: 0 } => {
                debug!("Ignoring reset with zero clicks");
                return None;
            },
            DashboardEvent::Reset { n_clicks } => {
                info!(n_clicks, "Resetting dashboard");
                self.snapshot = Snapshot {
                    selection: Selection::default(),
                    discharge_percent: self.discharge_default,
                    reset_clicks: n_clicks,
                };
            },
        }

        debug!(?event, selection = ?self.snapshot.selection, "Dashboard event applied");
        Some(self.view())
    }

    /// Derives the full page state from the current selection.
    #[must_use]
    pub fn view(&self) -> DashboardUpdate {
        let drawing = draw(self.rules, &self.snapshot.selection);
        DashboardUpdate {
            selection: self.snapshot.selection,
            verdict: drawing.resolution.verdict,
            edges: drawing.resolution.edges,
            figure: drawing.figure,
            slider: self.slider(),
            discharge_percent: self.snapshot.discharge_percent,
            reset_clicks: self.snapshot.reset_clicks,
        }
    }
}

fn clamp_percent(percent: i64) -> u8 {
    let clamped = percent.clamp(i64::from(DISCHARGE_MIN), i64::from(DISCHARGE_MAX));
    u8::try_from(clamped).unwrap_or(DISCHARGE_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_covers_both_ends() {
        assert_eq!(clamp_percent(-5), 0);
        assert_eq!(clamp_percent(42), 42);
        assert_eq!(clamp_percent(1_000), 100);
    }
}
