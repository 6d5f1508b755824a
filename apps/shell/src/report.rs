//! Plain-text rendering of resolver results and option lists.

use std::fmt::{self, Write};
use v2g::domain::{Choice, FlowEdge, Selection};
use v2g::features::compatibility::{EdgeStyle, Resolution};
use v2g::features::dashboard::{Dropdown, DropdownOptions};

const UNSET: &str = "-";

pub(crate) fn selection_line(selection: &Selection) -> String {
    fn show<T: Choice>(value: Option<T>) -> &'static str {
        value.map_or(UNSET, Choice::label)
    }

    format!(
        "region={} action={} charger={} car={}",
        show(selection.region),
        show(selection.action),
        show(selection.charger),
        show(selection.car)
    )
}

fn edge_line(style: EdgeStyle) -> String {
    if style.visible {
        format!("{}, width {}", style.color, style.width)
    } else {
        "hidden".to_owned()
    }
}

pub(crate) fn resolution(
    selection: &Selection,
    resolution: &Resolution,
) -> Result<String, fmt::Error> {
    let verdict = resolution.verdict;
    let mut out = String::new();

    writeln!(out, "Selection: {}", selection_line(selection))?;
    writeln!(
        out,
        "Verdict:   {} ({} border)",
        verdict.classification,
        resolution.border_color()
    )?;
    if let Some(warning) = verdict.message {
        writeln!(out, "Warning:   {warning}")?;
    }
    writeln!(out, "Edges:")?;
    for edge in FlowEdge::ALL {
        writeln!(out, "  {edge}: {}", edge_line(resolution.edges.get(edge)))?;
    }
    Ok(out)
}

fn dropdown(out: &mut String, dropdown: &Dropdown) -> fmt::Result {
    writeln!(out, "{}", dropdown.label)?;
    for option in &dropdown.options {
        writeln!(out, "  {}", option.label)?;
    }
    Ok(())
}

pub(crate) fn options(options: &DropdownOptions) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for entry in options.dropdowns() {
        dropdown(&mut out, entry)?;
    }
    writeln!(out, "Grid options:")?;
    for grid in &options.grid_options {
        writeln!(out, "  {}: {}", grid.region, grid.options.join(", "))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use v2g::domain::{Action, CarModel, ChargerType, Region};
    use v2g::features::compatibility::resolve;

    #[test]
    fn incompatible_report_lists_warning_and_edges() -> fmt::Result {
        let selection = Selection::new()
            .with_region(Region::Eu)
            .with_action(Action::Charging)
            .with_charger(ChargerType::Level3)
            .with_car(CarModel::KiaEv6);
        let report = resolution(&selection, &resolve(&selection))?;

        assert!(report.contains("region=EU action=Charging charger=Level-3 car=Kia EV6"));
        assert!(report.contains("Verdict:   incompatible (red border)"));
        assert!(report.contains("Warning:   Charger type doesn't compatible with car"));
        assert!(report.contains("Grid → Charging Station: green, width 3"));
        assert!(report.contains("Charging Station → Car: red, width 3"));
        Ok(())
    }

    #[test]
    fn empty_selection_hides_edges() -> fmt::Result {
        let selection = Selection::default();
        let report = resolution(&selection, &resolve(&selection))?;

        assert!(report.contains("region=- action=- charger=- car=-"));
        assert!(report.contains("neutral (black border)"));
        assert!(!report.contains("Warning"));
        assert_eq!(report.matches("hidden").count(), 2);
        Ok(())
    }

    #[test]
    fn options_report_covers_everything() -> fmt::Result {
        let report = options(&DropdownOptions::all())?;
        assert!(report.contains("Select Regulatory Framework:"));
        assert!(report.contains("  Nissan e-NV200"));
        assert!(report.contains("  UK: Option X, Option Y, Option Z"));
        Ok(())
    }
}
