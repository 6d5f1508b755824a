mod cli;
mod report;

use crate::cli::{Cli, Command, Format, ResolveArgs};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};
use v2g::domain::Selection;
use v2g::domain::config::AppConfig;
use v2g::features::dashboard::{DropdownOptions, RawSelection};
use v2g::features::flowchart::draw;
use v2g::kernel::config::load_config;
use v2g_logger::{LevelFilter, Logger};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg: AppConfig =
        load_config(cli.config.as_deref()).context("Configuration is malformed")?;

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).stderr(true).level(level).init()?;

    match cli.cmd {
        Command::Resolve(args) => resolve(&cfg, &args),
        Command::Options => emit(&report::options(&DropdownOptions::all())?, None),
    }
}

fn resolve(cfg: &AppConfig, args: &ResolveArgs) -> anyhow::Result<()> {
    let selection: Selection = RawSelection {
        region: args.region.clone(),
        action: args.action.clone(),
        charger: args.charger.clone(),
        car: args.car.clone(),
    }
    .parse()?;
    let rules = args.rules.unwrap_or(cfg.simulation.rules);
    debug!(%rules, selection = %report::selection_line(&selection), "Resolving");

    let drawing = draw(rules, &selection);
    let rendered = match args.format {
        Format::Text => report::resolution(&selection, &drawing.resolution)?,
        Format::Json => {
            let mut json = serde_json::to_string_pretty(&drawing)?;
            json.push('\n');
            json
        },
        Format::Svg => drawing.to_svg()?,
    };

    emit(&rendered, args.output.as_deref())
}

fn emit(content: &str, output: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        return Ok(());
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_file_receives_the_rendering() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("chart.svg");

        emit("<svg/>", Some(&path)).expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "<svg/>");
    }

    #[test]
    fn unknown_car_is_rejected() {
        let args = ResolveArgs {
            region: None,
            action: Some("Charging".to_owned()),
            charger: None,
            car: Some("DeLorean".to_owned()),
            rules: None,
            format: Format::Text,
            output: None,
        };

        let err = resolve(&AppConfig::default(), &args).expect_err("unknown car");
        assert!(err.to_string().contains("Invalid car option: 'DeLorean'"));
    }
}
