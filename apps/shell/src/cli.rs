use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use v2g::domain::config::RuleSet;

#[derive(Debug, Parser)]
#[command(name = "v2g", version, about = "Electric vehicle charging simulation")]
pub(crate) struct Cli {
    /// Settings file; `server.toml` in the working directory is used when present
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) cmd: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Resolve a selection and print the verdict or the flowchart
    Resolve(ResolveArgs),

    /// List every dropdown option and the regional grid options
    Options,
}

#[derive(Debug, Args)]
pub(crate) struct ResolveArgs {
    /// Regulatory framework (EU, Asian, UK, USA)
    #[arg(long)]
    pub(crate) region: Option<String>,

    /// Charging or Discharging
    #[arg(long)]
    pub(crate) action: Option<String>,

    /// Level-1, Level-2, CCS or Level-3
    #[arg(long)]
    pub(crate) charger: Option<String>,

    /// Car model, e.g. "Tesla Model S"
    #[arg(long)]
    pub(crate) car: Option<String>,

    /// Compatibility rules; defaults to the configured rules
    #[arg(long)]
    pub(crate) rules: Option<RuleSet>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub(crate) format: Format,

    /// Write to this file instead of standard output
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Text,
    Json,
    Svg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_arguments_parse() {
        let cli = Cli::try_parse_from([
            "v2g",
            "resolve",
            "--action",
            "Charging",
            "--car",
            "Tesla Model S",
            "--rules",
            "table",
            "--format",
            "svg",
            "-o",
            "chart.svg",
        ])
        .expect("valid arguments");

        let Command::Resolve(args) = cli.cmd else {
            panic!("expected resolve");
        };
        assert_eq!(args.action.as_deref(), Some("Charging"));
        assert_eq!(args.car.as_deref(), Some("Tesla Model S"));
        assert_eq!(args.rules, Some(RuleSet::Table));
        assert_eq!(args.format, Format::Svg);
        assert_eq!(args.output, Some(PathBuf::from("chart.svg")));
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["v2g", "options", "--verbose"]).expect("valid arguments");
        assert!(cli.verbose);
        assert!(matches!(cli.cmd, Command::Options));
    }

    #[test]
    fn unknown_rules_are_rejected() {
        assert!(Cli::try_parse_from(["v2g", "resolve", "--rules", "strict"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
