/// Title shown above the dashboard and on the rendered figure.
pub const APP_TITLE: &str = "Electric Vehicle Charging Simulation";

/// Environment variable prefix for configuration overrides (`V2G__SERVER__PORT`).
pub const ENV_PREFIX: &str = "V2G";
/// Configuration file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";

pub const SYSTEM_TAG: &str = "System";
pub const DASHBOARD_TAG: &str = "Dashboard";

/// Discharge slider bounds, in percent.
pub const DISCHARGE_MIN: u8 = 0;
pub const DISCHARGE_MAX: u8 = 100;
pub const DISCHARGE_STEP: u8 = 1;
pub const DISCHARGE_DEFAULT: u8 = 50;
pub const DISCHARGE_MARK_INTERVAL: u8 = 10;
