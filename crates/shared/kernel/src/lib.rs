//! Kernel utilities shared by the server and the shell.
//!
//! ## Config loading
//! ```rust,no_run
//! use v2g_kernel::config::load_config;
//! use v2g_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("server.toml")).expect("valid config");
//! println!("listening on port {}", cfg.server.port);
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

pub use v2g_domain as domain;
