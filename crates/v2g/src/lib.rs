//! Facade crate for the charging simulation.
//! Re-exports the domain and kernel and composes the feature slices.
//! Keep this crate thin: it should compose other crates, not implement business logic.

pub use v2g_domain as domain;
pub use v2g_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use utoipa_axum::router::OpenApiRouter;
        use v2g_kernel::server::ApiState;

        pub use v2g_dashboard::dashboard_router;
        pub use v2g_kernel::server::system_router;

        /// Every HTTP route the enabled features contribute.
        #[must_use]
        pub fn api_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(system_router()).merge(dashboard_router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use v2g_compatibility as compatibility;
    pub use v2g_dashboard as dashboard;
    pub use v2g_flowchart as flowchart;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "compatibility",
        "flowchart",
        "dashboard",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}
