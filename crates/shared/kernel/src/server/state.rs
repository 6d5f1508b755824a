use axum::extract::FromRef;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use v2g_domain::config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ApiStateError {
    #[error("State validation error: {message}")]
    Validation { message: Cow<'static, str> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: AppConfig,
}

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for AppConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<AppConfig>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`ApiStateError::Validation`] when no configuration was provided or the
    /// discharge default lies outside the slider range.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self
            .config
            .ok_or_else(|| ApiStateError::Validation { message: "AppConfig not provided".into() })?;

        let discharge = config.simulation.discharge_default;
        if discharge > v2g_domain::constants::DISCHARGE_MAX {
            return Err(ApiStateError::Validation {
                message: format!("discharge_default {discharge} exceeds 100").into(),
            });
        }

        Ok(ApiState { inner: Arc::new(ApiStateInner { config }) })
    }
}
