use crate::config::AppConfig;
use axum::extract::FromRef;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
}

/// Shared application state handed to the router.
///
/// Read-only after construction; clones are cheap Arc bumps, so concurrent
/// requests never contend.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { inner: Arc::new(AppStateInner { config }) }
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}
