use crate::infra::config::AppConfig;

/// Shared application context built during bootstrap.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
