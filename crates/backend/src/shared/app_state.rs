use std::sync::Arc;
use std::time::Duration;

use super::config::Config;
use super::revalidate::Revalidator;
use super::upstream::{CustomersApi, CustomersApiClient, ProvidersApi, ProvidersApiClient};
use crate::system::auth::AuthSettings;

/// Общее состояние приложения: клиенты upstream создаются один раз при старте
#[derive(Clone)]
pub struct AppState {
    pub customers_api: Arc<dyn CustomersApi>,
    pub providers_api: Arc<dyn ProvidersApi>,
    pub auth: Arc<AuthSettings>,
    pub revalidator: Revalidator,
}

impl AppState {
    pub fn new(
        customers_api: Arc<dyn CustomersApi>,
        providers_api: Arc<dyn ProvidersApi>,
        auth: AuthSettings,
    ) -> Self {
        Self {
            customers_api,
            providers_api,
            auth: Arc::new(auth),
            revalidator: Revalidator::new(),
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let timeout = Duration::from_secs(config.upstream.timeout_secs);

        tracing::info!("Customers service: {}", config.upstream.customers_url);
        tracing::info!("Providers service: {}", config.upstream.providers_url);

        let customers_api = CustomersApiClient::new(&config.upstream.customers_url, timeout)?;
        let providers_api = ProvidersApiClient::new(&config.upstream.providers_url, timeout)?;
        let auth = AuthSettings::from_config(&config.auth)?;

        Ok(Self::new(
            Arc::new(customers_api),
            Arc::new(providers_api),
            auth,
        ))
    }
}
