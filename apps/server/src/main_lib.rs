use std::sync::Arc;

use crate::config::Config;
use ifsc_finder_bank_data::{BankDataProvider, CapabilityPolicy, RazorpayProvider};
use ifsc_finder_core::lookup::{LookupService, LookupServiceTrait};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub lookup_service: Arc<dyn LookupServiceTrait + Send + Sync>,
    pub provider_id: &'static str,
    pub capability_policy: CapabilityPolicy,
}

pub fn init_tracing() {
    let log_format = std::env::var("IFSC_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider: Arc<dyn BankDataProvider> = Arc::new(RazorpayProvider::new(
        config.provider_url.clone(),
        config.capability_policy,
        config.provider_timeout,
    ));
    tracing::info!(
        "Branch provider {} at {} (capability policy: {})",
        provider.id(),
        config.provider_url,
        config.capability_policy
    );
    if config.capability_policy == CapabilityPolicy::Optimistic {
        tracing::warn!(
            "Optimistic capability policy: payment methods are always reported as supported"
        );
    }

    let provider_id = provider.id();
    let lookup_service = Arc::new(LookupService::new(provider));

    Ok(Arc::new(AppState {
        lookup_service,
        provider_id,
        capability_policy: config.capability_policy,
    }))
}
