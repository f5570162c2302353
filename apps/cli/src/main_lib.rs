use std::sync::Arc;

use finmate_api::{
    ApiClient, AttachmentService, AttachmentServiceTrait, PaymentGoalsService,
    PaymentGoalsServiceTrait, TransactionService, TransactionServiceTrait,
};
use finmate_core::AppConfig;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub config: AppConfig,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub payment_goals_service: Arc<dyn PaymentGoalsServiceTrait>,
    pub attachment_service: Arc<dyn AttachmentServiceTrait>,
}

pub fn init_tracing(config: &AppConfig) {
    let log_format = std::env::var("FINMATE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_level = if config.debug_mode { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_state(config: &AppConfig) -> anyhow::Result<Arc<AppState>> {
    tracing::debug!("Resolved configuration: {:?}", config);
    let api = ApiClient::new(config)?;
    tracing::info!(
        "API base URL in use: {} (timeout {} ms, env {})",
        api.base_url(),
        config.api_timeout_ms,
        config.environment
    );

    Ok(Arc::new(AppState {
        config: config.clone(),
        transaction_service: Arc::new(TransactionService::new(api.clone())),
        payment_goals_service: Arc::new(PaymentGoalsService::new(api.clone())),
        attachment_service: Arc::new(AttachmentService::new(api)),
    }))
}
