use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fortuneok_core::cache::connect_cache_store;
use fortuneok_core::fx::{RateService, RateServiceTrait};
use fortuneok_core::investments::{InvestmentService, InvestmentServiceTrait};
use fortuneok_core::logs::{LogService, LogServiceTrait};
use fortuneok_core::quotes::{QuoteService, QuoteServiceTrait};
use fortuneok_core::sessions::SessionStore;
use fortuneok_core::users::{UserService, UserServiceTrait};
use fortuneok_market_data::{HttpQuoteFetcher, HttpRateFetcher, HttpSearchSource, SymbolSearch};
use fortuneok_storage_memory::{
    MemoryInvestmentStore, MemoryLogStore, MemorySessionStore, MemoryUserStore,
};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub rate_service: Arc<dyn RateServiceTrait>,
    pub investment_service: Arc<dyn InvestmentServiceTrait>,
    pub log_service: Arc<dyn LogServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub symbol_search: Arc<SymbolSearch>,
    pub sessions: Arc<dyn SessionStore>,
    pub admin_emails: Vec<String>,
}

pub fn init_tracing() {
    let log_format = std::env::var("FORTUNEOK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
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
    let cache = connect_cache_store(config.redis_url.as_deref()).await;

    let quote_fetcher = Arc::new(HttpQuoteFetcher::new(
        config.quote_api_url.clone(),
        config.quote_api_key.clone(),
    ));
    let rate_fetcher = Arc::new(HttpRateFetcher::new(config.rates_api_url.clone()));
    let search_source = Arc::new(HttpSearchSource::new(
        config.search_cached_url.clone(),
        config.search_direct_url.clone(),
        config.quote_api_key.clone(),
    ));

    let quote_service: Arc<dyn QuoteServiceTrait> =
        Arc::new(QuoteService::new(cache.clone(), quote_fetcher));
    let rate_service: Arc<dyn RateServiceTrait> =
        Arc::new(RateService::new(cache.clone(), rate_fetcher));
    let symbol_search = Arc::new(SymbolSearch::new(search_source));

    let investment_store = Arc::new(MemoryInvestmentStore::new());
    let user_store = Arc::new(MemoryUserStore::new());
    let session_store = Arc::new(MemorySessionStore::new());
    let log_store = Arc::new(MemoryLogStore::new());

    // Sessions come from an external auth provider in a real deployment;
    // here they are pre-provisioned from configuration.
    for (token, email) in &config.session_tokens {
        session_store.seed_token(token, email).await;
        user_store.seed_user(email, display_name(email)).await;
    }
    for email in &config.admin_emails {
        user_store.seed_user(email, display_name(email)).await;
    }
    tracing::info!(
        "Seeded {} sessions and {} admin accounts",
        config.session_tokens.len(),
        config.admin_emails.len()
    );

    let investment_service: Arc<dyn InvestmentServiceTrait> = Arc::new(InvestmentService::new(
        investment_store.clone(),
        quote_service.clone(),
        rate_service.clone(),
    ));
    let log_service: Arc<dyn LogServiceTrait> = Arc::new(LogService::new(log_store));
    let user_service: Arc<dyn UserServiceTrait> =
        Arc::new(UserService::new(user_store, investment_store));

    Ok(Arc::new(AppState {
        quote_service,
        rate_service,
        investment_service,
        log_service,
        user_service,
        symbol_search,
        sessions: session_store,
        admin_emails: config.admin_emails.clone(),
    }))
}

fn display_name(email: &str) -> &str {
    match email.split_once('@') {
        Some((local, _)) => local,
        None => email,
    }
}
