use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sharespace_match::config::{LoggingSettings, Settings};
use sharespace_match::core::Matcher;
use sharespace_match::routes::{self, AppState, MatchLimits};
use sharespace_match::services::{CacheManager, ProfileStoreClient};

fn init_logging(configured: &LoggingSettings) {
    let logging = configured.with_env_overrides(
        std::env::var("LOG_LEVEL").ok(),
        std::env::var("LOG_FORMAT").ok(),
    );

    // RUST_LOG wins over both
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    error!("{}: {}", context, err);
    std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Settings are read before logging starts so the [logging] section applies
    let settings = Settings::load();
    let logging = settings
        .as_ref()
        .map(|s| s.logging.clone())
        .unwrap_or_default();
    init_logging(&logging);

    info!("Starting ShareSpace match service...");

    let settings = settings.map_err(|e| startup_error("Failed to load configuration", e))?;

    info!("Configuration loaded successfully");

    let store = Arc::new(
        ProfileStoreClient::new(
            settings.store.endpoint.clone(),
            settings.store.api_key.clone(),
            settings.store.users_table.clone(),
            Duration::from_secs(settings.store.timeout_secs.unwrap_or(10)),
        )
        .map_err(|e| startup_error("Failed to build profile store client", e))?,
    );

    info!("Profile store client initialized (table: {})", settings.store.users_table);

    let cache_ttl = settings.cache.ttl_secs.unwrap_or(300);
    let l1_cache_size = settings.cache.l1_cache_size.unwrap_or(1000);

    let cache = CacheManager::new(settings.cache.redis_url.as_deref(), l1_cache_size, cache_ttl)
        .await
        .map_err(|e| startup_error("Failed to connect to Redis", e))?;

    info!(
        "Cache manager initialized (L1: {} entries, TTL: {}s, Redis: {})",
        l1_cache_size,
        cache_ttl,
        cache.has_redis()
    );

    let weights = settings.scoring_weights();
    let matcher = Matcher::new(weights);

    info!("Matcher initialized with weights: {:?}", weights);

    let defaults = MatchLimits::default();
    let limits = MatchLimits {
        default_limit: settings.matching.default_limit.unwrap_or(defaults.default_limit),
        max_limit: settings.matching.max_limit.unwrap_or(defaults.max_limit),
    };

    let app_state = AppState {
        store,
        cache: Arc::new(cache),
        matcher,
        limits,
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(routes::handle_json_payload_error))
            .app_data(web::QueryConfig::default().error_handler(routes::handle_query_payload_error))
            .app_data(web::PathConfig::default().error_handler(routes::handle_path_error))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
