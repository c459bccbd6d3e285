use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use catalog::config::{database, Config};
use catalog::middleware::{RequestId, RequestIdRootSpan};
use catalog::modules::{health, products};
use catalog::products::{MySqlProductRepository, ProductService};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| config.app.log_filter().into());
    let registry = tracing_subscriber::registry().with(filter);
    if config.app.json_logs() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }

    config.validate()?;

    tracing::info!("Starting product catalog service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config.database.create_pool().await?;

    if config.database.run_migrations {
        database::run_migrations(&db_pool).await?;
    }

    let product_service = Arc::new(ProductService::new(Arc::new(
        MySqlProductRepository::new(db_pool.clone()),
    )));

    let bind_address = config.server.bind_address();
    let pool_data = web::Data::new(db_pool.clone());
    let service_data = web::Data::new(product_service);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<RequestIdRootSpan>::new())
            .wrap(RequestId)
            .app_data(pool_data.clone())
            .app_data(service_data.clone())
            .configure(health::controllers::configure)
            .configure(products::controllers::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    database::close_pool(&db_pool).await;

    Ok(())
}
