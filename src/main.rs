use std::io;
use std::sync::Arc;

use actix_web::web;
use dotenvy::dotenv;
use restaurant_service::infrastructure::id_generator::UuidIdGenerator;
use restaurant_service::{build_server, AppConfig, AppState};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let seed = config
        .load_seed()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    log::info!(
        "Seeded {} dishes and {} orders",
        seed.dishes.len(),
        seed.orders.len()
    );

    let state = web::Data::new(AppState::new(seed, Arc::new(UuidIdGenerator)));

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(state, &config.host, config.port)?.await
}
