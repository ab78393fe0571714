use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use doom_shop::config::ServerConfig;
use doom_shop::configure_app;
use doom_shop::db::AppContext;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if config.checkout.is_none() {
        log::warn!("PAYPAL_CLIENT_ID environment variable not set; checkout is disabled");
    }

    let address = config.address.clone();
    let port = config.port;

    let context = match AppContext::initialize(config) {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let context = web::Data::new(context);

    log::info!("Listening on {address}:{port}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(context.clone())
            .configure(configure_app)
    })
    .bind((address, port))?
    .run()
    .await
}
