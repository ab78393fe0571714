//! Load products, images, sizes and stock from a CSV file.
//!
//! Usage: `catalog-seed <catalog.csv>`

use dotenvy::dotenv;

use doom_shop::db::AppContext;
use doom_shop::forms::catalog::CatalogUpload;
use doom_shop::services::catalog::seed_catalog;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

    let Some(path) = std::env::args().nth(1) else {
        log::error!("Usage: catalog-seed <catalog.csv>");
        std::process::exit(1);
    };

    let entries = match CatalogUpload::from_path(&path).and_then(CatalogUpload::into_seed_entries) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Failed to read {path}: {e}");
            std::process::exit(1);
        }
    };

    let context = match AppContext::from_env() {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    let repo = match context.repository() {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = seed_catalog(&repo, &entries) {
        log::error!("Failed to seed catalog: {e}");
        std::process::exit(1);
    }
}
