//! Delete every catalog row and restart the product, image and variant ids.
//! Irreversible.

use std::error::Error;

use dotenvy::dotenv;

use doom_shop::db::AppContext;
use doom_shop::services::catalog::reset_catalog;

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok();

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

    match reset_catalog(&repo) {
        Ok(report) => {
            log::info!(
                "Catalog cleared: {} rows deleted, {} identity sequences reset",
                report.total_deleted(),
                report.identities_reset.len()
            );
        }
        Err(e) => {
            match e.source() {
                Some(source) => log::error!("{e}: {source}"),
                None => log::error!("{e}"),
            }
            std::process::exit(1);
        }
    }
}
