//! Print a summary of the catalog: product count, a few samples and the
//! per-category breakdown.

use dotenvy::dotenv;

use doom_shop::db::AppContext;
use doom_shop::services::catalog::catalog_status;

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

    match catalog_status(&repo) {
        Ok(status) => print!("{status}"),
        Err(e) => {
            log::error!("Failed to read catalog status: {e}");
            std::process::exit(1);
        }
    }
}
