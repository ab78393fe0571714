//! Connection pool construction and the application context that owns it.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use thiserror::Error;

use crate::config::{ConfigError, DatabaseConfig, ServerConfig};
use crate::repository::DieselRepository;
use crate::services::ServiceError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Errors raised while building the connection pool.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

/// Errors that prevent a binary from building its [`AppContext`].
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Pragmas applied to every SQLite connection handed out by the pool.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {}; PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON;",
            self.busy_timeout.as_millis()
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Build an r2d2 pool for the SQLite database at `database_url`.
pub fn establish_connection_pool(database_url: &str, pool_size: u32) -> Result<DbPool, DbError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(pool_size)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout: BUSY_TIMEOUT,
        }))
        .build(manager)?;
    Ok(pool)
}

/// Database handle owned by the [`AppContext`].
#[derive(Clone)]
pub enum Database {
    Connected(DbPool),
    Unconfigured,
}

impl Database {
    pub fn is_connected(&self) -> bool {
        matches!(self, Database::Connected(_))
    }
}

/// Application-scoped state built once at startup and handed to every
/// component that needs data access.
#[derive(Clone)]
pub struct AppContext {
    config: ServerConfig,
    database: Database,
}

impl AppContext {
    /// Build the context, opening the pool when the database is configured.
    ///
    /// An unconfigured database is not an error here: the context is still
    /// usable and [`AppContext::repository`] reports the missing handle.
    pub fn initialize(config: ServerConfig) -> Result<Self, DbError> {
        let database = match &config.database {
            DatabaseConfig::Configured { url, pool_size } => {
                let pool = establish_connection_pool(url, *pool_size)?;
                log::info!(
                    "Database pool ready ({} environment, {} connections max)",
                    config.environment,
                    pool_size
                );
                Database::Connected(pool)
            }
            DatabaseConfig::Unconfigured => {
                log::warn!("DATABASE_URL is not set; catalog data access is unavailable");
                Database::Unconfigured
            }
        };

        Ok(Self { config, database })
    }

    /// Read configuration from the environment and build the context.
    pub fn from_env() -> Result<Self, StartupError> {
        let config = ServerConfig::from_env()?;
        Ok(Self::initialize(config)?)
    }

    /// Wrap an already built pool.
    pub fn with_pool(config: ServerConfig, pool: DbPool) -> Self {
        Self {
            config,
            database: Database::Connected(pool),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    /// The shared pool, if one was configured.
    pub fn pool(&self) -> Option<&DbPool> {
        match &self.database {
            Database::Connected(pool) => Some(pool),
            Database::Unconfigured => None,
        }
    }

    /// Repository backed by the shared pool.
    pub fn repository(&self) -> Result<DieselRepository, ServiceError> {
        self.pool()
            .cloned()
            .map(DieselRepository::new)
            .ok_or(ServiceError::DatabaseUnconfigured)
    }
}
