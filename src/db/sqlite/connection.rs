//! SQLite database connection and migration management.

use std::path::Path;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use super::employee::SqliteEmployeeRepository;
use crate::db::{Database, DbError, DbResult};

/// SQLite database implementation.
///
/// Owns the connection pool; repositories borrow it per call. The pool checks
/// a connection out per query and returns it when the query future completes,
/// so no session outlives the request that acquired it.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if missing) a database at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Open a database from a sqlite connection string (e.g. `sqlite://roster.db`).
    pub async fn connect(url: &str) -> DbResult<Self> {
        let options =
            SqliteConnectOptions::from_str(url).map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        let pool = SqlitePoolOptions::new()
            .connect_with(options.create_if_missing(true))
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Capped at one connection: each in-memory SQLite connection is its own
    /// database, so a larger pool would hand out empty databases.
    pub async fn in_memory() -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;
        Ok(Self { pool })
    }

    /// Run pending migrations. Idempotent.
    pub async fn migrate(&self) -> DbResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })
    }

    /// Access the underlying pool. Useful for tests and advanced operations
    /// that need direct database access.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Employees<'a> = SqliteEmployeeRepository<'a>;

    fn employees(&self) -> Self::Employees<'_> {
        SqliteEmployeeRepository { pool: &self.pool }
    }
}
