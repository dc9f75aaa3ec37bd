//! Seams between the clip store and diesel.

use anyhow::Result;
use diesel::{Connection, SqliteConnection};

/// Runs closures against a pooled SQLite connection.
///
/// 在连接池中的连接上执行闭包。
pub trait DbExecutor: Send + Sync {
    fn run<T>(&self, f: impl FnOnce(&mut SqliteConnection) -> Result<T>) -> Result<T>;

    /// Like [`run`](Self::run), rolled back as a whole when `f` fails.
    fn run_in_transaction<T>(
        &self,
        f: impl FnOnce(&mut SqliteConnection) -> Result<T>,
    ) -> Result<T> {
        self.run(|conn| conn.transaction::<_, anyhow::Error, _>(f))
    }
}

/// Domain value → insertable row.
pub trait InsertMapper<D, R>: Sync + Send {
    fn to_row(&self, domain: &D) -> Result<R>;
}

/// Queried row → domain value.
pub trait RowMapper<R, D>: Sync + Send {
    fn to_domain(&self, row: &R) -> Result<D>;
}
