//! Generic client trait for unified database access

use tokio_postgres::types::ToSql;
use tokio_postgres::{Row, Statement};

use crate::error::SqlResult;

/// A trait that unifies database clients and transactions.
///
/// Sessions and helpers accept any `SqlClient`, so the same code runs
/// against a direct connection, a pooled client, or a transaction.
pub trait SqlClient: Send + Sync {
    /// Run a query and return all rows.
    fn exec(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = SqlResult<Vec<Row>>> + Send;

    /// Run a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = SqlResult<u64>> + Send;

    /// Run statements without preparing them.
    ///
    /// Transaction control (`BEGIN`, `COMMIT`, `ROLLBACK`) goes through
    /// here; the simple query protocol does not support parameters.
    fn batch(&self, sql: &str) -> impl std::future::Future<Output = SqlResult<()>> + Send;

    /// Prepare a statement on this connection.
    ///
    /// Prepared statements are per-connection and must not be used across
    /// connections.
    fn prepare(&self, sql: &str) -> impl std::future::Future<Output = SqlResult<Statement>> + Send;

    /// Run a prepared statement and return all rows.
    fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = SqlResult<Vec<Row>>> + Send;

    /// Run a prepared statement and return the number of affected rows.
    fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = SqlResult<u64>> + Send;
}

impl SqlClient for tokio_postgres::Client {
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        Ok(tokio_postgres::Client::query(self, sql, params).await?)
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        Ok(tokio_postgres::Client::execute(self, sql, params).await?)
    }

    async fn batch(&self, sql: &str) -> SqlResult<()> {
        Ok(tokio_postgres::Client::batch_execute(self, sql).await?)
    }

    async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        Ok(tokio_postgres::Client::prepare(self, sql).await?)
    }

    async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        Ok(tokio_postgres::Client::query(self, statement, params).await?)
    }

    async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        Ok(tokio_postgres::Client::execute(self, statement, params).await?)
    }
}

impl SqlClient for tokio_postgres::Transaction<'_> {
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        Ok(tokio_postgres::Transaction::query(self, sql, params).await?)
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        Ok(tokio_postgres::Transaction::execute(self, sql, params).await?)
    }

    async fn batch(&self, sql: &str) -> SqlResult<()> {
        Ok(tokio_postgres::Transaction::batch_execute(self, sql).await?)
    }

    async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        Ok(tokio_postgres::Transaction::prepare(self, sql).await?)
    }

    async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        Ok(tokio_postgres::Transaction::query(self, statement, params).await?)
    }

    async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        Ok(tokio_postgres::Transaction::execute(self, statement, params).await?)
    }
}

// ===== deadpool-postgres support =====

#[cfg(feature = "pool")]
impl SqlClient for deadpool_postgres::Client {
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        // Delegate to the deref target (ClientWrapper / tokio_postgres::Client).
        SqlClient::exec(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        SqlClient::execute(&**self, sql, params).await
    }

    async fn batch(&self, sql: &str) -> SqlResult<()> {
        SqlClient::batch(&**self, sql).await
    }

    async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        SqlClient::prepare(&**self, sql).await
    }

    async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        SqlClient::exec_prepared(&**self, statement, params).await
    }

    async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        SqlClient::execute_prepared(&**self, statement, params).await
    }
}

#[cfg(feature = "pool")]
impl SqlClient for deadpool_postgres::ClientWrapper {
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        SqlClient::exec(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        SqlClient::execute(&**self, sql, params).await
    }

    async fn batch(&self, sql: &str) -> SqlResult<()> {
        SqlClient::batch(&**self, sql).await
    }

    async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        SqlClient::prepare(&**self, sql).await
    }

    async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        SqlClient::exec_prepared(&**self, statement, params).await
    }

    async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        SqlClient::execute_prepared(&**self, statement, params).await
    }
}

#[cfg(feature = "pool")]
impl SqlClient for deadpool_postgres::Transaction<'_> {
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        SqlClient::exec(&**self, sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        SqlClient::execute(&**self, sql, params).await
    }

    async fn batch(&self, sql: &str) -> SqlResult<()> {
        SqlClient::batch(&**self, sql).await
    }

    async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        SqlClient::prepare(&**self, sql).await
    }

    async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        SqlClient::exec_prepared(&**self, statement, params).await
    }

    async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        SqlClient::execute_prepared(&**self, statement, params).await
    }
}

// Reference implementation, so wrappers can hold &C instead of owned C.

impl<C: SqlClient> SqlClient for &C {
    async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        (*self).exec(sql, params).await
    }

    async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        (*self).execute(sql, params).await
    }

    async fn batch(&self, sql: &str) -> SqlResult<()> {
        (*self).batch(sql).await
    }

    async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        (*self).prepare(sql).await
    }

    async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        (*self).exec_prepared(statement, params).await
    }

    async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        (*self).execute_prepared(statement, params).await
    }
}
