//! Database session: a client paired with a dialect
//!
//! [`Session`] bundles any [`SqlClient`] with a [`Dialect`] and exposes
//! the quoting and predicate helpers alongside query execution and
//! transaction control.
//!
//! # Example
//!
//! ```ignore
//! use slimsql::{Dialect, Session};
//!
//! let session = Session::connect("postgres://localhost/app", Dialect::Ansi).await?;
//!
//! let cond = session.is("type", vec!["user", "admin"])?;
//! let rows = session
//!     .exec(&format!("SELECT * FROM account WHERE {cond}"), &[])
//!     .await?;
//! ```

use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row, Statement};

use crate::client::SqlClient;
use crate::condition::{self, IntoOperand};
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::ident::IntoIdent;
use crate::value::Value;

/// A database client paired with a dialect
pub struct Session<C> {
    client: C,
    dialect: Dialect,
}

impl<C> Session<C> {
    /// Wrap an existing client in a session.
    ///
    /// The client can be a direct connection, a pooled client, or a
    /// transaction.
    pub fn new(client: C, dialect: Dialect) -> Self {
        Self { client, dialect }
    }

    /// The dialect this session renders identifiers with
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Borrow the underlying client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Unwrap the session, returning the underlying client
    pub fn into_client(self) -> C {
        self.client
    }

    /// Render a value as SQL literal text.
    pub fn quote_value(&self, value: impl Into<Value>) -> SqlResult<String> {
        value.into().to_sql()
    }

    /// Render an identifier as quoted SQL text for this session's dialect.
    pub fn quote_identifier(&self, ident: impl IntoIdent) -> SqlResult<String> {
        Ok(ident.into_ident()?.to_sql(self.dialect))
    }

    /// Render an equality or membership predicate.
    ///
    /// See [`crate::is`] for the rendering rules.
    pub fn is(&self, column: impl IntoIdent, value: impl IntoOperand) -> SqlResult<String> {
        condition::is(column, value)?.to_sql(self.dialect)
    }

    /// Render a negated equality or membership predicate.
    ///
    /// See [`crate::is_not`] for the rendering rules.
    pub fn is_not(&self, column: impl IntoIdent, value: impl IntoOperand) -> SqlResult<String> {
        condition::is_not(column, value)?.to_sql(self.dialect)
    }
}

impl Session<tokio_postgres::Client> {
    /// Connect to a database and drive the connection in a background task.
    pub async fn connect(url: &str, dialect: Dialect) -> SqlResult<Self> {
        let (client, connection) = tokio_postgres::connect(url, NoTls)
            .await
            .map_err(|e| SqlError::Connection(e.to_string()))?;

        tokio::spawn(async move {
            if let Err(_e) = connection.await {
                #[cfg(feature = "tracing")]
                tracing::error!(target: "slimsql.sql", error = %_e, "connection task failed");
            }
        });

        Ok(Self::new(client, dialect))
    }
}

impl<C: SqlClient> Session<C> {
    /// Run a query and return all rows.
    pub async fn exec(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<Vec<Row>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slimsql.sql", sql, "exec");
        self.client.exec(sql, params).await
    }

    /// Run a statement and return the number of affected rows.
    pub async fn execute(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> SqlResult<u64> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slimsql.sql", sql, "execute");
        self.client.execute(sql, params).await
    }

    /// Prepare a statement for repeated execution on this connection.
    pub async fn prepare(&self, sql: &str) -> SqlResult<Statement> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slimsql.sql", sql, "prepare");
        self.client.prepare(sql).await
    }

    /// Run a prepared statement and return all rows.
    pub async fn exec_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<Vec<Row>> {
        self.client.exec_prepared(statement, params).await
    }

    /// Run a prepared statement and return the number of affected rows.
    pub async fn execute_prepared(
        &self,
        statement: &Statement,
        params: &[&(dyn ToSql + Sync)],
    ) -> SqlResult<u64> {
        self.client.execute_prepared(statement, params).await
    }

    /// Start a transaction.
    ///
    /// Transaction control is a stateless pass-through: nesting is not
    /// tracked, and closing an open transaction is the caller's
    /// responsibility.
    pub async fn begin(&self) -> SqlResult<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slimsql.sql", "begin");
        self.client.batch("BEGIN").await
    }

    /// Commit the current transaction.
    pub async fn commit(&self) -> SqlResult<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slimsql.sql", "commit");
        self.client.batch("COMMIT").await
    }

    /// Roll back the current transaction.
    pub async fn rollback(&self) -> SqlResult<()> {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "slimsql.sql", "rollback");
        self.client.batch("ROLLBACK").await
    }
}
