//! # slimsql
//!
//! A lightweight SQL access layer for Rust.
//!
//! ## Features
//!
//! - **Literal rendering**: values quote as inline SQL text (`'foo'`, `'3.100000'`, `NULL`)
//! - **Dialect-aware identifiers**: backtick or double-quote quoting with embedded quotes doubled
//! - **Null-safe predicates**: [`is`] / [`is_not`] fold scalars, lists, and nulls into
//!   the right comparison
//! - **Thin driver facade**: [`Session`] pairs any [`SqlClient`] with a dialect
//! - **Transaction-friendly**: pass a transaction anywhere a `SqlClient` is expected
//!
//! ## Quick start
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
//!
//! session.begin().await?;
//! let set = session.quote_value(true)?;
//! let whom = session.is("id", 1)?;
//! session
//!     .execute(&format!("UPDATE account SET checked = {set} WHERE {whom}"), &[])
//!     .await?;
//! session.commit().await?;
//! ```

pub mod client;
pub mod condition;
pub mod dialect;
pub mod error;
pub mod ident;
pub mod prelude;
pub mod session;
pub mod value;

pub use client::SqlClient;
pub use condition::{Condition, IntoOperand, Operand, is, is_not};
pub use dialect::Dialect;
pub use error::{SqlError, SqlResult};
pub use ident::{Ident, IntoIdent};
pub use session::Session;
pub use value::{Value, raw};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{create_pool, create_pool_with_config, create_pool_with_manager_config};
