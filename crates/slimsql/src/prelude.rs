//! Convenient imports for typical `slimsql` usage.
//!
//! This module is intentionally small and focused on the most common APIs so
//! examples can start with:
//!
//! ```ignore
//! use slimsql::prelude::*;
//! ```

pub use crate::{
    Condition, Dialect, Ident, IntoIdent, IntoOperand, Operand, Session, SqlClient, SqlError,
    SqlResult, Value, is, is_not, raw,
};

#[cfg(feature = "pool")]
pub use crate::{create_pool, create_pool_with_config};
