//! SQL identifier handling with validation and quoting
//!
//! Identifiers are parsed once and rendered per dialect. A dotted path
//! splits on every `.`, each segment wraps in the dialect's quote
//! character, and embedded quote characters are doubled.
//!
//! # Example
//!
//! ```ignore
//! use slimsql::{Dialect, Ident};
//!
//! let ident = Ident::parse("schema.table")?;
//! assert_eq!(ident.to_sql(Dialect::MySql), "`schema`.`table`");
//! assert_eq!(ident.to_sql(Dialect::Ansi), "\"schema\".\"table\"");
//! ```

use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};

/// A validated SQL identifier, possibly a dotted path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    segments: Vec<String>,
}

impl Ident {
    /// Parse an identifier, splitting on every `.`.
    ///
    /// Empty input, empty segments (leading, trailing, or doubled dots),
    /// and NUL bytes are rejected. Quote characters are legal inside a
    /// segment; they are doubled at render time.
    pub fn parse(input: &str) -> SqlResult<Self> {
        if input.is_empty() {
            return Err(SqlError::validation("identifier is empty"));
        }
        if input.contains('\0') {
            return Err(SqlError::validation("identifier contains a NUL byte"));
        }

        let segments: Vec<String> = input.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(SqlError::validation(format!(
                "identifier {input:?} has an empty segment"
            )));
        }

        Ok(Self { segments })
    }

    /// The parsed segments, in order
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Render this identifier as quoted SQL text for the given dialect
    pub fn to_sql(&self, dialect: Dialect) -> String {
        let mut sql = String::new();
        self.write_sql(dialect, &mut sql);
        sql
    }

    /// Write this identifier as quoted SQL text into an existing buffer
    pub(crate) fn write_sql(&self, dialect: Dialect, sql: &mut String) {
        let quote = dialect.identifier_quote();
        let capacity: usize = self.segments.iter().map(|s| s.len() + 3).sum();
        sql.reserve(capacity);

        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                sql.push('.');
            }
            sql.push(quote);
            for ch in segment.chars() {
                if ch == quote {
                    sql.push(quote);
                }
                sql.push(ch);
            }
            sql.push(quote);
        }
    }
}

/// Conversion into a validated [`Ident`]
///
/// Implemented for [`Ident`] itself and for string types, so predicate
/// constructors accept either a pre-parsed identifier or a raw name.
pub trait IntoIdent {
    fn into_ident(self) -> SqlResult<Ident>;
}

impl IntoIdent for Ident {
    fn into_ident(self) -> SqlResult<Ident> {
        Ok(self)
    }
}

impl IntoIdent for &Ident {
    fn into_ident(self) -> SqlResult<Ident> {
        Ok(self.clone())
    }
}

impl IntoIdent for &str {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(self)
    }
}

impl IntoIdent for String {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(&self)
    }
}

impl IntoIdent for &String {
    fn into_ident(self) -> SqlResult<Ident> {
        Ident::parse(self)
    }
}
