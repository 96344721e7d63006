//! SQL dialect selection
//!
//! The dialect only affects identifier quoting. Literal rendering is shared
//! across dialects.

/// Identifier quoting style used when rendering SQL text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Backtick-quoted identifiers (MySQL, MariaDB)
    #[default]
    MySql,
    /// Double-quoted identifiers per the SQL standard (PostgreSQL, SQLite)
    Ansi,
}

impl Dialect {
    /// The quote character wrapped around each identifier segment
    pub fn identifier_quote(self) -> char {
        match self {
            Self::MySql => '`',
            Self::Ansi => '"',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_char_per_dialect() {
        assert_eq!(Dialect::MySql.identifier_quote(), '`');
        assert_eq!(Dialect::Ansi.identifier_quote(), '"');
    }

    #[test]
    fn default_dialect_is_mysql() {
        assert_eq!(Dialect::default(), Dialect::MySql);
    }
}
