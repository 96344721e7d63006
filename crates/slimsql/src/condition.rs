//! Equality and membership predicates
//!
//! [`is`] and [`is_not`] build null-safe comparison conditions from a
//! column and either a single value or a list. Scalars render as `=` or
//! `!=` comparisons, nulls as `IS [NOT] NULL`, and lists as `IN` clauses
//! with any null member split into its own clause.
//!
//! # Example
//!
//! ```ignore
//! use slimsql::{is, Dialect};
//!
//! let cond = is("foo", vec!["x", "y"])?;
//! assert_eq!(cond.to_sql(Dialect::MySql)?, "`foo` IN ( 'x', 'y' )");
//!
//! let cond = is("foo", Option::<i64>::None)?;
//! assert_eq!(cond.to_sql(Dialect::MySql)?, "`foo` IS NULL");
//! ```

use chrono::NaiveDateTime;

use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::ident::{Ident, IntoIdent};
use crate::value::Value;

#[cfg(feature = "json")]
use crate::error::SqlError;

/// The right-hand side of a predicate: one value or a list of values
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single comparison value
    One(Value),
    /// A list of values for membership tests
    Many(Vec<Value>),
}

impl Operand {
    pub(crate) fn as_values(&self) -> &[Value] {
        match self {
            Operand::One(value) => std::slice::from_ref(value),
            Operand::Many(values) => values,
        }
    }
}

/// Conversion into an [`Operand`]
///
/// Scalars become [`Operand::One`]; vectors, slices, and arrays become
/// [`Operand::Many`]. `None` maps to a single SQL `NULL`.
pub trait IntoOperand {
    fn into_operand(self) -> Operand;
}

impl IntoOperand for Operand {
    fn into_operand(self) -> Operand {
        self
    }
}

impl IntoOperand for Value {
    fn into_operand(self) -> Operand {
        Operand::One(self)
    }
}

impl IntoOperand for &Value {
    fn into_operand(self) -> Operand {
        Operand::One(self.clone())
    }
}

macro_rules! impl_into_operand_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoOperand for $ty {
                fn into_operand(self) -> Operand {
                    Operand::One(self.into())
                }
            }
        )*
    };
}

impl_into_operand_scalar!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    &str,
    String,
    NaiveDateTime,
    chrono::NaiveDate,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::Local>,
);

#[cfg(feature = "uuid")]
impl_into_operand_scalar!(uuid::Uuid);

#[cfg(feature = "rust_decimal")]
impl_into_operand_scalar!(rust_decimal::Decimal);

impl<T: Into<Value>> IntoOperand for Option<T> {
    fn into_operand(self) -> Operand {
        Operand::One(Value::from(self.map(Into::into)))
    }
}

impl<T: Into<Value>> IntoOperand for Vec<T> {
    fn into_operand(self) -> Operand {
        Operand::Many(self.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> IntoOperand for &[T] {
    fn into_operand(self) -> Operand {
        Operand::Many(self.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> IntoOperand for [T; N] {
    fn into_operand(self) -> Operand {
        Operand::Many(self.into_iter().map(Into::into).collect())
    }
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for Operand {
    type Error = SqlError;

    /// Convert dynamic JSON into an operand.
    ///
    /// A JSON array becomes a list operand with every element converted
    /// as a scalar; anything else becomes a single value. Nested arrays
    /// and objects are rejected.
    fn try_from(value: serde_json::Value) -> SqlResult<Self> {
        match value {
            serde_json::Value::Array(items) => {
                let values = items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<SqlResult<Vec<_>>>()?;
                Ok(Operand::Many(values))
            }
            other => Ok(Operand::One(Value::try_from(other)?)),
        }
    }
}

/// A rendered-on-demand comparison predicate
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    column: Ident,
    operand: Operand,
    negated: bool,
}

impl Condition {
    /// Render this condition as SQL text for the given dialect
    pub fn to_sql(&self, dialect: Dialect) -> SqlResult<String> {
        let mut sql = String::new();
        self.write_sql(dialect, &mut sql)?;
        Ok(sql)
    }

    fn write_sql(&self, dialect: Dialect, sql: &mut String) -> SqlResult<()> {
        let values = self.operand.as_values();

        match values.len() {
            // An empty list matches nothing, so the condition folds to a
            // constant that keeps the surrounding query valid.
            0 => sql.push_str(if self.negated { "1=1" } else { "0=1" }),
            1 => {
                self.column.write_sql(dialect, sql);
                let value = &values[0];
                if value.is_null() {
                    sql.push_str(if self.negated { " IS NOT NULL" } else { " IS NULL" });
                } else {
                    sql.push_str(if self.negated { " != " } else { " = " });
                    value.write_sql(sql)?;
                }
            }
            _ => {
                let mut has_null = false;
                let mut rendered = Vec::with_capacity(values.len());
                for value in values {
                    if value.is_null() {
                        has_null = true;
                    } else {
                        rendered.push(value.to_sql()?);
                    }
                }

                let column = self.column.to_sql(dialect);
                let mut clauses = Vec::with_capacity(2);
                if !rendered.is_empty() {
                    let keyword = if self.negated { " NOT IN ( " } else { " IN ( " };
                    clauses.push(format!("{column}{keyword}{} )", rendered.join(", ")));
                }
                if has_null {
                    let is = if self.negated { " IS NOT NULL" } else { " IS NULL" };
                    clauses.push(format!("{column}{is}"));
                }

                let joiner = if self.negated { " AND " } else { " OR " };
                sql.push_str(&clauses.join(joiner));
            }
        }
        Ok(())
    }
}

/// Build an equality or membership predicate for `column`.
///
/// Nulls render as `IS NULL`, single values as `=`, and lists as `IN`.
/// A list holding both values and a null becomes two clauses joined with
/// `OR`. An empty list renders as `0=1`.
pub fn is(column: impl IntoIdent, value: impl IntoOperand) -> SqlResult<Condition> {
    Ok(Condition {
        column: column.into_ident()?,
        operand: value.into_operand(),
        negated: false,
    })
}

/// Build the negated counterpart of [`is`].
///
/// Nulls render as `IS NOT NULL`, single values as `!=`, and lists as
/// `NOT IN`. A list holding both values and a null becomes two clauses
/// joined with `AND`. An empty list renders as `1=1`.
pub fn is_not(column: impl IntoIdent, value: impl IntoOperand) -> SqlResult<Condition> {
    Ok(Condition {
        column: column.into_ident()?,
        operand: value.into_operand(),
        negated: true,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::value::raw;

    fn mysql(cond: SqlResult<Condition>) -> String {
        cond.unwrap().to_sql(Dialect::MySql).unwrap()
    }

    fn dt() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2015, 1, 1)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap()
    }

    #[test]
    fn is_renders_scalars() {
        assert_eq!(mysql(is("foo", Value::Null)), "`foo` IS NULL");
        assert_eq!(mysql(is("foo", 0)), "`foo` = '0'");
        assert_eq!(mysql(is("foo", "bar")), "`foo` = 'bar'");
        assert_eq!(mysql(is("foo", dt())), "`foo` = '2015-01-01 01:00:00'");
        assert_eq!(mysql(is("foo", raw("BAR"))), "`foo` = BAR");
    }

    #[test]
    fn is_renders_lists() {
        assert_eq!(mysql(is("foo", vec!["x", "y"])), "`foo` IN ( 'x', 'y' )");
        assert_eq!(
            mysql(is("foo", vec![Value::from("x"), Value::Null])),
            "`foo` IN ( 'x' ) OR `foo` IS NULL"
        );
        assert_eq!(mysql(is("foo", vec!["x"])), "`foo` = 'x'");
        assert_eq!(mysql(is("foo", Vec::<Value>::new())), "0=1");
        assert_eq!(mysql(is("foo", vec![Value::Null])), "`foo` IS NULL");
    }

    #[test]
    fn is_not_renders_scalars() {
        assert_eq!(mysql(is_not("foo", Value::Null)), "`foo` IS NOT NULL");
        assert_eq!(mysql(is_not("foo", 0)), "`foo` != '0'");
        assert_eq!(mysql(is_not("foo", "bar")), "`foo` != 'bar'");
        assert_eq!(mysql(is_not("foo", dt())), "`foo` != '2015-01-01 01:00:00'");
        assert_eq!(mysql(is_not("foo", raw("BAR"))), "`foo` != BAR");
    }

    #[test]
    fn is_not_renders_lists() {
        assert_eq!(
            mysql(is_not("foo", vec!["x", "y"])),
            "`foo` NOT IN ( 'x', 'y' )"
        );
        assert_eq!(
            mysql(is_not("foo", vec![Value::from("x"), Value::Null])),
            "`foo` NOT IN ( 'x' ) AND `foo` IS NOT NULL"
        );
        assert_eq!(mysql(is_not("foo", vec!["x"])), "`foo` != 'x'");
        assert_eq!(mysql(is_not("foo", Vec::<Value>::new())), "1=1");
        assert_eq!(mysql(is_not("foo", vec![Value::Null])), "`foo` IS NOT NULL");
    }

    #[test]
    fn list_of_only_nulls_folds_to_single_null_clause() {
        assert_eq!(
            mysql(is("foo", vec![Value::Null, Value::Null])),
            "`foo` IS NULL"
        );
        assert_eq!(
            mysql(is_not("foo", vec![Value::Null, Value::Null])),
            "`foo` IS NOT NULL"
        );
    }

    #[test]
    fn none_maps_to_null_comparison() {
        assert_eq!(mysql(is("foo", Option::<i64>::None)), "`foo` IS NULL");
        assert_eq!(mysql(is("foo", Some(1))), "`foo` = '1'");
    }

    #[test]
    fn slices_and_arrays_are_lists() {
        let values = ["x", "y"];
        assert_eq!(mysql(is("foo", &values[..])), "`foo` IN ( 'x', 'y' )");
        assert_eq!(mysql(is("foo", values)), "`foo` IN ( 'x', 'y' )");
    }

    #[test]
    fn dialect_only_affects_identifier_quoting() {
        let cond = is("foo.bar", "baz").unwrap();
        assert_eq!(cond.to_sql(Dialect::MySql).unwrap(), "`foo`.`bar` = 'baz'");
        assert_eq!(
            cond.to_sql(Dialect::Ansi).unwrap(),
            "\"foo\".\"bar\" = 'baz'"
        );
    }

    #[test]
    fn invalid_column_fails_at_construction() {
        assert!(is("", "x").unwrap_err().is_validation());
        assert!(is_not("a..b", "x").unwrap_err().is_validation());
    }

    #[test]
    fn non_finite_float_fails_at_render() {
        let cond = is("foo", f64::NAN).unwrap();
        assert!(cond.to_sql(Dialect::MySql).unwrap_err().is_type_mismatch());

        let cond = is("foo", vec![1.0, f64::INFINITY]).unwrap();
        assert!(cond.to_sql(Dialect::MySql).unwrap_err().is_type_mismatch());
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_arrays_become_list_operands() {
        use serde_json::json;

        let operand = Operand::try_from(json!(["x", "y"])).unwrap();
        assert_eq!(mysql(is("foo", operand)), "`foo` IN ( 'x', 'y' )");

        let operand = Operand::try_from(json!("bar")).unwrap();
        assert_eq!(mysql(is("foo", operand)), "`foo` = 'bar'");

        assert!(Operand::try_from(json!([[1]])).unwrap_err().is_type_mismatch());
    }
}
