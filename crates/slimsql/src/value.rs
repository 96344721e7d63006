//! SQL literal values and their rendering
//!
//! Every value renders as inline SQL text: strings wrap in single quotes
//! with embedded quotes doubled, booleans and numbers render as quoted
//! strings (`'0'`, `'1'`, `'3.100000'`), and raw fragments pass through
//! verbatim.
//!
//! # Example
//!
//! ```ignore
//! use slimsql::{raw, Value};
//!
//! assert_eq!(Value::from("foo").to_sql()?, "'foo'");
//! assert_eq!(Value::Null.to_sql()?, "NULL");
//! assert_eq!(raw("NOW()").to_sql()?, "NOW()");
//! ```

use chrono::NaiveDateTime;

use crate::error::{SqlError, SqlResult};

/// Timestamp layout used for datetime literals
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A scalar value that can be rendered as a SQL literal
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`
    Null,
    /// Boolean, rendered as `'0'` or `'1'`
    Bool(bool),
    /// Signed integer, rendered as a quoted decimal string
    Int(i64),
    /// Floating point number, rendered with six fractional digits
    Float(f64),
    /// Text, quoted with embedded quotes doubled
    Text(String),
    /// Date and time, rendered as `'YYYY-MM-DD HH:MM:SS'`
    DateTime(NaiveDateTime),
    /// Raw SQL fragment inserted verbatim, without quoting or escaping
    Raw(String),
    /// UUID, rendered as a quoted hyphenated string
    #[cfg(feature = "uuid")]
    Uuid(uuid::Uuid),
    /// Arbitrary-precision decimal, rendered as a quoted string
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
}

impl Value {
    /// Render this value as SQL literal text.
    ///
    /// Fails with [`SqlError::TypeMismatch`] for non-finite floats, which
    /// have no SQL literal form.
    pub fn to_sql(&self) -> SqlResult<String> {
        let mut sql = String::new();
        self.write_sql(&mut sql)?;
        Ok(sql)
    }

    /// Write this value as SQL literal text into an existing buffer.
    pub(crate) fn write_sql(&self, sql: &mut String) -> SqlResult<()> {
        match self {
            Value::Null => sql.push_str("NULL"),
            Value::Bool(b) => sql.push_str(if *b { "'1'" } else { "'0'" }),
            Value::Int(i) => {
                sql.push('\'');
                sql.push_str(&i.to_string());
                sql.push('\'');
            }
            Value::Float(f) => {
                if !f.is_finite() {
                    return Err(SqlError::type_mismatch(format!(
                        "non-finite float {f} has no SQL literal form"
                    )));
                }
                sql.push('\'');
                sql.push_str(&format!("{f:.6}"));
                sql.push('\'');
            }
            Value::Text(s) => write_quoted(sql, s),
            Value::DateTime(dt) => {
                sql.push('\'');
                sql.push_str(&dt.format(DATETIME_FORMAT).to_string());
                sql.push('\'');
            }
            Value::Raw(s) => sql.push_str(s),
            #[cfg(feature = "uuid")]
            Value::Uuid(u) => {
                sql.push('\'');
                sql.push_str(&u.to_string());
                sql.push('\'');
            }
            #[cfg(feature = "rust_decimal")]
            Value::Decimal(d) => {
                sql.push('\'');
                sql.push_str(&d.to_string());
                sql.push('\'');
            }
        }
        Ok(())
    }

    /// Check whether this value is SQL `NULL`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// Build a raw SQL fragment that renders verbatim, without quoting
///
/// # Example
///
/// ```ignore
/// use slimsql::raw;
///
/// let expr = raw("NOW()");
/// assert_eq!(expr.to_sql()?, "NOW()");
/// ```
pub fn raw(sql: impl Into<String>) -> Value {
    Value::Raw(sql.into())
}

/// Write `text` single-quoted, doubling embedded quotes
fn write_quoted(sql: &mut String, text: &str) {
    sql.reserve(text.len() + 2);
    sql.push('\'');
    for ch in text.chars() {
        if ch == '\'' {
            sql.push('\'');
        }
        sql.push(ch);
    }
    sql.push('\'');
}

macro_rules! impl_value_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<chrono::NaiveDate> for Value {
    fn from(value: chrono::NaiveDate) -> Self {
        Value::DateTime(value.and_time(chrono::NaiveTime::MIN))
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(value: chrono::DateTime<chrono::Utc>) -> Self {
        Value::DateTime(value.naive_utc())
    }
}

impl From<chrono::DateTime<chrono::Local>> for Value {
    fn from(value: chrono::DateTime<chrono::Local>) -> Self {
        Value::DateTime(value.naive_local())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

#[cfg(feature = "uuid")]
impl From<uuid::Uuid> for Value {
    fn from(value: uuid::Uuid) -> Self {
        Value::Uuid(value)
    }
}

#[cfg(feature = "rust_decimal")]
impl From<rust_decimal::Decimal> for Value {
    fn from(value: rust_decimal::Decimal) -> Self {
        Value::Decimal(value)
    }
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for Value {
    type Error = SqlError;

    /// Convert a JSON scalar into a SQL value.
    ///
    /// Arrays and objects are rejected; arrays belong at the operand
    /// level, and objects have no literal form.
    fn try_from(value: serde_json::Value) -> SqlResult<Self> {
        match value {
            serde_json::Value::Null => Ok(Value::Null),
            serde_json::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(SqlError::type_mismatch(format!(
                        "JSON number {n} is out of range"
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::Text(s)),
            serde_json::Value::Array(_) => Err(SqlError::type_mismatch(
                "JSON array is not a scalar; convert it to an operand instead",
            )),
            serde_json::Value::Object(_) => Err(SqlError::type_mismatch(
                "JSON object has no SQL literal form",
            )),
        }
    }
}
