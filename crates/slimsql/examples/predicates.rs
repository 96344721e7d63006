//! Literal, identifier, and predicate rendering example
//!
//! Run with: cargo run --example predicates -p slimsql
//!
//! Everything here renders SQL text without touching a database.

use chrono::NaiveDate;
use slimsql::{Dialect, Ident, SqlResult, Value, is, is_not, raw};

fn main() -> SqlResult<()> {
    println!("=== Literal rendering ===\n");

    let values = vec![
        Value::Null,
        Value::from(false),
        Value::from(true),
        Value::from(42),
        Value::from(3.1),
        Value::from("it's"),
        Value::from(
            NaiveDate::from_ymd_opt(2015, 1, 1)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap(),
        ),
        raw("NOW()"),
    ];
    for value in &values {
        println!("  {value:?} -> {}", value.to_sql()?);
    }

    // ============================================
    // Identifier quoting per dialect
    // ============================================
    println!("\n=== Identifier quoting ===\n");

    let ident = Ident::parse("app.user")?;
    println!("  MySQL: {}", ident.to_sql(Dialect::MySql));
    println!("  ANSI:  {}", ident.to_sql(Dialect::Ansi));

    // ============================================
    // Predicates
    // ============================================
    println!("\n=== Predicates ===\n");

    let conds = vec![
        is("type", "admin")?,
        is("type", vec!["user", "admin"])?,
        is("deleted_at", Value::Null)?,
        is("id", vec![Value::from(1), Value::from(2), Value::Null])?,
        is_not("type", vec!["banned"])?,
        is_not("id", Vec::<Value>::new())?,
    ];
    for cond in &conds {
        println!("  {}", cond.to_sql(Dialect::MySql)?);
    }

    // ============================================
    // Composing a full statement
    // ============================================
    println!("\n=== Composed query ===\n");

    let table = Ident::parse("app.user")?.to_sql(Dialect::Ansi);
    let active = is("active", true)?.to_sql(Dialect::Ansi)?;
    let role = is("role", vec!["editor", "admin"])?.to_sql(Dialect::Ansi)?;
    println!("  SELECT * FROM {table} WHERE {active} AND {role}");

    Ok(())
}
