//! Session tests against a live database.
//!
//! These run only when DATABASE_URL points at a reachable Postgres;
//! otherwise each test skips.

use slimsql::{Dialect, Session, Value};

async fn try_connect() -> Option<Session<tokio_postgres::Client>> {
    let database_url = std::env::var("DATABASE_URL").ok()?;
    let session = Session::connect(&database_url, Dialect::Ansi)
        .await
        .expect("Failed to connect to DATABASE_URL with NoTls");
    Some(session)
}

#[tokio::test]
async fn exec_returns_rows() {
    let Some(session) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let rows = session
        .exec("SELECT n FROM (VALUES (1), (2)) AS t(n) ORDER BY n", &[])
        .await
        .unwrap();
    assert_eq!(rows.len(), 2);
    let n: i32 = rows[0].get(0);
    assert_eq!(n, 1);
}

#[tokio::test]
async fn execute_reports_affected_rows() {
    let Some(session) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    session
        .execute("CREATE TEMP TABLE exec_counts (n INTEGER)", &[])
        .await
        .unwrap();

    let inserted = session
        .execute("INSERT INTO exec_counts VALUES (1), (2), (3)", &[])
        .await
        .unwrap();
    assert_eq!(inserted, 3);

    let updated = session
        .execute("UPDATE exec_counts SET n = n + 1 WHERE n > 1", &[])
        .await
        .unwrap();
    assert_eq!(updated, 2);
}

#[tokio::test]
async fn transactions_roll_back_and_commit() {
    let Some(session) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    // Temp tables are per-connection; created outside the transactions so
    // the rollback does not drop it.
    session
        .execute("CREATE TEMP TABLE tx_notes (title TEXT)", &[])
        .await
        .unwrap();

    session.begin().await.unwrap();
    session
        .execute("INSERT INTO tx_notes VALUES ('discarded')", &[])
        .await
        .unwrap();
    session.rollback().await.unwrap();

    session.begin().await.unwrap();
    session
        .execute("INSERT INTO tx_notes VALUES ('kept')", &[])
        .await
        .unwrap();
    session.commit().await.unwrap();

    let rows = session
        .exec("SELECT title FROM tx_notes", &[])
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let title: String = rows[0].get(0);
    assert_eq!(title, "kept");
}

#[tokio::test]
async fn prepared_statements_roundtrip() {
    let Some(session) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    let statement = session.prepare("SELECT $1::TEXT").await.unwrap();
    let rows = session
        .exec_prepared(&statement, &[&"hello"])
        .await
        .unwrap();
    let echoed: String = rows[0].get(0);
    assert_eq!(echoed, "hello");

    session
        .execute("CREATE TEMP TABLE prep_notes (title TEXT)", &[])
        .await
        .unwrap();
    let insert = session
        .prepare("INSERT INTO prep_notes VALUES ($1)")
        .await
        .unwrap();
    let count = session.execute_prepared(&insert, &[&"one"]).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn rendered_predicates_work_against_postgres() {
    let Some(session) = try_connect().await else {
        eprintln!("DATABASE_URL not set; skipping");
        return;
    };

    session
        .execute("CREATE TEMP TABLE pred_notes (title TEXT, kind TEXT)", &[])
        .await
        .unwrap();

    for (title, kind) in [("a", Some("list")), ("it's", None), ("c", Some("memo"))] {
        let sql = format!(
            "INSERT INTO pred_notes VALUES ({}, {})",
            session.quote_value(title).unwrap(),
            session.quote_value(kind).unwrap(),
        );
        session.execute(&sql, &[]).await.unwrap();
    }

    let cond = session
        .is("kind", vec![Value::from("list"), Value::Null])
        .unwrap();
    let rows = session
        .exec(
            &format!("SELECT title FROM pred_notes WHERE {cond} ORDER BY title"),
            &[],
        )
        .await
        .unwrap();
    let titles: Vec<String> = rows.iter().map(|r| r.get(0)).collect();
    assert_eq!(titles, ["a", "it's"]);

    let cond = session.is("title", "it's").unwrap();
    let rows = session
        .exec(
            &format!("SELECT kind FROM pred_notes WHERE {cond}"),
            &[],
        )
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    let kind: Option<String> = rows[0].get(0);
    assert_eq!(kind, None);
}
