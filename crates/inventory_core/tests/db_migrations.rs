use inventory_core::db::migrations::latest_version;
use inventory_core::db::{open_db, open_db_in_memory, open_location, DbError, DbLocation};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "fruits");
}

#[test]
fn in_memory_databases_are_independent() {
    let first = open_db_in_memory().unwrap();
    first
        .execute("INSERT INTO fruits (name, quantity) VALUES ('Apple', 1);", [])
        .unwrap();

    let second = open_db_in_memory().unwrap();
    assert_eq!(fruit_count(&second), 0);
}

#[test]
fn opening_same_database_twice_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.sqlite3");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO fruits (name, quantity) VALUES ('Apple', 1);", [])
        .unwrap();
    drop(conn_first);

    let conn_second = open_location(&DbLocation::File(path)).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_eq!(fruit_count(&conn_second), 1);
}

#[test]
fn created_at_defaults_to_rfc3339_utc() {
    let conn = open_db_in_memory().unwrap();
    conn.execute("INSERT INTO fruits (name, quantity) VALUES ('Apple', 1);", [])
        .unwrap();

    let created_at: String = conn
        .query_row("SELECT created_at FROM fruits LIMIT 1;", [], |row| row.get(0))
        .unwrap();
    assert!(created_at.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(&created_at).is_ok());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn conflicting_legacy_index_fails_migration_without_bumping_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE legacy (label TEXT);
         CREATE INDEX fruits ON legacy (label);",
    )
    .unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::MigrationFailed { version: 1, .. }));

    let conn = Connection::open(&path).unwrap();
    assert_eq!(schema_version(&conn), 0);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn fruit_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM fruits;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
