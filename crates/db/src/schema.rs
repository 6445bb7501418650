//! Startup schema migration.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS`, and columns that were
//! introduced after a deployment may already hold data are added by inspecting
//! the live column set. The whole routine is idempotent: running it against an
//! already-current database changes nothing.
//!
//! Column names are camelCase to stay compatible with database files written
//! by earlier deployments of the site.

use crate::DbPool;

const CREATE_PROJECTS: &str = "\
    CREATE TABLE IF NOT EXISTS projects (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        category TEXT NOT NULL,
        location TEXT,
        year TEXT,
        description TEXT,
        system TEXT,
        client TEXT,
        imageUrl TEXT,
        sortOrder INTEGER DEFAULT 0,
        createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

const CREATE_POSTS: &str = "\
    CREATE TABLE IF NOT EXISTS posts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        category TEXT NOT NULL,
        author TEXT,
        fileUrl TEXT,
        fileName TEXT,
        createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

const CREATE_CONTACTS: &str = "\
    CREATE TABLE IF NOT EXISTS contacts (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        company TEXT,
        email TEXT NOT NULL,
        message TEXT NOT NULL,
        createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
    )";

/// Create missing tables and add columns introduced after the tables may
/// already have existed. Must run to completion before any request is served;
/// callers treat an error as fatal.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_PROJECTS).execute(pool).await?;
    sqlx::query(CREATE_POSTS).execute(pool).await?;
    sqlx::query(CREATE_CONTACTS).execute(pool).await?;

    // Additive migrations for tables created by older versions of the schema.
    ensure_column(pool, "projects", "sortOrder", "INTEGER DEFAULT 0").await?;
    ensure_column(pool, "posts", "fileUrl", "TEXT").await?;
    ensure_column(pool, "posts", "fileName", "TEXT").await?;

    tracing::debug!("Schema migration complete");
    Ok(())
}

/// Add `column` to `table` if the live schema does not have it yet.
///
/// Columns are only ever added, never dropped or renamed, so existing data is
/// untouched.
async fn ensure_column(
    pool: &DbPool,
    table: &str,
    column: &str,
    declaration: &str,
) -> Result<(), sqlx::Error> {
    let names: Vec<(String,)> =
        sqlx::query_as(&format!("SELECT name FROM pragma_table_info('{table}')"))
            .fetch_all(pool)
            .await?;

    if names.iter().any(|(name,)| name == column) {
        return Ok(());
    }

    sqlx::query(&format!(
        "ALTER TABLE {table} ADD COLUMN {column} {declaration}"
    ))
    .execute(pool)
    .await?;
    tracing::info!(table, column, "Added missing column");
    Ok(())
}
