//! Schema migration and seed loader tests against in-memory SQLite pools.

use onepartners_db::models::project::{CreateProject, ProjectOrder};
use onepartners_db::repositories::ProjectRepo;
use onepartners_db::{schema, seed, DbPool};
use sqlx::SqlitePool;

fn sample_project(title: &str) -> CreateProject {
    CreateProject {
        title: title.to_string(),
        category: "업무".to_string(),
        location: None,
        year: None,
        description: None,
        system: None,
        client: None,
        image_url: None,
    }
}

async fn column_names(pool: &DbPool, table: &str) -> Vec<String> {
    let rows: Vec<(String,)> =
        sqlx::query_as(&format!("SELECT name FROM pragma_table_info('{table}')"))
            .fetch_all(pool)
            .await
            .unwrap();
    rows.into_iter().map(|(name,)| name).collect()
}

#[sqlx::test]
async fn migration_creates_all_tables(pool: SqlitePool) {
    schema::run_migrations(&pool).await.unwrap();

    for table in ["projects", "posts", "contacts"] {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} should exist: {e}"));
        assert_eq!(count, 0);
    }
}

#[sqlx::test]
async fn migration_is_idempotent(pool: SqlitePool) {
    schema::run_migrations(&pool).await.unwrap();
    let first = column_names(&pool, "projects").await;

    schema::run_migrations(&pool).await.unwrap();
    let second = column_names(&pool, "projects").await;

    assert_eq!(first, second, "second run must not change the schema");
}

#[sqlx::test]
async fn migration_adds_columns_to_legacy_tables(pool: SqlitePool) {
    // A projects table from before sortOrder existed, and a posts table from
    // before file attachments existed, both with data already in them.
    sqlx::query(
        "CREATE TABLE projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            category TEXT NOT NULL,
            location TEXT,
            year TEXT,
            description TEXT,
            system TEXT,
            client TEXT,
            imageUrl TEXT,
            createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TABLE posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            category TEXT NOT NULL,
            author TEXT,
            createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("INSERT INTO projects (title, category) VALUES ('기존 프로젝트', '업무')")
        .execute(&pool)
        .await
        .unwrap();

    schema::run_migrations(&pool).await.unwrap();

    assert!(column_names(&pool, "projects")
        .await
        .contains(&"sortOrder".to_string()));
    let post_columns = column_names(&pool, "posts").await;
    assert!(post_columns.contains(&"fileUrl".to_string()));
    assert!(post_columns.contains(&"fileName".to_string()));

    // Existing rows survive and pick up the sortOrder default.
    let projects = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "기존 프로젝트");
    assert_eq!(projects[0].sort_order, 0);
}

#[sqlx::test]
async fn seed_runs_once(pool: SqlitePool) {
    schema::run_migrations(&pool).await.unwrap();

    seed::seed_if_empty(&pool).await.unwrap();
    let after_first = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(after_first.len(), 2);

    let (post_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(post_count, 2);

    // A restart must not duplicate the seed rows.
    seed::seed_if_empty(&pool).await.unwrap();
    assert_eq!(ProjectRepo::list(&pool).await.unwrap().len(), 2);
}

#[sqlx::test]
async fn seed_skips_non_empty_collections(pool: SqlitePool) {
    schema::run_migrations(&pool).await.unwrap();
    ProjectRepo::create(&pool, &sample_project("수동 등록"))
        .await
        .unwrap();

    seed::seed_if_empty(&pool).await.unwrap();

    // Projects untouched, posts (empty) still seeded.
    assert_eq!(ProjectRepo::list(&pool).await.unwrap().len(), 1);
    let (post_count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM posts")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(post_count, 2);
}

#[sqlx::test]
async fn reorder_rolls_back_on_unknown_id(pool: SqlitePool) {
    schema::run_migrations(&pool).await.unwrap();
    let a = ProjectRepo::create(&pool, &sample_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &sample_project("B")).await.unwrap();

    let applied = ProjectRepo::reorder(
        &pool,
        &[
            ProjectOrder { id: a, sort_order: 5 },
            ProjectOrder { id: 999_999, sort_order: 1 },
            ProjectOrder { id: b, sort_order: 2 },
        ],
    )
    .await
    .unwrap();
    assert!(!applied);

    // No pair may be visible, including the one before the invalid id.
    let projects = ProjectRepo::list(&pool).await.unwrap();
    assert!(projects.iter().all(|p| p.sort_order == 0));
}

#[sqlx::test]
async fn reorder_applies_all_pairs(pool: SqlitePool) {
    schema::run_migrations(&pool).await.unwrap();
    let a = ProjectRepo::create(&pool, &sample_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &sample_project("B")).await.unwrap();

    let applied = ProjectRepo::reorder(
        &pool,
        &[
            ProjectOrder { id: a, sort_order: 2 },
            ProjectOrder { id: b, sort_order: 1 },
        ],
    )
    .await
    .unwrap();
    assert!(applied);

    let projects = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(projects[0].id, b);
    assert_eq!(projects[1].id, a);
}
