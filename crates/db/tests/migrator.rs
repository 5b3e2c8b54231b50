use std::str::FromStr;

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use temp_dir::TempDir;

async fn setup(dir: &TempDir) -> anyhow::Result<SqlitePool> {
    let path = dir.child("db.sqlite3");
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mysite_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[tokio::test]
async fn test_migrator_creates_tables() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('question', 'choice', 'admin_user') ORDER BY name",
    )
    .fetch_all(&pool)
    .await?;

    let names = tables.into_iter().map(|t| t.0).collect::<Vec<_>>();
    assert_eq!(names, vec!["admin_user", "choice", "question"]);

    Ok(())
}

#[tokio::test]
async fn test_choice_is_deleted_with_question() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    sqlx::query("INSERT INTO question (question_text, pub_date) VALUES ('What''s up?', 0)")
        .execute(&pool)
        .await?;
    sqlx::query("INSERT INTO choice (question_id, choice_text) VALUES (1, 'Not much'), (1, 'The sky')")
        .execute(&pool)
        .await?;

    let (votes,): (i64,) = sqlx::query_as("SELECT votes FROM choice WHERE id = 1")
        .fetch_one(&pool)
        .await?;
    assert_eq!(votes, 0);

    sqlx::query("DELETE FROM question WHERE id = 1")
        .execute(&pool)
        .await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM choice")
        .fetch_one(&pool)
        .await?;
    assert_eq!(count, 0);

    Ok(())
}

#[tokio::test]
async fn test_choice_requires_live_question() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = setup(&dir).await?;

    let result = sqlx::query("INSERT INTO choice (question_id, choice_text) VALUES (42, 'Orphan')")
        .execute(&pool)
        .await;
    assert!(result.is_err());

    Ok(())
}
