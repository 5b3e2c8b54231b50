use std::{path::PathBuf, str::FromStr};

use mysite_polls::{ChoiceInput, Command, QuestionInput};
use mysite_shared::State;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    mysite_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

#[allow(dead_code)]
pub async fn create_question(
    cmd: &Command,
    text: impl Into<String>,
    pub_date: i64,
) -> anyhow::Result<i64> {
    Ok(cmd
        .create_question(QuestionInput {
            question_text: text.into(),
            pub_date,
        })
        .await?)
}

#[allow(dead_code)]
pub async fn create_choices(
    cmd: &Command,
    question_id: i64,
    texts: impl IntoIterator<Item = impl Into<String>>,
) -> anyhow::Result<Vec<i64>> {
    let mut ids = vec![];
    for text in texts.into_iter() {
        let id = cmd
            .add_choice(
                question_id,
                ChoiceInput {
                    choice_text: text.into(),
                },
            )
            .await?;
        ids.push(id);
    }

    Ok(ids)
}

#[allow(dead_code)]
pub async fn set_votes(state: &State, choice_id: i64, votes: i64) -> anyhow::Result<()> {
    sqlx::query("UPDATE choice SET votes = ? WHERE id = ?")
        .bind(votes)
        .bind(choice_id)
        .execute(&state.write_db)
        .await?;

    Ok(())
}
