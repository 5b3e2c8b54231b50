use mysite_db::table::Question;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

#[derive(Validate)]
pub struct QuestionInput {
    #[validate(length(min = 1, max = 200))]
    pub question_text: String,
    pub pub_date: i64,
}

impl super::Command {
    pub async fn create_question(&self, input: QuestionInput) -> mysite_shared::Result<i64> {
        input.validate()?;

        let statement = Query::insert()
            .into_table(Question::Table)
            .columns([Question::QuestionText, Question::PubDate])
            .values_panic([input.question_text.into(), input.pub_date.into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(question = id, "question created");

        Ok(id)
    }
}
