use mysite_db::table::Choice;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

#[derive(Validate)]
pub struct ChoiceInput {
    #[validate(length(min = 1, max = 200))]
    pub choice_text: String,
}

impl super::Command {
    pub async fn add_choice(
        &self,
        question_id: i64,
        input: ChoiceInput,
    ) -> mysite_shared::Result<i64> {
        input.validate()?;

        if !self.question_exists(question_id).await? {
            return Err(mysite_shared::Error::NotFound);
        }

        let statement = Query::insert()
            .into_table(Choice::Table)
            .columns([Choice::QuestionId, Choice::ChoiceText])
            .values_panic([question_id.into(), input.choice_text.into()])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let id = sqlx::query_with(&sql, values)
            .execute(&self.0.write_db)
            .await?
            .last_insert_rowid();

        Ok(id)
    }
}
