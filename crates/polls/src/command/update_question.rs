use mysite_db::table::Question;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use super::QuestionInput;

impl super::Command {
    pub async fn update_question(&self, id: i64, input: QuestionInput) -> mysite_shared::Result<()> {
        input.validate()?;

        let statement = Query::update()
            .table(Question::Table)
            .values([
                (Question::QuestionText, input.question_text.into()),
                (Question::PubDate, input.pub_date.into()),
            ])
            .and_where(Expr::col(Question::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.0.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(mysite_shared::Error::NotFound);
        }

        tracing::info!(question = id, "question updated");

        Ok(())
    }
}
