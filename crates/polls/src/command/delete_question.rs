use mysite_db::table::Question;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Choices of the question go with it through the foreign key cascade.
    pub async fn delete_question(&self, id: i64) -> mysite_shared::Result<()> {
        let statement = Query::delete()
            .from_table(Question::Table)
            .and_where(Expr::col(Question::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.0.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(mysite_shared::Error::NotFound);
        }

        tracing::info!(question = id, "question deleted");

        Ok(())
    }
}
