use mysite_db::table::Choice;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

pub const NO_CHOICE_MESSAGE: &str = "You didn't select a choice.";

pub struct VoteInput {
    pub question_id: i64,
    /// Raw `choice` form value, absent when nothing was selected.
    pub choice: Option<String>,
}

impl super::Command {
    /// Adds one vote to a choice of the question.
    ///
    /// A missing, malformed or foreign choice id is a user error and leaves
    /// every counter untouched. The increment happens in a single statement so
    /// concurrent votes cannot overwrite each other.
    pub async fn vote(&self, input: VoteInput) -> mysite_shared::Result<()> {
        let Some(choice_id) = input
            .choice
            .as_deref()
            .and_then(|c| c.trim().parse::<i64>().ok())
        else {
            mysite_shared::user!("{NO_CHOICE_MESSAGE}");
        };

        let statement = Query::update()
            .table(Choice::Table)
            .value(Choice::Votes, Expr::col(Choice::Votes).add(1))
            .and_where(Expr::col(Choice::Id).eq(choice_id))
            .and_where(Expr::col(Choice::QuestionId).eq(input.question_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values)
            .execute(&self.0.write_db)
            .await?;

        if result.rows_affected() == 0 {
            mysite_shared::user!("{NO_CHOICE_MESSAGE}");
        }

        tracing::debug!(question = input.question_id, choice = choice_id, "vote recorded");

        Ok(())
    }
}
