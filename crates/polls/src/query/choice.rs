use mysite_db::table::Choice as ChoiceTable;
use sea_query::{Expr, ExprTrait, Order, Query as SqlQuery, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Choice;

impl super::Query {
    pub async fn choices(&self, question_id: i64) -> mysite_shared::Result<Vec<Choice>> {
        let statement = SqlQuery::select()
            .columns([
                ChoiceTable::Id,
                ChoiceTable::QuestionId,
                ChoiceTable::ChoiceText,
                ChoiceTable::Votes,
            ])
            .from(ChoiceTable::Table)
            .and_where(Expr::col(ChoiceTable::QuestionId).eq(question_id))
            .order_by(ChoiceTable::Id, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Choice, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
