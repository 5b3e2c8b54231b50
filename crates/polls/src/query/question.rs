use mysite_db::table::Question as QuestionTable;
use sea_query::{Expr, ExprTrait, Order, Query as SqlQuery, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::Question;

fn select_statement() -> SelectStatement {
    SqlQuery::select()
        .columns([
            QuestionTable::Id,
            QuestionTable::QuestionText,
            QuestionTable::PubDate,
        ])
        .from(QuestionTable::Table)
        .to_owned()
}

impl super::Query {
    /// Most recently published questions first.
    pub async fn latest(&self, limit: u64) -> mysite_shared::Result<Vec<Question>> {
        let statement = select_statement()
            .order_by(QuestionTable::PubDate, Order::Desc)
            .order_by(QuestionTable::Id, Order::Desc)
            .limit(limit)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Question, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: i64) -> mysite_shared::Result<Option<Question>> {
        let statement = select_statement()
            .and_where(Expr::col(QuestionTable::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Question, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn list(&self) -> mysite_shared::Result<Vec<Question>> {
        let statement = select_statement()
            .order_by(QuestionTable::PubDate, Order::Desc)
            .order_by(QuestionTable::Id, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Question, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
