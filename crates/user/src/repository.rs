use mysite_db::table::AdminUser;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, FromRow)]
pub struct AdminUserRow {
    pub id: String,
    pub username: String,
    pub password: String,
    pub created_at: i64,
}

pub(crate) enum FindType {
    Id(String),
    Username(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> mysite_shared::Result<Option<AdminUserRow>> {
    let mut statement = Query::select()
        .columns([
            AdminUser::Id,
            AdminUser::Username,
            AdminUser::Password,
            AdminUser::CreatedAt,
        ])
        .from(AdminUser::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(AdminUser::Id).eq(id)),
        FindType::Username(username) => {
            statement.and_where(Expr::col(AdminUser::Username).eq(username))
        }
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, AdminUserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}
