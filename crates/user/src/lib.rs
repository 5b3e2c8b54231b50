mod command;
mod repository;

pub use command::*;
pub use repository::AdminUserRow;

pub const INVALID_LOGIN_MESSAGE: &str = "Please enter a correct username and password.";

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> mysite_shared::Result<Option<AdminUserRow>> {
        repository::find(&self.0, repository::FindType::Id(id.into())).await
    }

    pub async fn find_by_username(
        &self,
        username: impl Into<String>,
    ) -> mysite_shared::Result<Option<AdminUserRow>> {
        repository::find(&self.0, repository::FindType::Username(username.into())).await
    }
}
