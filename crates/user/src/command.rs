use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use mysite_db::table::AdminUser;
use mysite_shared::State;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use ulid::Ulid;
use validator::Validate;

use crate::{INVALID_LOGIN_MESSAGE, repository};

const DUPLICATE_USERNAME_MESSAGE: &str = "A user with that username already exists.";

#[derive(Validate)]
pub struct CreateAdminInput {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

#[derive(Validate)]
pub struct LoginInput {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Clone)]
pub struct Command(pub State);

impl Command {
    pub async fn create_admin(&self, input: CreateAdminInput) -> mysite_shared::Result<String> {
        input.validate()?;

        if repository::find(
            &self.0.write_db,
            repository::FindType::Username(input.username.to_owned()),
        )
        .await?
        .is_some()
        {
            mysite_shared::user!("{DUPLICATE_USERNAME_MESSAGE}");
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let id = Ulid::new().to_string();
        let statement = Query::insert()
            .into_table(AdminUser::Table)
            .columns([
                AdminUser::Id,
                AdminUser::Username,
                AdminUser::Password,
                AdminUser::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.username.to_owned().into(),
                password_hash.into(),
                mysite_shared::now().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        match sqlx::query_with(&sql, values)
            .execute(&self.0.write_db)
            .await
        {
            Ok(_) => {}
            // Usernames are unique regardless of case
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                mysite_shared::user!("{DUPLICATE_USERNAME_MESSAGE}");
            }
            Err(err) => return Err(err.into()),
        }

        tracing::info!(user = id, username = input.username, "admin user created");

        Ok(id)
    }

    /// Returns the id of the admin account on success.
    pub async fn login(&self, input: LoginInput) -> mysite_shared::Result<String> {
        if input.validate().is_err() {
            mysite_shared::user!("{INVALID_LOGIN_MESSAGE}");
        }

        let Some(user) = repository::find(
            &self.0.read_db,
            repository::FindType::Username(input.username),
        )
        .await?
        else {
            mysite_shared::user!("{INVALID_LOGIN_MESSAGE}");
        };

        let parsed_hash = PasswordHash::new(&user.password)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            mysite_shared::user!("{INVALID_LOGIN_MESSAGE}");
        }

        Ok(user.id)
    }
}
