use mysite_shared::State;
use mysite_user::CreateAdminInput;

pub async fn create_admin(
    config: crate::config::Config,
    username: String,
    password: String,
) -> anyhow::Result<()> {
    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let command = mysite_user::Command(State::single(pool.clone()));

    let id = command
        .create_admin(CreateAdminInput {
            username: username.to_owned(),
            password,
        })
        .await?;

    tracing::info!(user = id, "{username} now have admin access");

    pool.close().await;

    Ok(())
}
