use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use mysite_user::LoginInput;
use serde::Deserialize;

use crate::{
    auth::{LOGIN_PATH, build_cookie, removal_cookie},
    routes::AppState,
    template::Template,
};

#[derive(askama::Template)]
#[template(path = "admin/login.html")]
pub struct LoginTemplate {
    pub error_message: Option<String>,
    pub username: Option<String>,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(LoginTemplate {
        error_message: None,
        username: None,
    })
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub username: String,
    pub password: String,
}

pub async fn action(
    template: Template,
    jar: CookieJar,
    State(app): State<AppState>,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let id = match app
        .user_command
        .login(LoginInput {
            username: input.username.to_owned(),
            password: input.password,
        })
        .await
    {
        Ok(id) => id,
        Err(mysite_shared::Error::User(message)) => {
            return template.render(LoginTemplate {
                username: Some(input.username),
                error_message: Some(message),
            });
        }
        Err(err) => {
            tracing::error!(username = input.username, err = %err, "Failed to log in");

            return template.server_error();
        }
    };

    let cookie = match build_cookie(&app.config.jwt, id.to_owned()) {
        Ok(cookie) => cookie,
        Err(err) => {
            tracing::error!(user = id, err = %err, "Failed to build auth cookie");

            return template.server_error();
        }
    };

    tracing::info!(user = id, "admin logged in");

    (jar.add(cookie), Redirect::to("/admin/")).into_response()
}

pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(removal_cookie()), Redirect::to(LOGIN_PATH))
}
