//! Back-office pages for managing polls

use axum::response::IntoResponse;

use crate::{auth::AuthAdmin, template::Template};

pub mod login;
pub mod question;

/// A model exposed in the back-office.
pub struct RegisteredModel {
    pub app_label: &'static str,
    pub name: &'static str,
    pub url: &'static str,
}

pub const REGISTERED_MODELS: &[RegisteredModel] = &[RegisteredModel {
    app_label: "Polls",
    name: "Questions",
    url: "/admin/polls/question/",
}];

#[derive(askama::Template)]
#[template(path = "admin/index.html")]
pub struct IndexTemplate {
    pub username: String,
    pub models: &'static [RegisteredModel],
}

pub async fn index(template: Template, AuthAdmin(user): AuthAdmin) -> impl IntoResponse {
    template.render(IndexTemplate {
        username: user.username,
        models: REGISTERED_MODELS,
    })
}
