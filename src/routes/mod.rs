use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::template::Template;

mod admin;
mod health;
mod polls;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub poll_command: mysite_polls::Command,
    pub poll_query: mysite_polls::Query,
    pub user_command: mysite_user::Command,
    pub user_query: mysite_user::Query,
    pub pool: SqlitePool,
}

/// Path ids are integers, anything else is an unknown page.
pub(crate) fn parse_id(id: &str) -> Option<i64> {
    id.parse::<i64>().ok().filter(|id| *id > 0)
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(polls::index))
        .route("/{id}/", get(polls::detail))
        .route("/{id}/results/", get(polls::results))
        .route("/{id}/vote/", post(polls::vote))
        .route("/admin/", get(admin::index))
        .route(
            "/admin/login/",
            get(admin::login::page).post(admin::login::action),
        )
        .route("/admin/logout/", post(admin::login::logout))
        .route("/admin/polls/question/", get(admin::question::list))
        .route(
            "/admin/polls/question/add/",
            get(admin::question::add_page).post(admin::question::add_action),
        )
        .route(
            "/admin/polls/question/{id}/change/",
            get(admin::question::change_page).post(admin::question::change_action),
        )
        .route(
            "/admin/polls/question/{id}/delete/",
            get(admin::question::delete_page).post(admin::question::delete_action),
        )
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id(""), None);
    }
}
