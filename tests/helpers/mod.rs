//! Test helpers driving the application router over a temporary database

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use mysite::{
    AppState,
    config::{Config, DatabaseConfig, JwtConfig, ObservabilityConfig, ServerConfig},
};
use mysite_shared::State;
use temp_dir::TempDir;
use tower::ServiceExt;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "my_passwd";

pub struct TestApp {
    pub state: AppState,
    /// Removed with the database file on drop
    _dir: TempDir,
}

pub fn test_config(database_url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            issuer: "mysite".to_owned(),
            audience: "mysite-admin".to_owned(),
            expiration_days: 7,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
    let pool = mysite::create_pool(&url, 1).await?;
    mysite::cli::run_migrations(&pool).await?;

    let state = State::single(pool.clone());

    Ok(TestApp {
        state: AppState {
            config: test_config(url),
            poll_command: mysite_polls::Command(state.clone()),
            poll_query: mysite_polls::Query(pool.clone()),
            user_command: mysite_user::Command(state),
            user_query: mysite_user::Query(pool.clone()),
            pool,
        },
        _dir: dir,
    })
}

impl TestApp {
    pub fn router(&self) -> Router {
        mysite::router(self.state.clone())
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> anyhow::Result<Response<Body>> {
        let mut request = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        Ok(self.router().oneshot(request.body(Body::empty())?).await?)
    }

    pub async fn post<T: serde::Serialize>(
        &self,
        uri: &str,
        form: &T,
        cookie: Option<&str>,
    ) -> anyhow::Result<Response<Body>> {
        let mut request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            request = request.header(header::COOKIE, cookie);
        }

        let body = serde_urlencoded::to_string(form)?;

        Ok(self.router().oneshot(request.body(Body::from(body))?).await?)
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: Option<&str>,
        body: &str,
    ) -> anyhow::Result<Response<Body>> {
        let mut request = Request::builder().method("POST").uri(uri);
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }

        Ok(self
            .router()
            .oneshot(request.body(Body::from(body.to_owned()))?)
            .await?)
    }

    pub async fn create_question(&self, text: &str, pub_date: i64) -> anyhow::Result<i64> {
        Ok(self
            .state
            .poll_command
            .create_question(mysite_polls::QuestionInput {
                question_text: text.to_owned(),
                pub_date,
            })
            .await?)
    }

    pub async fn add_choice(&self, question_id: i64, text: &str) -> anyhow::Result<i64> {
        Ok(self
            .state
            .poll_command
            .add_choice(
                question_id,
                mysite_polls::ChoiceInput {
                    choice_text: text.to_owned(),
                },
            )
            .await?)
    }

    pub async fn votes(&self, choice_id: i64) -> anyhow::Result<i64> {
        let (votes,): (i64,) = sqlx::query_as("SELECT votes FROM choice WHERE id = ?")
            .bind(choice_id)
            .fetch_one(&self.state.pool)
            .await?;

        Ok(votes)
    }

    /// Creates the admin account and returns a `Cookie` header value for it.
    pub async fn login(&self) -> anyhow::Result<String> {
        self.state
            .user_command
            .create_admin(mysite_user::CreateAdminInput {
                username: ADMIN_USERNAME.to_owned(),
                password: ADMIN_PASSWORD.to_owned(),
            })
            .await?;

        let response = self
            .post(
                "/admin/login/",
                &[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)],
                None,
            )
            .await?;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .ok_or_else(|| anyhow::anyhow!("missing set-cookie"))?
            .to_str()?;

        let cookie = set_cookie
            .split(';')
            .next()
            .ok_or_else(|| anyhow::anyhow!("empty set-cookie"))?;

        Ok(cookie.to_owned())
    }
}

pub async fn body_string(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok(String::from_utf8(bytes.to_vec())?)
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}
