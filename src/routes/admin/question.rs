use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use mysite_polls::{Choice, Question, QuestionInput, format_pub_date, parse_pub_date};
use serde::Deserialize;

use crate::{
    auth::AuthAdmin, routes::AppState, routes::parse_id, template::Template, try_page_response,
};

const CHANGE_LIST_PATH: &str = "/admin/polls/question/";
const QUESTION_TEXT_MESSAGE: &str = "Question text must be between 1 and 200 characters.";

#[derive(askama::Template)]
#[template(path = "admin/question_list.html")]
pub struct ListTemplate {
    pub username: String,
    pub questions: Vec<Question>,
}

#[derive(askama::Template)]
#[template(path = "admin/question_form.html")]
pub struct FormTemplate {
    pub username: String,
    /// None when adding a question
    pub id: Option<i64>,
    pub question_text: String,
    pub pub_date: String,
    pub error_message: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "admin/question_delete.html")]
pub struct DeleteTemplate {
    pub username: String,
    pub question: Question,
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct QuestionForm {
    pub question_text: String,
    pub pub_date: String,
}

pub async fn list(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let questions = try_page_response!(app.poll_query.list(), template);

    template.render(ListTemplate {
        username: user.username,
        questions,
    })
}

pub async fn add_page(template: Template, AuthAdmin(user): AuthAdmin) -> impl IntoResponse {
    template.render(FormTemplate {
        username: user.username,
        id: None,
        question_text: String::new(),
        pub_date: format_pub_date(mysite_shared::now()),
        error_message: None,
    })
}

pub async fn add_action(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    State(app): State<AppState>,
    Form(input): Form<QuestionForm>,
) -> impl IntoResponse {
    save(template, user.username, app, None, input).await
}

pub async fn change_page(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let question = try_page_response!(opt: app.poll_query.find(id), template);

    template.render(FormTemplate {
        username: user.username,
        id: Some(question.id),
        pub_date: question.pub_date_input(),
        question_text: question.question_text,
        error_message: None,
    })
}

pub async fn change_action(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    Path(id): Path<String>,
    State(app): State<AppState>,
    Form(input): Form<QuestionForm>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    save(template, user.username, app, Some(id), input).await
}

async fn save(
    template: Template,
    username: String,
    app: AppState,
    id: Option<i64>,
    input: QuestionForm,
) -> Response {
    let result = match parse_pub_date(&input.pub_date) {
        Ok(pub_date) => {
            let question = QuestionInput {
                question_text: input.question_text.trim().to_owned(),
                pub_date,
            };

            match id {
                Some(id) => app.poll_command.update_question(id, question).await,
                None => app.poll_command.create_question(question).await.map(|_| ()),
            }
        }
        Err(err) => Err(err),
    };

    let error_message = match result {
        Ok(_) => return Redirect::to(CHANGE_LIST_PATH).into_response(),
        Err(mysite_shared::Error::NotFound) => return template.not_found(),
        Err(mysite_shared::Error::Validate(_)) => QUESTION_TEXT_MESSAGE.to_owned(),
        Err(mysite_shared::Error::User(message)) => message,
        Err(err) => {
            tracing::error!(question = ?id, err = %err, "Failed to save question");

            return template.server_error();
        }
    };

    template.render(FormTemplate {
        username,
        id,
        question_text: input.question_text,
        pub_date: input.pub_date,
        error_message: Some(error_message),
    })
}

pub async fn delete_page(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    let question = try_page_response!(opt: app.poll_query.find(id), template);
    let choices = try_page_response!(app.poll_query.choices(id), template);

    template.render(DeleteTemplate {
        username: user.username,
        question,
        choices,
    })
}

pub async fn delete_action(
    template: Template,
    AuthAdmin(_user): AuthAdmin,
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let Some(id) = parse_id(&id) else {
        return template.not_found();
    };

    match app.poll_command.delete_question(id).await {
        Ok(_) => Redirect::to(CHANGE_LIST_PATH).into_response(),
        Err(mysite_shared::Error::NotFound) => template.not_found(),
        Err(err) => {
            tracing::error!(question = id, err = %err, "Failed to delete question");

            template.server_error()
        }
    }
}
