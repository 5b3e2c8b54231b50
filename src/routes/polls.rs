use axum::{
    Form,
    extract::{Path, State, rejection::FormRejection},
    response::{IntoResponse, Redirect},
};
use mysite_polls::{Choice, LATEST_LIMIT, Question, VoteInput};
use serde::Deserialize;

use crate::{routes::AppState, template::Template, try_page_response};

#[derive(askama::Template)]
#[template(path = "polls/index.html")]
pub struct IndexTemplate {
    pub latest_question_list: Vec<Question>,
}

#[derive(askama::Template)]
#[template(path = "polls/detail.html")]
pub struct DetailTemplate {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub error_message: Option<String>,
}

pub async fn index(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let latest_question_list = try_page_response!(app.poll_query.latest(LATEST_LIMIT), template);

    template.render(IndexTemplate {
        latest_question_list,
    })
}

pub async fn detail(
    template: Template,
    Path(id): Path<String>,
    State(app): State<AppState>,
) -> impl IntoResponse {
    let Some(id) = super::parse_id(&id) else {
        return template.not_found();
    };

    let question = try_page_response!(opt: app.poll_query.find(id), template);
    let choices = try_page_response!(app.poll_query.choices(id), template);

    template.render(DetailTemplate {
        question,
        choices,
        error_message: None,
    })
}

/// Stub page, vote counts are not displayed yet.
pub async fn results(template: Template, Path(id): Path<String>) -> impl IntoResponse {
    let Some(id) = super::parse_id(&id) else {
        return template.not_found();
    };

    format!("You are looking at the results of question {id}.").into_response()
}

#[derive(Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

pub async fn vote(
    template: Template,
    Path(id): Path<String>,
    State(app): State<AppState>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> impl IntoResponse {
    let Some(id) = super::parse_id(&id) else {
        return template.not_found();
    };

    let question = try_page_response!(opt: app.poll_query.find(id), template);

    // A body that is not a single-valued form counts as no selection
    let choice = form.ok().and_then(|Form(input)| input.choice);

    match app
        .poll_command
        .vote(VoteInput {
            question_id: id,
            choice,
        })
        .await
    {
        Ok(_) => Redirect::to(&format!("/{id}/results/")).into_response(),
        Err(mysite_shared::Error::User(message)) => {
            let choices = try_page_response!(app.poll_query.choices(id), template);

            template.render(DetailTemplate {
                question,
                choices,
                error_message: Some(message),
            })
        }
        Err(err) => {
            tracing::error!(question = id, err = %err, "Failed to record vote");

            template.server_error()
        }
    }
}
