use mysite_polls::{ChoiceInput, QuestionInput};
use mysite_shared::State;
use validator::Validate;

pub async fn add_question(
    config: crate::config::Config,
    text: String,
    choices: Vec<String>,
    pub_date: Option<String>,
) -> anyhow::Result<()> {
    let pub_date = match pub_date {
        Some(value) => mysite_polls::parse_pub_date(&value)?,
        None => mysite_shared::now(),
    };

    // Reject the whole poll before anything is written
    let choices = choices
        .into_iter()
        .map(|choice_text| {
            let input = ChoiceInput { choice_text };
            input.validate().map(|_| input)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pool = crate::db::create_pool(&config.database.url, 1).await?;
    let command = mysite_polls::Command(State::single(pool.clone()));

    let id = command
        .create_question(QuestionInput {
            question_text: text,
            pub_date,
        })
        .await?;

    for choice in choices {
        command.add_choice(id, choice).await?;
    }

    tracing::info!(question = id, "question added");

    pool.close().await;

    Ok(())
}
