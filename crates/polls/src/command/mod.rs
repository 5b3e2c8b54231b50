use mysite_shared::State;

mod add_choice;
mod create_question;
mod delete_question;
mod update_question;
mod vote;

pub use add_choice::ChoiceInput;
pub use create_question::QuestionInput;
pub use vote::{NO_CHOICE_MESSAGE, VoteInput};

#[derive(Clone)]
pub struct Command(pub State);

impl Command {
    pub(crate) async fn question_exists(&self, id: i64) -> mysite_shared::Result<bool> {
        Ok(crate::Query(self.0.write_db.clone()).find(id).await?.is_some())
    }
}
