use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Question {
    Table,
    Id,
    QuestionText,
    PubDate,
}

#[derive(Iden, Clone)]
pub enum Choice {
    Table,
    Id,
    QuestionId,
    ChoiceText,
    Votes,
}

#[derive(Iden, Clone)]
pub enum AdminUser {
    Table,
    Id,
    Username,
    Password,
    CreatedAt,
}
