mod admin_user;
mod choice;
mod question;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mysite",
    "m0001",
    vec_box![],
    vec_box![
        question::CreateTable,
        question::CreateIdx1,
        choice::CreateTable,
        choice::CreateIdx1,
        admin_user::CreateTable,
        admin_user::CreateUk1,
    ]
);
