mod migrate;
mod poll;
mod server;
mod user;

pub use migrate::{migrate, reset, run_migrations};
pub use poll::add_question;
pub use server::serve;
pub use user::create_admin;
