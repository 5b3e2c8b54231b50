mod choice;
mod question;

pub use choice::*;
pub use question::*;

/// Number of questions shown on the poll index.
pub const LATEST_LIMIT: u64 = 5;

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);
