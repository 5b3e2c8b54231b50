use std::fmt::Display;

use serde::Deserialize;
use sqlx::prelude::FromRow;
use time::{
    Duration, OffsetDateTime, PrimitiveDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// How far back a question still counts as recently published.
pub const RECENT_WINDOW: Duration = Duration::DAY;

const INPUT_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]");
const INPUT_FORMAT_SECONDS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const DISPLAY_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:long] [day padding:none], [year], [hour]:[minute]");

#[derive(Debug, Default, Clone, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question_text: String,
    /// Unix timestamp, UTC.
    pub pub_date: i64,
}

impl Question {
    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(mysite_shared::now())
    }

    /// A question dated in the future is not recent.
    pub fn was_published_recently_at(&self, now: i64) -> bool {
        let day_ago = now - RECENT_WINDOW.whole_seconds();

        day_ago <= self.pub_date && self.pub_date <= now
    }

    pub fn published_at(&self) -> String {
        let Ok(date) = OffsetDateTime::from_unix_timestamp(self.pub_date) else {
            return "".to_owned();
        };

        date.format(DISPLAY_FORMAT).unwrap_or_default()
    }

    /// Value for a `datetime-local` input.
    pub fn pub_date_input(&self) -> String {
        format_pub_date(self.pub_date)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.question_text)
    }
}

#[derive(Debug, Default, Clone, Deserialize, FromRow)]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.choice_text)
    }
}

/// Parses `YYYY-MM-DDTHH:MM[:SS]` as a UTC unix timestamp.
pub fn parse_pub_date(value: &str) -> mysite_shared::Result<i64> {
    let value = value.trim();
    let parsed = PrimitiveDateTime::parse(value, INPUT_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(value, INPUT_FORMAT_SECONDS));

    match parsed {
        Ok(date) => Ok(date.assume_utc().unix_timestamp()),
        Err(_) => mysite_shared::user!("Enter a valid date/time."),
    }
}

pub fn format_pub_date(timestamp: i64) -> String {
    let Ok(date) = OffsetDateTime::from_unix_timestamp(timestamp) else {
        return "".to_owned();
    };

    date.format(INPUT_FORMAT).unwrap_or_default()
}
