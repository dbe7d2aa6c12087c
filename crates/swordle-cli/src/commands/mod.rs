//! Command handlers

pub mod config;
pub mod read;
pub mod stats;
pub mod today;

use swordle_core::{Config, KeyValueStore, ReadingDay, Tracker};

use crate::output::Output;
use crate::scripture::fetch_scripture;

/// Per-invocation settings shared by the tracker commands
pub struct Session {
    pub config: Config,
    pub day: ReadingDay,
    /// Skip the scripture lookup and use the last known chapter
    pub offline: bool,
}

/// Today's chapter as far as we can tell
#[derive(Debug, Default)]
pub struct DailyChapter {
    pub book_and_chapter: Option<String>,
    pub text: Option<String>,
}

/// Look up today's scripture and fold it into the persisted chapter
pub async fn daily_chapter<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    session: &Session,
    output: &Output,
) -> DailyChapter {
    let daily = if session.offline {
        None
    } else {
        fetch_scripture(&session.config, &session.day).await
    };

    if daily.is_none() && !session.offline {
        output.message("Could not fetch today's scripture; using the last known chapter.");
    }

    let scripture = daily.as_ref().map(|d| d.scripture.as_str());
    let book_and_chapter = tracker.refresh_book_and_chapter(scripture);

    DailyChapter {
        book_and_chapter,
        text: daily.map(|d| d.text).filter(|t| !t.trim().is_empty()),
    }
}
