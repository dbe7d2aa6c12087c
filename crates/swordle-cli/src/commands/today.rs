//! Today command handler

use anyhow::Result;

use swordle_core::{chapter_link, KeyValueStore, Tracker};

use super::{daily_chapter, Session};
use crate::output::{Output, TodayView};

/// Show today's chapter, its reader link and whether it was read
pub async fn show<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    session: &Session,
    output: &Output,
) -> Result<()> {
    let daily = daily_chapter(tracker, session, output).await;

    let view = TodayView {
        date: session.day.date_key(),
        link: daily.book_and_chapter.as_deref().and_then(chapter_link),
        book_and_chapter: daily.book_and_chapter,
        status: tracker.status(&session.day),
        text: daily.text,
    };

    output.print_today(&view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[tokio::test]
    async fn test_show_does_not_mark_read() {
        let mut tracker = Tracker::in_memory();
        tracker.refresh_book_and_chapter(Some("Genesis 1:1"));
        let session = offline_session("2024-01-10");

        show(&mut tracker, &session, &quiet()).await.unwrap();

        assert_eq!(tracker.state().total, 0);
        assert!(!tracker.status(&session.day).is_read());
    }
}
