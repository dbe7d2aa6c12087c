//! Read command handler

use anyhow::{bail, Result};
use tracing::warn;

use swordle_core::{chapter_link, KeyValueStore, MarkOutcome, Tracker};

use super::{daily_chapter, Session};
use crate::output::{Output, ReadView};

/// Mark today's chapter as read
///
/// Only the first read of a day counts. Fails when no chapter is known at
/// all, since there is nothing to read.
pub async fn mark<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    session: &Session,
    open_link: bool,
    output: &Output,
) -> Result<()> {
    let daily = daily_chapter(tracker, session, output).await;

    let Some(book_and_chapter) = daily.book_and_chapter else {
        bail!(
            "No chapter available for {}. Check your connection or the scripture_url setting.",
            session.day.date_key()
        );
    };

    let outcome = tracker.mark_read(&session.day);
    let link = chapter_link(&book_and_chapter);

    if open_link {
        match link {
            Some(ref link) => {
                if let Err(e) = open::that(link) {
                    warn!("Failed to open {}: {}", link, e);
                    output.message(&format!("Could not open browser: {}", e));
                }
            }
            None => output.message(&format!("No reader link for {}", book_and_chapter)),
        }
    }

    output.print_read(&ReadView {
        date: session.day.date_key(),
        book_and_chapter,
        link,
        recorded: matches!(outcome, MarkOutcome::Recorded(_)),
        statistics: tracker.statistics(),
    });

    Ok(())
}
