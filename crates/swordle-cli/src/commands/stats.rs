//! Stats command handler

use anyhow::Result;

use swordle_core::{KeyValueStore, Tracker};

use crate::output::Output;

/// Show streak statistics
pub fn show<S: KeyValueStore>(tracker: &Tracker<S>, output: &Output) -> Result<()> {
    output.print_statistics(&tracker.statistics());
    Ok(())
}
