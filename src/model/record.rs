use std::{fmt::Display, sync::Arc};

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

use crate::utils::time::format_record_time;

/// One interval read from the activity log. Many records share the same name, one record per
/// log line.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Clone)]
pub struct ActivityRecord {
    pub name: Arc<str>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ActivityRecord {
    pub fn new(name: impl Into<Arc<str>>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }

    /// Length of the interval. Logs sometimes have `end` before `start`, so this is always the
    /// absolute difference.
    pub fn duration(&self) -> Duration {
        (self.end - self.start).abs()
    }
}

impl Display for ActivityRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}     {}     {}",
            self.name,
            format_record_time(self.start),
            format_record_time(self.end)
        )
    }
}
