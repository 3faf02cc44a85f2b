pub mod format;

use std::{collections::BTreeMap, sync::Arc};

use clap::ValueEnum;
use serde::Serialize;

use crate::{
    analysis::{self, LONG_ACTIVITY_THRESHOLD},
    model::record::ActivityRecord,
};

use format::{
    format_daily_occurrences, format_distinct_days, format_occurrences, format_record_durations,
    format_short_activities, format_total_durations,
};

pub fn distinct_day_count(records: &[ActivityRecord]) -> usize {
    analysis::distinct_days(records)
}

pub fn distinct_days_report(records: &[ActivityRecord]) -> String {
    format_distinct_days(distinct_day_count(records))
}

pub fn occurrences_per_activity(records: &[ActivityRecord]) -> String {
    format_occurrences(&analysis::occurrences_per_activity(records))
}

pub fn daily_occurrences_per_activity(records: &[ActivityRecord]) -> String {
    format_daily_occurrences(&analysis::daily_occurrences_per_activity(records))
}

/// Totals of activities that took at least 10 hours overall.
pub fn total_duration_report(records: &[ActivityRecord]) -> String {
    format_total_durations(&analysis::long_activities(records, LONG_ACTIVITY_THRESHOLD))
}

/// Totals of every activity, without the 10 hour filter.
pub fn all_durations_report(records: &[ActivityRecord]) -> String {
    format_total_durations(&analysis::total_duration_per_activity(records))
}

pub fn short_activity_report(records: &[ActivityRecord]) -> String {
    format_short_activities(&analysis::short_activities(records))
}

pub fn activity_durations_report(records: &[ActivityRecord]) -> String {
    format_record_durations(records)
}

/// Every report the application can produce.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ReportKind {
    DistinctDays,
    Occurrences,
    DailyOccurrences,
    LongDurations,
    AllDurations,
    ShortActivities,
    RecordDurations,
}

impl ReportKind {
    /// File the report is saved into when no other path is given. Distinct days are only
    /// displayed.
    pub fn default_file_name(&self) -> Option<&'static str> {
        match self {
            ReportKind::DistinctDays => None,
            ReportKind::Occurrences => Some("TotalActivityOccurrences.txt"),
            ReportKind::DailyOccurrences => Some("DailyActivityOccurrences.txt"),
            ReportKind::LongDurations => Some("ActivitiesWithTotalDurationOver10h.txt"),
            ReportKind::AllDurations => Some("ActivityTotalDurations.txt"),
            ReportKind::ShortActivities => Some("ActivitiesWithOver90PercentUnder5Minutes.txt"),
            ReportKind::RecordDurations => Some("ActivityDurations.txt"),
        }
    }

    pub fn render(&self, records: &[ActivityRecord]) -> String {
        match self {
            ReportKind::DistinctDays => distinct_days_report(records),
            ReportKind::Occurrences => occurrences_per_activity(records),
            ReportKind::DailyOccurrences => daily_occurrences_per_activity(records),
            ReportKind::LongDurations => total_duration_report(records),
            ReportKind::AllDurations => all_durations_report(records),
            ReportKind::ShortActivities => short_activity_report(records),
            ReportKind::RecordDurations => activity_durations_report(records),
        }
    }

    /// Renders the aggregate behind the report as pretty JSON. Durations are whole seconds.
    pub fn render_json(&self, records: &[ActivityRecord]) -> serde_json::Result<String> {
        match self {
            ReportKind::DistinctDays => serde_json::to_string_pretty(&DistinctDaysJson {
                distinct_days: distinct_day_count(records),
            }),
            ReportKind::Occurrences => {
                serde_json::to_string_pretty(&analysis::occurrences_per_activity(records))
            }
            ReportKind::DailyOccurrences => {
                serde_json::to_string_pretty(&analysis::daily_occurrences_per_activity(records))
            }
            ReportKind::LongDurations => serde_json::to_string_pretty(&as_seconds(
                analysis::long_activities(records, LONG_ACTIVITY_THRESHOLD),
            )),
            ReportKind::AllDurations => serde_json::to_string_pretty(&as_seconds(
                analysis::total_duration_per_activity(records),
            )),
            ReportKind::ShortActivities => {
                serde_json::to_string_pretty(&analysis::short_activities(records))
            }
            ReportKind::RecordDurations => serde_json::to_string_pretty(
                &records
                    .iter()
                    .map(|record| RecordDurationJson {
                        duration: record.duration().num_seconds(),
                        record,
                    })
                    .collect::<Vec<_>>(),
            ),
        }
    }
}

#[derive(Serialize)]
struct DistinctDaysJson {
    distinct_days: usize,
}

#[derive(Serialize)]
struct RecordDurationJson<'a> {
    #[serde(flatten)]
    record: &'a ActivityRecord,
    duration: i64,
}

fn as_seconds(durations: analysis::TotalDurations) -> BTreeMap<Arc<str>, i64> {
    durations
        .into_iter()
        .map(|(name, duration)| (name, duration.num_seconds()))
        .collect()
}
