use std::{fmt::Write, sync::Arc};

use chrono::Duration;

use crate::{
    analysis::{DailyOccurrences, OccurrenceCounts, TotalDurations},
    model::record::ActivityRecord,
};

pub const SHORT_ACTIVITIES_HEADER: &str = "Activities with 90% of instances below 5 minutes:";

/// Human readable duration such as `1 days, 2 hours, 5 seconds.`. Days, hours and minutes are
/// only printed when they aren't zero, seconds are always printed.
pub fn pretty_duration(v: Duration) -> String {
    let mut output = String::new();
    let units = [
        (v.num_days(), "days"),
        (v.num_hours() % 24, "hours"),
        (v.num_minutes() % 60, "minutes"),
    ];
    for (value, unit) in units {
        if value != 0 {
            let _ = write!(output, "{value} {unit}, ");
        }
    }
    let _ = write!(output, "{} seconds.", v.num_seconds() % 60);
    output
}

pub fn format_distinct_days(count: usize) -> String {
    format!("There are {count} distinct days in the data.\n")
}

pub fn format_occurrences(occurrences: &OccurrenceCounts) -> String {
    let mut output = String::new();
    write_occurrences(&mut output, occurrences);
    output
}

pub fn format_daily_occurrences(daily: &DailyOccurrences) -> String {
    let mut output = String::new();
    for (index, (day, occurrences)) in daily.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        let _ = writeln!(output, "In day {day} we have:");
        write_occurrences(&mut output, occurrences);
    }
    output
}

pub fn format_total_durations(durations: &TotalDurations) -> String {
    let mut output = String::new();
    for (name, duration) in durations {
        let _ = writeln!(output, "{name} total duration: {}", pretty_duration(*duration));
    }
    output
}

pub fn format_short_activities(names: &[Arc<str>]) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "{SHORT_ACTIVITIES_HEADER}");
    for name in names {
        let _ = writeln!(output, "- {name}");
    }
    output
}

/// Lists every record in log order together with its duration.
pub fn format_record_durations(records: &[ActivityRecord]) -> String {
    let mut output = String::new();
    for record in records {
        let _ = writeln!(
            output,
            "{record}        duration: {}",
            pretty_duration(record.duration())
        );
    }
    output
}

fn write_occurrences(output: &mut String, occurrences: &OccurrenceCounts) {
    for (name, count) in occurrences {
        let _ = writeln!(output, "{name} appears {count} times.");
    }
}
