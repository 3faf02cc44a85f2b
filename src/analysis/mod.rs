//! Aggregations over a fully loaded set of [ActivityRecord]. Every function here is pure and
//! recomputes its result from scratch, so the same records always produce the same output.
//!
//! Groups are kept in [BTreeMap]s, meaning names are iterated in lexicographic order and days
//! in ascending order.

use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use chrono::{Duration, NaiveDate};

use crate::{model::record::ActivityRecord, utils::time::day_of_year};

/// Activities with total duration below this are dropped from the filtered duration report.
pub const LONG_ACTIVITY_THRESHOLD: Duration = Duration::hours(10);

/// Instances shorter than this count as short.
pub const SHORT_INSTANCE_LIMIT: Duration = Duration::minutes(5);

/// Share of short instances required for an activity to be classified as short.
pub const SHORT_ACTIVITY_RATIO: f64 = 0.9;

pub type OccurrenceCounts = BTreeMap<Arc<str>, usize>;

/// Occurrences grouped by day of year (1 to 366).
pub type DailyOccurrences = BTreeMap<u32, OccurrenceCounts>;

pub type TotalDurations = BTreeMap<Arc<str>, Duration>;

/// Number of calendar dates touched by any record. Both the start and the end date count, so an
/// interval over midnight adds 2 dates.
pub fn distinct_days(records: &[ActivityRecord]) -> usize {
    records
        .iter()
        .flat_map(|v| [v.start.date(), v.end.date()])
        .collect::<BTreeSet<NaiveDate>>()
        .len()
}

/// Number of records for each activity name.
pub fn occurrences_per_activity(records: &[ActivityRecord]) -> OccurrenceCounts {
    count_by_name(records.iter())
}

/// Number of records for each activity name, per day of year of the record start.
///
/// Days of different years with the same ordinal end up in the same group.
pub fn daily_occurrences_per_activity(records: &[ActivityRecord]) -> DailyOccurrences {
    let mut days = BTreeMap::<u32, Vec<&ActivityRecord>>::new();
    for record in records {
        days.entry(day_of_year(record.start.date()))
            .or_default()
            .push(record);
    }

    days.into_iter()
        .map(|(day, records)| (day, count_by_name(records.into_iter())))
        .collect()
}

/// Sum of record durations for each activity name. Sums that don't fit into [Duration] stay at
/// [Duration::MAX].
pub fn total_duration_per_activity(records: &[ActivityRecord]) -> TotalDurations {
    let mut map = TotalDurations::new();
    for record in records {
        let total = map.entry(record.name.clone()).or_insert_with(Duration::zero);
        *total = total
            .checked_add(&record.duration())
            .unwrap_or(Duration::MAX);
    }
    map
}

/// Same as [total_duration_per_activity], but keeps only activities that took at least
/// `threshold` in total.
pub fn long_activities(records: &[ActivityRecord], threshold: Duration) -> TotalDurations {
    let mut map = total_duration_per_activity(records);
    map.retain(|_, duration| *duration >= threshold);
    map
}

/// Names of activities where at least 90% of the instances took less than 5 minutes.
pub fn short_activities(records: &[ActivityRecord]) -> Vec<Arc<str>> {
    let occurrences = occurrences_per_activity(records);
    let short = count_by_name(
        records
            .iter()
            .filter(|v| v.duration() < SHORT_INSTANCE_LIMIT),
    );

    short
        .into_iter()
        .filter_map(|(name, short_count)| {
            let total = occurrences.get(&name).copied().unwrap_or(0);
            debug_assert!(total > 0, "{name} has short instances but no occurrences");
            if total == 0 {
                return None;
            }
            (short_count as f64 >= SHORT_ACTIVITY_RATIO * total as f64).then_some(name)
        })
        .collect()
}

fn count_by_name<'a>(records: impl Iterator<Item = &'a ActivityRecord>) -> OccurrenceCounts {
    let mut map = OccurrenceCounts::new();
    for record in records {
        *map.entry(record.name.clone()).or_insert(0) += 1;
    }
    map
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::utils::time::parse_record_time;

    fn record(name: &str, start: &str, end: &str) -> ActivityRecord {
        ActivityRecord::new(
            name,
            parse_record_time(start).unwrap(),
            parse_record_time(end).unwrap(),
        )
    }

    fn sample() -> Vec<ActivityRecord> {
        vec![
            record("Sleeping", "2021-03-01 23:00:00", "2021-03-02 07:00:00"),
            record("Eating", "2021-03-02 08:00:00", "2021-03-02 08:03:00"),
        ]
    }

    #[test]
    fn distinct_days_counts_start_and_end() {
        assert_eq!(distinct_days(&sample()), 2);
        assert_eq!(distinct_days(&[]), 0);

        let records = vec![
            record("Sleeping", "2021-03-01 23:00:00", "2021-03-03 01:00:00"),
            record("Eating", "2022-03-01 08:00:00", "2022-03-01 08:30:00"),
        ];
        // Same day of year in 2022 is still a different calendar date.
        assert_eq!(distinct_days(&records), 3);
    }

    #[test]
    fn occurrences_sum_to_record_count() {
        let records = vec![
            record("Eating", "2021-03-02 08:00:00", "2021-03-02 08:03:00"),
            record("Eating", "2021-03-02 12:00:00", "2021-03-02 12:30:00"),
            record("Sleeping", "2021-03-01 23:00:00", "2021-03-02 07:00:00"),
        ];
        let occurrences = occurrences_per_activity(&records);

        assert_eq!(occurrences.get("Eating"), Some(&2));
        assert_eq!(occurrences.get("Sleeping"), Some(&1));
        assert_eq!(occurrences.values().sum::<usize>(), records.len());
    }

    #[test]
    fn daily_occurrences_group_by_start_day_of_year() {
        let records = vec![
            record("Sleeping", "2021-03-01 23:00:00", "2021-03-02 07:00:00"),
            record("Eating", "2021-03-02 08:00:00", "2021-03-02 08:03:00"),
            record("Eating", "2021-03-02 13:00:00", "2021-03-02 13:20:00"),
            // Same ordinal as 2021-03-02, merged by design.
            record("Eating", "2022-03-02 08:00:00", "2022-03-02 08:10:00"),
        ];
        let daily = daily_occurrences_per_activity(&records);

        assert_eq!(daily.keys().copied().collect::<Vec<_>>(), vec![60, 61]);
        assert_eq!(daily[&60].get("Sleeping"), Some(&1));
        assert_eq!(daily[&61].get("Eating"), Some(&3));
        assert_eq!(daily[&61].get("Sleeping"), None);
    }

    #[test]
    fn total_durations_sum_absolute_lengths() {
        let records = vec![
            record("Eating", "2021-03-02 08:00:00", "2021-03-02 08:03:00"),
            record("Eating", "2021-03-02 12:30:00", "2021-03-02 12:00:00"),
            record("Sleeping", "2021-03-01 23:00:00", "2021-03-02 07:00:00"),
        ];
        let totals = total_duration_per_activity(&records);

        assert_eq!(totals["Eating"], Duration::minutes(33));
        assert_eq!(totals["Sleeping"], Duration::hours(8));
    }

    #[test]
    fn total_durations_saturate() {
        let span = record("Waiting", "0000-01-01 00:00:00", "9999-12-31 23:59:59");
        let records = vec![span; 30_000];

        let totals = total_duration_per_activity(&records);

        assert_eq!(totals["Waiting"], Duration::MAX);
        assert_eq!(long_activities(&records, LONG_ACTIVITY_THRESHOLD).len(), 1);
    }

    #[test]
    fn long_activities_threshold_is_inclusive() {
        let records = vec![
            record("Sleeping", "2021-03-01 22:00:00", "2021-03-02 08:00:00"),
            record("Working", "2021-03-02 09:00:00", "2021-03-02 18:59:59"),
        ];
        let long = long_activities(&records, LONG_ACTIVITY_THRESHOLD);

        assert_eq!(long.len(), 1);
        assert_eq!(long["Sleeping"], Duration::hours(10));
    }

    #[test]
    fn short_activities_use_ratio_threshold() {
        let mut records = vec![];
        // 9 of 10 short instances: exactly 90%, included.
        for minute in 0..9 {
            let start = format!("2021-03-02 08:{:02}:00", minute * 5);
            let end = format!("2021-03-02 08:{:02}:30", minute * 5);
            records.push(record("Grooming", &start, &end));
        }
        records.push(record("Grooming", "2021-03-02 10:00:00", "2021-03-02 10:30:00"));
        // 8 of 10 short instances, excluded.
        for minute in 0..8 {
            let start = format!("2021-03-02 11:{:02}:00", minute * 5);
            let end = format!("2021-03-02 11:{:02}:10", minute * 5);
            records.push(record("Snack", &start, &end));
        }
        records.push(record("Snack", "2021-03-02 13:00:00", "2021-03-02 13:30:00"));
        records.push(record("Snack", "2021-03-02 14:00:00", "2021-03-02 14:30:00"));
        // Exactly 5 minutes is not short.
        records.push(record("Toileting", "2021-03-02 15:00:00", "2021-03-02 15:05:00"));

        assert_eq!(short_activities(&records), vec![Arc::<str>::from("Grooming")]);
    }

    #[test]
    fn end_to_end_example() {
        let records = sample();
        assert_eq!(short_activities(&records), vec![Arc::<str>::from("Eating")]);
        assert!(long_activities(&records, LONG_ACTIVITY_THRESHOLD).is_empty());
    }
}
