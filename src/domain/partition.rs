//! Splits a set of shows into past and upcoming relative to a reference instant.
//!
//! One boundary rule is used everywhere: a show starting exactly at the
//! reference instant is upcoming. Detail pages, directory counts and search
//! counts all go through [`is_upcoming`].

use chrono::{DateTime, Utc};

/// Display format for show start times.
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[must_use]
pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format(START_TIME_FORMAT).to_string()
}

#[must_use]
pub fn is_upcoming(start_time: DateTime<Utc>, reference: DateTime<Utc>) -> bool {
    start_time >= reference
}

/// Number of start times at or after `reference`.
pub fn count_upcoming<I>(start_times: I, reference: DateTime<Utc>) -> usize
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    start_times
        .into_iter()
        .filter(|t| is_upcoming(*t, reference))
        .count()
}

/// Past and upcoming partitions, each in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    pub fn split<I, F>(items: I, reference: DateTime<Utc>, start_of: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> DateTime<Utc>,
    {
        let mut partition = Self::default();
        for item in items {
            if is_upcoming(start_of(&item), reference) {
                partition.upcoming.push(item);
            } else {
                partition.past.push(item);
            }
        }
        partition
    }

    #[must_use]
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    #[must_use]
    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }

    pub fn map<U, F>(self, mut f: F) -> Partition<U>
    where
        F: FnMut(T) -> U,
    {
        Partition {
            past: self.past.into_iter().map(&mut f).collect(),
            upcoming: self.upcoming.into_iter().map(&mut f).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2019, 5, 21, h, m, 0).unwrap()
    }

    #[test]
    fn splits_by_reference_keeping_source_order() {
        let reference = at(12, 0);
        let shows = vec![(1, at(21, 30)), (2, at(9, 0)), (3, at(23, 0)), (4, at(11, 59))];

        let partition = Partition::split(shows, reference, |(_, t)| *t);

        let past: Vec<i32> = partition.past.iter().map(|(id, _)| *id).collect();
        let upcoming: Vec<i32> = partition.upcoming.iter().map(|(id, _)| *id).collect();
        assert_eq!(past, vec![2, 4]);
        assert_eq!(upcoming, vec![1, 3]);
    }

    #[test]
    fn show_at_reference_is_upcoming() {
        let reference = at(20, 0);
        let partition = Partition::split(vec![reference], reference, |t| *t);
        assert_eq!(partition.past_count(), 0);
        assert_eq!(partition.upcoming_count(), 1);
        assert!(is_upcoming(reference, reference));
        assert!(!is_upcoming(reference - Duration::seconds(1), reference));
    }

    #[test]
    fn partition_sizes_cover_input() {
        let reference = at(12, 0);
        let times: Vec<DateTime<Utc>> = (0..24).map(|h| at(h, 30)).collect();
        let partition = Partition::split(times.clone(), reference, |t| *t);
        assert_eq!(partition.past_count() + partition.upcoming_count(), times.len());
        assert!(partition.past.iter().all(|t| *t < reference));
        assert!(partition.upcoming.iter().all(|t| *t >= reference));
    }

    #[test]
    fn count_matches_partition() {
        let reference = at(12, 0);
        let times = vec![at(12, 0), at(8, 0), at(15, 0)];
        let partition = Partition::split(times.clone(), reference, |t| *t);
        assert_eq!(count_upcoming(times, reference), partition.upcoming_count());
    }

    #[test]
    fn map_projects_both_sides() {
        let reference = at(12, 0);
        let partition = Partition::split(vec![at(10, 0), at(13, 15)], reference, |t| *t)
            .map(|t| format_start_time(&t));
        assert_eq!(partition.past, vec!["2019-05-21 10:00:00".to_string()]);
        assert_eq!(partition.upcoming, vec!["2019-05-21 13:15:00".to_string()]);
    }
}
