use std::{
    collections::{BTreeMap, HashSet},
    str::FromStr,
};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, InvalidIntervalSnafu, Mmsi, VesselPosition};

/// Bucketing granularity for the unique-vessel count series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
pub enum TimeInterval {
    #[strum(to_string = "hourly")]
    Hour,
    #[strum(to_string = "daily")]
    Day,
    #[strum(to_string = "weekly")]
    Week,
}

impl TimeInterval {
    /// Start of the bucket containing `timestamp`, calendar-aligned in UTC.
    /// Week buckets start on Monday 00:00.
    pub fn bucket_start(&self, timestamp: DateTime<Utc>) -> DateTime<Utc> {
        const DAY: i64 = 86_400;

        let secs = timestamp.timestamp();
        let aligned = match self {
            TimeInterval::Hour => secs - secs.rem_euclid(3_600),
            TimeInterval::Day => secs - secs.rem_euclid(DAY),
            TimeInterval::Week => {
                let day = secs.div_euclid(DAY);
                // The epoch fell on a Thursday, three days past a Monday.
                (day - (day + 3).rem_euclid(7)) * DAY
            }
        };

        DateTime::from_timestamp(aligned, 0).unwrap()
    }

    pub fn duration(&self) -> Duration {
        match self {
            TimeInterval::Hour => Duration::hours(1),
            TimeInterval::Day => Duration::days(1),
            TimeInterval::Week => Duration::weeks(1),
        }
    }
}

impl FromStr for TimeInterval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "hour" | "hourly" => Ok(TimeInterval::Hour),
            "d" | "day" | "daily" => Ok(TimeInterval::Day),
            "w" | "week" | "weekly" => Ok(TimeInterval::Week),
            _ => InvalidIntervalSnafu { given: s }.fail(),
        }
    }
}

impl<'de> Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VesselCount {
    pub bucket_start: DateTime<Utc>,
    pub unique_vessels: u32,
}

/// Unique-vessel counts per bucket, ordered by ascending bucket start.
/// Sparse: buckets without any records are absent.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselCountSeries {
    pub interval: TimeInterval,
    pub counts: Vec<VesselCount>,
}

impl VesselCountSeries {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Reindexes the series over the full range between its first and last
    /// bucket, inserting zero counts where the sparse series has gaps. A
    /// follow-on step, deliberately not part of the aggregation itself.
    pub fn fill_gaps(self) -> VesselCountSeries {
        let step = self.interval.duration();
        let mut counts: Vec<VesselCount> = Vec::with_capacity(self.counts.len());

        for count in self.counts {
            if let Some(prev) = counts.last().copied() {
                let mut expected = prev.bucket_start + step;
                while expected < count.bucket_start {
                    counts.push(VesselCount {
                        bucket_start: expected,
                        unique_vessels: 0,
                    });
                    expected += step;
                }
            }
            counts.push(count);
        }

        VesselCountSeries {
            interval: self.interval,
            counts,
        }
    }
}

/// Counts distinct vessels per bucket. Repeated position reports from the
/// same vessel within one bucket count once.
pub fn count_unique_vessels_by_interval(
    positions: &[VesselPosition],
    interval: TimeInterval,
) -> VesselCountSeries {
    let mut buckets: BTreeMap<DateTime<Utc>, HashSet<Mmsi>> = BTreeMap::new();

    for position in positions {
        buckets
            .entry(interval.bucket_start(position.msgtime))
            .or_default()
            .insert(position.mmsi);
    }

    VesselCountSeries {
        interval,
        counts: buckets
            .into_iter()
            .map(|(bucket_start, vessels)| VesselCount {
                bucket_start,
                unique_vessels: vessels.len() as u32,
            })
            .collect(),
    }
}
