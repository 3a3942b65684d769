use std::collections::HashMap;
use std::path::Path;

use bigtools::BigWigRead;

use riboscore_core::errors::TrackError;
use riboscore_core::models::Interval;

use crate::traits::SignalTrack;

/// A dense signal track backed by a BigWig file.
///
/// All value intervals are pulled out of the BigWig once, eagerly, at
/// construction; this is the only blocking IO the store ever does, and the
/// built track is immutable so it can be queried concurrently.
///
/// `query_sum` accumulates per-base values clipped to the query range, the
/// same quantity pyBigWig reports for `stats(type="sum")`. Positions the
/// BigWig leaves undefined simply never appear in the interval list, and
/// NaN-valued intervals are dropped at load time - neither contributes to a
/// sum.
pub struct DenseTrack {
    chroms: HashMap<String, ChromValues>,
}

struct ChromValues {
    intervals: Vec<Interval<u32, f64>>,
    max_len: u32,
}

impl ChromValues {
    fn new(mut intervals: Vec<Interval<u32, f64>>) -> Self {
        intervals.sort();
        let max_len = intervals
            .iter()
            .map(|i| i.end.saturating_sub(i.start))
            .max()
            .unwrap_or(0);
        ChromValues { intervals, max_len }
    }

    /// First index that could overlap a query starting at `start`, found by
    /// binary search after backing off by the longest interval length.
    #[inline]
    fn scan_from(&self, start: u32) -> usize {
        let target = start.saturating_sub(self.max_len);
        let mut size = self.intervals.len();
        let mut low = 0;

        while size > 0 {
            let half = size / 2;
            let other_half = size - half;
            let probe = low + half;
            let other_low = low + other_half;
            let v = &self.intervals[probe];
            size = half;
            low = if v.start < target { other_low } else { low }
        }
        low
    }

    fn clipped_sum(&self, start: u32, end: u32) -> f64 {
        let mut sum = 0.0;
        let mut idx = self.scan_from(start);
        while idx < self.intervals.len() {
            let interval = &self.intervals[idx];
            if interval.start >= end {
                break;
            }
            let covered = interval.intersect(start, end);
            if covered > 0 {
                sum += interval.val * covered as f64;
            }
            idx += 1;
        }
        sum
    }
}

impl DenseTrack {
    ///
    /// Open a BigWig file and load its full value set into memory.
    ///
    /// # Arguments
    /// - path: path to the BigWig file on disk
    ///
    pub fn open(path: &Path) -> Result<Self, TrackError> {
        let mut bw = BigWigRead::open_file(path)
            .map_err(|e| TrackError::InvalidFormat(format!("{}: {}", path.display(), e)))?;

        let chrom_info: Vec<(String, u32)> = bw
            .chroms()
            .iter()
            .map(|c| (c.name.clone(), c.length))
            .collect();

        let mut values: Vec<(String, Interval<u32, f64>)> = Vec::new();
        for (name, length) in chrom_info {
            let intervals = bw
                .get_interval(&name, 0, length)
                .map_err(|e| TrackError::BigWig(format!("{}: {}", name, e)))?;
            for interval in intervals {
                let interval = interval.map_err(|e| TrackError::BigWig(format!("{}", e)))?;
                if interval.value.is_nan() {
                    continue;
                }
                values.push((
                    name.clone(),
                    Interval {
                        start: interval.start,
                        end: interval.end,
                        val: interval.value as f64,
                    },
                ));
            }
        }

        Ok(DenseTrack::from_values(values))
    }

    /// Build a track from already-extracted value intervals, keyed by
    /// chromosome. NaN values are dropped here as well.
    pub fn from_values(values: Vec<(String, Interval<u32, f64>)>) -> Self {
        let mut grouped: HashMap<String, Vec<Interval<u32, f64>>> = HashMap::new();
        for (chr, interval) in values {
            if interval.val.is_nan() {
                continue;
            }
            grouped.entry(chr).or_default().push(interval);
        }

        let chroms = grouped
            .into_iter()
            .map(|(chr, intervals)| (chr, ChromValues::new(intervals)))
            .collect();

        DenseTrack { chroms }
    }
}

impl SignalTrack for DenseTrack {
    fn query_sum(&self, chr: &str, start: u32, end: u32) -> f64 {
        match self.chroms.get(chr) {
            Some(values) => values.clipped_sum(start, end),
            None => 0.0,
        }
    }

    fn has_chrom(&self, chr: &str) -> bool {
        self.chroms.contains_key(chr)
    }
}
