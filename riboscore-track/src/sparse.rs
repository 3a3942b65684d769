use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use riboscore_core::errors::TrackError;
use riboscore_core::models::Interval;
use riboscore_core::utils::get_dynamic_reader;

use crate::traits::SignalTrack;

/// A sparse signal track: discrete scored intervals, one sorted vector per
/// chromosome.
///
/// Queries use **containment** semantics, not general overlap: a signal
/// interval contributes to `query_sum(chr, start, end)` only when
/// `interval.start >= start && interval.end <= end`. Signal straddling a
/// query boundary is undercounted on purpose; this matches the behavior of
/// the upstream pipeline and is kept for output parity. The exclusion filter
/// in `riboscore-scoring` uses a different (overlap) test - the two are not
/// interchangeable.
///
/// Because containment implies `interval.start >= query.start`, each query is
/// a binary-search lower bound on the start position followed by a bounded
/// forward scan, so lookups stay sublinear in the track size.
pub struct SparseTrack {
    chroms: HashMap<String, Vec<Interval<u32, f64>>>,
}

/// Parse one `chr  start  end  value` line of a sparse signal file.
pub(crate) fn parse_signal_line(line: &str) -> Result<(String, Interval<u32, f64>), TrackError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 4 {
        return Err(TrackError::IntervalParse(line.to_string()));
    }

    let start = fields[1]
        .parse::<u32>()
        .map_err(|_| TrackError::IntervalParse(line.to_string()))?;
    let end = fields[2]
        .parse::<u32>()
        .map_err(|_| TrackError::IntervalParse(line.to_string()))?;
    let val = fields[3]
        .parse::<f64>()
        .map_err(|_| TrackError::IntervalParse(line.to_string()))?;

    Ok((fields[0].to_string(), Interval { start, end, val }))
}

/// First index whose interval start is `>= start`, via binary search over a
/// start-sorted slice.
#[inline]
fn lower_bound(start: u32, intervals: &[Interval<u32, f64>]) -> usize {
    let mut size = intervals.len();
    let mut low = 0;

    while size > 0 {
        let half = size / 2;
        let other_half = size - half;
        let probe = low + half;
        let other_low = low + other_half;
        let v = &intervals[probe];
        size = half;
        low = if v.start < start { other_low } else { low }
    }
    low
}

impl SparseTrack {
    /// Build a track from already-parsed intervals, keyed by chromosome.
    pub fn from_intervals(intervals: Vec<(String, Interval<u32, f64>)>) -> Self {
        let mut chroms: HashMap<String, Vec<Interval<u32, f64>>> = HashMap::new();
        for (chr, interval) in intervals {
            chroms.entry(chr).or_default().push(interval);
        }
        for chr_intervals in chroms.values_mut() {
            chr_intervals.sort();
        }
        SparseTrack { chroms }
    }

    /// Number of signal intervals across all chromosomes.
    pub fn len(&self) -> usize {
        self.chroms.values().map(|v| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.chroms.is_empty()
    }
}

impl TryFrom<&Path> for SparseTrack {
    type Error = TrackError;

    ///
    /// Create a new [SparseTrack] from a tab-separated scored-interval file
    /// (`chr  start  end  value`, no header; plain or gzip).
    ///
    /// A line that fails to parse makes the whole file invalid: malformed
    /// track input is fatal, unlike per-region lookup misses.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| TrackError::InvalidFormat(format!("{}: {}", value.display(), e)))?;

        let mut intervals: Vec<(String, Interval<u32, f64>)> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            intervals.push(parse_signal_line(&line)?);
        }

        Ok(SparseTrack::from_intervals(intervals))
    }
}

impl SignalTrack for SparseTrack {
    fn query_sum(&self, chr: &str, start: u32, end: u32) -> f64 {
        let Some(intervals) = self.chroms.get(chr) else {
            return 0.0;
        };

        let mut sum = 0.0;
        let mut idx = lower_bound(start, intervals);
        while idx < intervals.len() {
            let interval = &intervals[idx];
            if interval.start >= end {
                break;
            }
            if interval.contained_in(start, end) {
                sum += interval.val;
            }
            idx += 1;
        }
        sum
    }

    fn has_chrom(&self, chr: &str) -> bool {
        self.chroms.contains_key(chr)
    }
}
