use std::io::{BufRead, Write};

use anyhow::Result;

use riboscore_core::errors::RecordError;
use riboscore_core::models::{Region, TranscriptSummary};

/// An exclusion list: coordinate pairs a transcript span must not overlap.
///
/// NOTE: as in the upstream pipeline, the overlap test looks at coordinates
/// only - the chromosome of an exclusion interval is never compared against
/// the record's. Matching per-chromosome would be the conventional test, but
/// it would change which records survive; kept as-is for output parity.
pub struct ExclusionSet {
    spans: Vec<(u32, u32)>,
}

impl ExclusionSet {
    pub fn new(regions: &[Region]) -> Self {
        let spans = regions.iter().map(|r| (r.start, r.end)).collect();
        ExclusionSet { spans }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Strict-inequality overlap test: a boundary touch does not count.
    ///
    /// A span `[start, end)` is excluded when, for any exclusion `[es, ee)`:
    /// `(end > es && end < ee) || (start > es && start < ee)`.
    pub fn excludes(&self, start: u32, end: u32) -> bool {
        self.spans.iter().any(|&(es, ee)| {
            (end > es && end < ee) || (start > es && start < ee)
        })
    }
}

/// Drop every summary whose genomic span overlaps an exclusion interval.
pub fn filter_excluding(
    summaries: Vec<TranscriptSummary>,
    exclusions: &ExclusionSet,
) -> Vec<TranscriptSummary> {
    summaries
        .into_iter()
        .filter(|s| !exclusions.excludes(s.start, s.end))
        .collect()
}

/// Counts from a streaming filter pass.
#[derive(Debug, PartialEq, Eq)]
pub struct FilterReport {
    pub kept: usize,
    pub dropped: usize,
}

/// Streaming form of [`filter_excluding`]: summaries are read one record at
/// a time and surviving lines are written through verbatim, so only the
/// exclusion side is fully resident. The header row, if present, is passed
/// through untouched.
pub fn filter_stream<R: BufRead, W: Write>(
    reader: R,
    exclusions: &ExclusionSet,
    mut writer: W,
) -> Result<FilterReport> {
    let mut report = FilterReport { kept: 0, dropped: 0 };

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if idx == 0 && line.starts_with("name\t") {
            writeln!(writer, "{}", line)?;
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 4 {
            return Err(RecordError::RecordParse(line.clone()).into());
        }
        let start: u32 = fields[2]
            .parse()
            .map_err(|_| RecordError::RecordParse(line.clone()))?;
        let end: u32 = fields[3]
            .parse()
            .map_err(|_| RecordError::RecordParse(line.clone()))?;

        if exclusions.excludes(start, end) {
            report.dropped += 1;
        } else {
            report.kept += 1;
            writeln!(writer, "{}", line)?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn exclusions(spans: &[(u32, u32)]) -> ExclusionSet {
        let regions: Vec<Region> = spans
            .iter()
            .map(|&(start, end)| Region {
                chr: "chr1".to_string(),
                start,
                end,
            })
            .collect();
        ExclusionSet::new(&regions)
    }

    fn summary(name: &str, start: u32, end: u32) -> TranscriptSummary {
        TranscriptSummary {
            name: name.to_string(),
            chr: "chr1".to_string(),
            start,
            end,
            count: 1,
            sum: 1.0,
            min: 0.1,
            max: 0.1,
            mean: 0.1,
            median: 0.1,
            std: f64::NAN,
        }
    }

    #[rstest]
    fn test_overlapping_record_dropped() {
        // 100 < 150 < 200, so [100,200) overlaps [150,250)
        let excl = exclusions(&[(150, 250)]);
        assert!(excl.excludes(100, 200));

        let kept = filter_excluding(vec![summary("T1", 100, 200)], &excl);
        assert!(kept.is_empty());
    }

    #[rstest]
    fn test_boundary_touch_not_dropped() {
        let excl = exclusions(&[(200, 300)]);
        assert!(!excl.excludes(100, 200));

        let kept = filter_excluding(vec![summary("T1", 100, 200)], &excl);
        assert_eq!(kept.len(), 1);
    }

    #[rstest]
    fn test_record_containing_exclusion_not_dropped() {
        // neither endpoint of [100,400) falls strictly inside [200,300);
        // the strict formula keeps it
        let excl = exclusions(&[(200, 300)]);
        assert!(!excl.excludes(100, 400));
    }

    #[rstest]
    fn test_len_and_is_empty() {
        let excl = exclusions(&[(0, 50), (150, 250)]);
        assert_eq!(excl.len(), 2);
        assert!(!excl.is_empty());

        let empty = exclusions(&[]);
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
        assert!(!empty.excludes(0, u32::MAX));
    }

    #[rstest]
    fn test_any_exclusion_suffices() {
        let excl = exclusions(&[(0, 50), (150, 250)]);
        assert!(excl.excludes(100, 200));
    }

    #[rstest]
    fn test_filter_stream_preserves_header_and_lines() {
        let excl = exclusions(&[(150, 250)]);
        let input = "name\tchr\tstart\tend\tcount\tsum\tmin\tmax\tmean\tmedian\tstd\n\
                     T1\tchr1\t100\t200\t1\t1\t0.1\t0.1\t0.1\t0.1\tNaN\n\
                     T2\tchr1\t300\t400\t1\t2\t0.2\t0.2\t0.2\t0.2\tNaN\n";

        let mut out: Vec<u8> = Vec::new();
        let report = filter_stream(input.as_bytes(), &excl, &mut out).unwrap();

        assert_eq!(report, FilterReport { kept: 1, dropped: 1 });
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("name\t"));
        assert!(out.contains("T2\tchr1\t300\t400"));
        assert!(!out.contains("T1\tchr1\t100\t200"));
    }

    #[rstest]
    fn test_filter_stream_rejects_malformed_row() {
        let excl = exclusions(&[]);
        let input = "T1\tchr1\tnot_a_number\t200\n";
        let mut out: Vec<u8> = Vec::new();

        assert!(filter_stream(input.as_bytes(), &excl, &mut out).is_err());
    }
}
