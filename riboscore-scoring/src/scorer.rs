use rayon::prelude::*;

use riboscore_core::models::{QueryRegion, RegionScore};
use riboscore_track::SignalTrack;

use crate::aggregate::aggregate;

/// Minimum region length, in coordinate units, for a region to be scored.
/// Regions with `end - start <= cutoff` are dropped from the output entirely.
pub const DEFAULT_CUTOFF: u32 = 50;

/// Outcome of a scoring run: one record per surviving region, plus counts of
/// the regions the cutoff and validity policies removed.
#[derive(Debug)]
pub struct ScoringReport {
    pub scores: Vec<RegionScore>,
    /// Regions dropped by the minimum-length cutoff. A designed omission,
    /// not an error.
    pub skipped_short: usize,
    /// Regions with `end <= start`, skipped and counted.
    pub skipped_invalid: usize,
}

enum RegionOutcome {
    Scored(RegionScore),
    Short,
    Invalid,
}

/// Score every query region against the signal track.
///
/// Each region's aggregation is independent, so the work is spread across the
/// rayon pool; the track is only ever read. Results come back in input order.
/// The cutoff check runs strictly before any store lookup, and zero-coverage
/// regions still produce a (zero-valued) record - the only regions missing
/// from the output are those the cutoff or validity policies removed.
pub fn score_regions(
    regions: &[QueryRegion],
    track: &dyn SignalTrack,
    cutoff: u32,
) -> ScoringReport {
    let outcomes: Vec<RegionOutcome> = regions
        .par_iter()
        .map(|region| {
            if region.end <= region.start {
                return RegionOutcome::Invalid;
            }
            if region.end - region.start <= cutoff {
                return RegionOutcome::Short;
            }

            let (sum, score) = aggregate(track, &region.chr, region.start, region.end);
            RegionOutcome::Scored(RegionScore {
                name: region.name.clone(),
                chr: region.chr.clone(),
                start: region.start,
                end: region.end,
                sum,
                score,
            })
        })
        .collect();

    let mut report = ScoringReport {
        scores: Vec::with_capacity(outcomes.len()),
        skipped_short: 0,
        skipped_invalid: 0,
    };

    for outcome in outcomes {
        match outcome {
            RegionOutcome::Scored(score) => report.scores.push(score),
            RegionOutcome::Short => report.skipped_short += 1,
            RegionOutcome::Invalid => report.skipped_invalid += 1,
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use riboscore_core::models::Interval;
    use riboscore_track::SparseTrack;
    use rstest::*;

    fn region(name: &str, chr: &str, start: u32, end: u32) -> QueryRegion {
        QueryRegion {
            name: name.to_string(),
            chr: chr.to_string(),
            start,
            end,
        }
    }

    #[fixture]
    fn track() -> SparseTrack {
        SparseTrack::from_intervals(vec![
            (
                "chr1".to_string(),
                Interval {
                    start: 110,
                    end: 120,
                    val: 4.0,
                },
            ),
            (
                "chr1".to_string(),
                Interval {
                    start: 500,
                    end: 510,
                    val: 6.0,
                },
            ),
        ])
    }

    #[rstest]
    fn test_scores_in_input_order(track: SparseTrack) {
        let regions = vec![
            region("T2", "chr1", 400, 600),
            region("T1", "chr1", 100, 200),
        ];
        let report = score_regions(&regions, &track, DEFAULT_CUTOFF);

        assert_eq!(report.scores.len(), 2);
        assert_eq!(report.scores[0].name, "T2");
        assert_eq!(report.scores[0].sum, 6.0);
        assert_eq!(report.scores[1].name, "T1");
        assert_eq!(report.scores[1].sum, 4.0);
        assert_eq!(report.scores[1].score, 0.04);
    }

    #[rstest]
    fn test_short_region_excluded_entirely(track: SparseTrack) {
        // width 40 <= cutoff 50: dropped, not zero-scored
        let regions = vec![region("T1", "chr1", 100, 140)];
        let report = score_regions(&regions, &track, DEFAULT_CUTOFF);

        assert!(report.scores.is_empty());
        assert_eq!(report.skipped_short, 1);
    }

    #[rstest]
    fn test_width_equal_to_cutoff_excluded(track: SparseTrack) {
        let regions = vec![region("T1", "chr1", 100, 150)];
        let report = score_regions(&regions, &track, 50);

        assert!(report.scores.is_empty());
        assert_eq!(report.skipped_short, 1);
    }

    #[rstest]
    fn test_invalid_region_skipped_and_counted(track: SparseTrack) {
        let regions = vec![
            region("bad", "chr1", 200, 200),
            region("worse", "chr1", 300, 200),
            region("T1", "chr1", 100, 200),
        ];
        let report = score_regions(&regions, &track, DEFAULT_CUTOFF);

        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.skipped_invalid, 2);
    }

    #[rstest]
    fn test_zero_coverage_region_kept(track: SparseTrack) {
        let regions = vec![region("quiet", "chr1", 1000, 2000)];
        let report = score_regions(&regions, &track, DEFAULT_CUTOFF);

        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.scores[0].sum, 0.0);
        assert_eq!(report.scores[0].score, 0.0);
    }

    #[rstest]
    fn test_missing_chromosome_scores_zero(track: SparseTrack) {
        let regions = vec![region("T1", "chr22", 100, 200)];
        let report = score_regions(&regions, &track, DEFAULT_CUTOFF);

        assert_eq!(report.scores.len(), 1);
        assert_eq!(report.scores[0].sum, 0.0);
        assert_eq!(report.skipped_invalid, 0);
    }
}
