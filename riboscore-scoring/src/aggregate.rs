use riboscore_track::SignalTrack;

/// Aggregate the signal contained in one region into a `(sum, score)` pair,
/// where `score = sum / (end - start)`.
///
/// Pure function of its inputs. The caller must have validated `end > start`;
/// the region scorer screens out degenerate regions before aggregation.
#[inline]
pub fn aggregate(track: &dyn SignalTrack, chr: &str, start: u32, end: u32) -> (f64, f64) {
    let sum = track.query_sum(chr, start, end);
    let score = sum / (end - start) as f64;
    (sum, score)
}
