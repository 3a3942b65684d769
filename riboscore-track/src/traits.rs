/// A read-only store of genome-wide signal, queryable by coordinate range.
///
/// Implementations are immutable after construction so a single store can be
/// shared by reference across scoring workers.
pub trait SignalTrack: Send + Sync {
    /// Total signal value attributable to `[start, end)` on `chr`.
    ///
    /// A chromosome absent from the track contributes `0.0`; absence is not
    /// an error.
    fn query_sum(&self, chr: &str, start: u32, end: u32) -> f64;

    /// Whether the track holds any signal for `chr`.
    fn has_chrom(&self, chr: &str) -> bool;
}
