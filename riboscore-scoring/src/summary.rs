use std::collections::HashMap;

use riboscore_core::models::{RegionScore, TranscriptSummary};

/// Arithmetic mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Standard median: the middle value, or the mean of the two middle values
/// for even-sized input.
fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len().is_multiple_of(2) {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (N-1 denominator). NaN for a single value,
/// matching the statistical-library default the upstream pipeline relied on;
/// the undefined case stays distinguishable instead of collapsing to zero.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    let n = values.len() as f64;
    let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    (ss / (n - 1.0)).sqrt()
}

/// Roll per-region scores up into one summary per distinct transcript name.
///
/// Grouping is exact string equality on `name`. Output is ordered ascending
/// by total `sum` - downstream consumers read lowest-signal transcripts
/// first - with ties left in first-seen order.
pub fn summarize(scores: &[RegionScore]) -> Vec<TranscriptSummary> {
    let mut group_index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&RegionScore>> = Vec::new();

    for score in scores {
        match group_index.get(score.name.as_str()) {
            Some(&idx) => groups[idx].push(score),
            None => {
                group_index.insert(score.name.as_str(), groups.len());
                groups.push(vec![score]);
            }
        }
    }

    let mut summaries: Vec<TranscriptSummary> = groups
        .into_iter()
        .map(|group| {
            let scores: Vec<f64> = group.iter().map(|s| s.score).collect();
            let group_mean = mean(&scores);

            TranscriptSummary {
                name: group[0].name.clone(),
                // constituents of one transcript are assumed same-chromosome
                chr: group[0].chr.clone(),
                start: group.iter().map(|s| s.start).min().unwrap_or(0),
                end: group.iter().map(|s| s.end).max().unwrap_or(0),
                count: group.len(),
                sum: group.iter().map(|s| s.sum).sum(),
                min: scores.iter().copied().fold(f64::INFINITY, f64::min),
                max: scores.iter().copied().fold(f64::NEG_INFINITY, f64::max),
                mean: group_mean,
                median: median(&scores),
                std: sample_std(&scores, group_mean),
            }
        })
        .collect();

    // stable sort: ties keep first-seen group order
    summaries.sort_by(|a, b| a.sum.total_cmp(&b.sum));

    summaries
}
