//! Signal track stores for riboscore.
//!
//! A signal track is a genome-wide set of measured intensity values, held in
//! one of two backends:
//!
//! - [`SparseTrack`] - tab-separated scored intervals (`chr start end value`,
//!   BED-like). Lookup uses **containment** semantics: a signal interval
//!   contributes to a query only when it lies fully inside the query range.
//! - [`DenseTrack`] - a BigWig file, loaded eagerly through
//!   [`bigtools`] into per-chromosome value intervals. Lookup sums per-base
//!   values clipped to the query range.
//!
//! Both backends are immutable after construction and implement
//! [`SignalTrack`], which is `Send + Sync` so one store can be shared by
//! reference across scoring workers. A chromosome absent from the track never
//! errors; it contributes a sum of zero.
pub mod dense;
pub mod sparse;
pub mod traits;

// re-exports
pub use self::dense::DenseTrack;
pub use self::sparse::SparseTrack;
pub use self::traits::SignalTrack;

use std::path::Path;
use std::str::FromStr;

use bigtools::BigWigRead;

use riboscore_core::errors::TrackError;
use riboscore_core::utils::get_dynamic_reader;

/// The signal track backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackFormat {
    /// Tab-separated scored intervals.
    Sparse,
    /// BigWig positional values.
    Dense,
}

impl FromStr for TrackFormat {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sparse" | "bed" => Ok(TrackFormat::Sparse),
            "dense" | "bigwig" | "bw" => Ok(TrackFormat::Dense),
            _ => Err(TrackError::InvalidFormat(format!(
                "unknown track format: {}",
                s
            ))),
        }
    }
}

/// Detect the format of a signal file by its signature.
///
/// A file that opens as a BigWig is dense; otherwise the first data line must
/// parse as a scored interval, or the whole input is rejected as
/// [`TrackError::InvalidFormat`].
pub fn detect_format(path: &Path) -> Result<TrackFormat, TrackError> {
    if BigWigRead::open_file(path).is_ok() {
        return Ok(TrackFormat::Dense);
    }

    let reader = get_dynamic_reader(path)
        .map_err(|e| TrackError::InvalidFormat(format!("{}: {}", path.display(), e)))?;

    use std::io::BufRead;
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        return match sparse::parse_signal_line(&line) {
            Ok(_) => Ok(TrackFormat::Sparse),
            Err(_) => Err(TrackError::InvalidFormat(path.display().to_string())),
        };
    }

    Err(TrackError::InvalidFormat(path.display().to_string()))
}

/// Open a signal track, auto-detecting the backend when `format` is `None`.
pub fn load_track(
    path: &Path,
    format: Option<TrackFormat>,
) -> Result<Box<dyn SignalTrack>, TrackError> {
    let format = match format {
        Some(format) => format,
        None => detect_format(path)?,
    };

    match format {
        TrackFormat::Sparse => Ok(Box::new(SparseTrack::try_from(path)?)),
        TrackFormat::Dense => Ok(Box::new(DenseTrack::open(path)?)),
    }
}
