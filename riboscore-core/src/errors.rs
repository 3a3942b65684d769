use thiserror::Error;

/// Errors raised while opening or parsing a signal track.
///
/// Only [`TrackError::InvalidFormat`] is fatal to a run; lookups against a
/// chromosome that is absent from the track are never errors and resolve to a
/// sum of zero at the store level.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("Signal file is neither a BigWig nor a scored BED track: {0}")]
    InvalidFormat(String),

    #[error("Error parsing signal interval: {0}")]
    IntervalParse(String),

    #[error("BigWig error: {0}")]
    BigWig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading region, score, or summary files.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Error parsing record: {0}")]
    RecordParse(String),

    #[error("Corrupted file. 0 records found in the file: {0}")]
    EmptyFile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
