use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::errors::RecordError;
use crate::utils::{format_float, get_dynamic_reader};

/// Header row for transcript summary files.
pub const SUMMARY_HEADER: &str = "name\tchr\tstart\tend\tcount\tsum\tmin\tmax\tmean\tmedian\tstd";

///
/// TranscriptSummary struct, the per-transcript rollup of all region scores
/// sharing one name.
///
/// `start`/`end` span the transcript's full genomic extent (min start, max
/// end over its exons). The statistics `min`..`std` are over the per-region
/// `score` values; `sum` totals the per-region `sum` values. `std` is the
/// sample standard deviation and is NaN for single-exon transcripts; NaN is
/// preserved through file IO as the literal `NaN`.
///
#[derive(Debug, Clone)]
pub struct TranscriptSummary {
    pub name: String,
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub count: usize,
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub std: f64,
}

impl TranscriptSummary {
    ///
    /// Get file string of TranscriptSummary
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.name,
            self.chr,
            self.start,
            self.end,
            self.count,
            format_float(self.sum),
            format_float(self.min),
            format_float(self.max),
            format_float(self.mean),
            format_float(self.median),
            format_float(self.std),
        )
    }
}

impl FromStr for TranscriptSummary {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('\t').collect();
        if fields.len() < 11 {
            return Err(RecordError::RecordParse(s.to_string()));
        }

        let parse_err = || RecordError::RecordParse(s.to_string());

        Ok(TranscriptSummary {
            name: fields[0].to_string(),
            chr: fields[1].to_string(),
            start: fields[2].parse().map_err(|_| parse_err())?,
            end: fields[3].parse().map_err(|_| parse_err())?,
            count: fields[4].parse().map_err(|_| parse_err())?,
            sum: fields[5].parse().map_err(|_| parse_err())?,
            min: fields[6].parse().map_err(|_| parse_err())?,
            max: fields[7].parse().map_err(|_| parse_err())?,
            mean: fields[8].parse().map_err(|_| parse_err())?,
            median: fields[9].parse().map_err(|_| parse_err())?,
            std: fields[10].parse().map_err(|_| parse_err())?,
        })
    }
}

impl Display for TranscriptSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Read a transcript summary file (header row expected) back into memory.
///
pub fn read_transcript_summaries(path: &Path) -> Result<Vec<TranscriptSummary>, RecordError> {
    let reader = get_dynamic_reader(path)
        .map_err(|e| RecordError::RecordParse(format!("{}: {}", path.display(), e)))?;

    let mut summaries: Vec<TranscriptSummary> = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        if idx == 0 && line.starts_with("name\t") {
            continue;
        }
        summaries.push(line.parse()?);
    }

    if summaries.is_empty() {
        return Err(RecordError::EmptyFile(path.display().to_string()));
    }

    Ok(summaries)
}

///
/// Write transcript summaries to disk, header row first. The caller is
/// responsible for the output ordering contract (ascending by `sum`).
///
pub fn write_transcript_summaries<T: AsRef<Path>>(
    path: T,
    summaries: &[TranscriptSummary],
) -> std::io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    writeln!(writer, "{}", SUMMARY_HEADER)?;
    for summary in summaries {
        writeln!(writer, "{}", summary.as_string())?;
    }
    writer.flush()?;
    Ok(())
}
