use std::fmt::{self, Display};
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::errors::RecordError;
use crate::utils::{format_float, get_dynamic_reader};

///
/// RegionScore struct, the result of aggregating one query region against a
/// signal track.
///
/// Invariant: `score = sum / (end - start)`. A region with no overlapping
/// signal carries `sum = 0, score = 0`; zero coverage is a valid result and
/// is never dropped.
///
#[derive(Debug, Clone, PartialEq)]
pub struct RegionScore {
    pub name: String,
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub sum: f64,
    pub score: f64,
}

impl RegionScore {
    ///
    /// Get file string of RegionScore
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            self.name,
            self.chr,
            self.start,
            self.end,
            format_float(self.sum),
            format_float(self.score),
        )
    }
}

impl FromStr for RegionScore {
    type Err = RecordError;

    /// Parse a tab-separated `name  chr  start  end  sum  score` record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('\t').collect();
        if fields.len() < 6 {
            return Err(RecordError::RecordParse(s.to_string()));
        }

        let parse_err = || RecordError::RecordParse(s.to_string());

        Ok(RegionScore {
            name: fields[0].to_string(),
            chr: fields[1].to_string(),
            start: fields[2].parse().map_err(|_| parse_err())?,
            end: fields[3].parse().map_err(|_| parse_err())?,
            sum: fields[4].parse().map_err(|_| parse_err())?,
            score: fields[5].parse().map_err(|_| parse_err())?,
        })
    }
}

impl Display for RegionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Read a region scores file (`name  chr  start  end  sum  score`, no
/// header) back into memory.
///
pub fn read_region_scores(path: &Path) -> Result<Vec<RegionScore>, RecordError> {
    let reader = get_dynamic_reader(path)
        .map_err(|e| RecordError::RecordParse(format!("{}: {}", path.display(), e)))?;

    let mut scores: Vec<RegionScore> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        scores.push(line.parse()?);
    }

    if scores.is_empty() {
        return Err(RecordError::EmptyFile(path.display().to_string()));
    }

    Ok(scores)
}

///
/// Write region scores to disk as a headerless tab-separated file.
///
/// # Arguments
/// - path: the path to the file to dump to
pub fn write_region_scores<T: AsRef<Path>>(path: T, scores: &[RegionScore]) -> std::io::Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for score in scores {
        writeln!(writer, "{}", score.as_string())?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn example_scores() -> Vec<RegionScore> {
        vec![
            RegionScore {
                name: "T1".to_string(),
                chr: "chr1".to_string(),
                start: 100,
                end: 200,
                sum: 25.0,
                score: 0.25,
            },
            RegionScore {
                name: "T2".to_string(),
                chr: "chr2".to_string(),
                start: 0,
                end: 1000,
                sum: 0.0,
                score: 0.0,
            },
        ]
    }

    #[rstest]
    fn test_parse_region_score() {
        let score: RegionScore = "T1\tchr1\t100\t200\t25\t0.25".parse().unwrap();
        assert_eq!(score.name, "T1");
        assert_eq!(score.sum, 25.0);
        assert_eq!(score.score, 0.25);
    }

    #[rstest]
    fn test_parse_rejects_truncated_record() {
        assert!("T1\tchr1\t100\t200\t25".parse::<RegionScore>().is_err());
    }

    #[rstest]
    fn test_round_trip() {
        let scores = example_scores();

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("scores.tsv");
        write_region_scores(&path, &scores).unwrap();

        let read_back = read_region_scores(&path).unwrap();
        assert_eq!(read_back, scores);
    }
}
