use std::fmt::{self, Display};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::RecordError;
use crate::utils::get_dynamic_reader;

///
/// QueryRegion struct, one genomic range to be scored against a signal track.
///
/// `name` is a transcript or feature identifier and is NOT unique: the exons
/// of one transcript all carry the same name and get rolled up by the
/// transcript summarizer.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct QueryRegion {
    pub name: String,
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl QueryRegion {
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.name, self.chr, self.start, self.end)
    }
}

impl FromStr for QueryRegion {
    type Err = RecordError;

    /// Parse a tab-separated `name  chr  start  end` record.
    ///
    /// Degenerate coordinates (`end <= start`) are accepted here; the region
    /// scorer skips and counts them rather than failing the whole file.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split('\t').collect();
        if fields.len() < 4 {
            return Err(RecordError::RecordParse(s.to_string()));
        }

        let start = fields[2]
            .parse::<u32>()
            .map_err(|_| RecordError::RecordParse(s.to_string()))?;
        let end = fields[3]
            .parse::<u32>()
            .map_err(|_| RecordError::RecordParse(s.to_string()))?;

        Ok(QueryRegion {
            name: fields[0].to_string(),
            chr: fields[1].to_string(),
            start,
            end,
        })
    }
}

impl Display for QueryRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// QueryRegionSet struct, the in-memory representation of a query regions
/// file (`name  chr  start  end`, no header).
///
#[derive(Clone, Debug)]
pub struct QueryRegionSet {
    pub regions: Vec<QueryRegion>,
    pub path: Option<PathBuf>,
}

impl TryFrom<&Path> for QueryRegionSet {
    type Error = RecordError;

    ///
    /// Create a new [QueryRegionSet] from a tab-separated regions file.
    ///
    /// # Arguments:
    /// - value: path to regions file on disk (plain or gzip).
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| RecordError::RecordParse(format!("{}: {}", value.display(), e)))?;

        let mut regions: Vec<QueryRegion> = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            regions.push(line.parse()?);
        }

        if regions.is_empty() {
            return Err(RecordError::EmptyFile(value.display().to_string()));
        }

        Ok(QueryRegionSet {
            regions,
            path: Some(value.to_owned()),
        })
    }
}

impl TryFrom<&str> for QueryRegionSet {
    type Error = RecordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        QueryRegionSet::try_from(Path::new(value))
    }
}

impl From<Vec<QueryRegion>> for QueryRegionSet {
    fn from(regions: Vec<QueryRegion>) -> Self {
        QueryRegionSet {
            regions,
            path: None,
        }
    }
}

impl QueryRegionSet {
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl Display for QueryRegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QueryRegionSet with {} regions.", self.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_query_region() {
        let region: QueryRegion = "ENST0001\tchr1\t100\t200".parse().unwrap();
        assert_eq!(region.name, "ENST0001");
        assert_eq!(region.chr, "chr1");
        assert_eq!(region.width(), 100);
    }

    #[rstest]
    fn test_parse_degenerate_region_allowed() {
        let region: QueryRegion = "ENST0001\tchr1\t200\t200".parse().unwrap();
        assert_eq!(region.width(), 0);
    }

    #[rstest]
    fn test_parse_missing_column() {
        assert!("ENST0001\tchr1\t100".parse::<QueryRegion>().is_err());
    }

    #[rstest]
    fn test_open_from_path() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("regions.tsv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "ENST0001\tchr1\t100\t200").unwrap();
        writeln!(file, "ENST0001\tchr1\t300\t500").unwrap();
        writeln!(file, "ENST0002\tchr2\t10\t900").unwrap();

        let set = QueryRegionSet::try_from(path.as_path()).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.regions[2].name, "ENST0002");
    }

    #[rstest]
    fn test_open_empty_file_fails() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("empty.tsv");
        File::create(&path).unwrap();

        let result = QueryRegionSet::try_from(path.as_path());
        assert!(matches!(result, Err(RecordError::EmptyFile(_))));
    }
}
