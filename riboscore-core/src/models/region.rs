use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RecordError;

///
/// Region struct, a half-open genomic interval [start, end)
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Region {
    pub chr: String,
    pub start: u32,
    pub end: u32,
}

impl Region {
    ///
    /// Get length of the region
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start
    }

    ///
    /// Get file string of Region
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}", self.chr, self.start, self.end)
    }
}

impl FromStr for Region {
    type Err = RecordError;

    /// Parse a tab-separated `chr  start  end` record. Columns beyond the
    /// third are ignored, so plain BED files work as exclusion lists.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split('\t');

        let chr = fields
            .next()
            .ok_or_else(|| RecordError::RecordParse(s.to_string()))?;
        let start = fields
            .next()
            .and_then(|f| f.parse::<u32>().ok())
            .ok_or_else(|| RecordError::RecordParse(s.to_string()))?;
        let end = fields
            .next()
            .and_then(|f| f.parse::<u32>().ok())
            .ok_or_else(|| RecordError::RecordParse(s.to_string()))?;

        Ok(Region {
            chr: chr.to_string(),
            start,
            end,
        })
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parse_region() {
        let region: Region = "chr1\t100\t200".parse().unwrap();
        assert_eq!(region.chr, "chr1");
        assert_eq!(region.start, 100);
        assert_eq!(region.end, 200);
        assert_eq!(region.width(), 100);
    }

    #[rstest]
    fn test_parse_region_extra_columns() {
        let region: Region = "chr2\t5\t50\tname\t0.3".parse().unwrap();
        assert_eq!(region.chr, "chr2");
        assert_eq!(region.width(), 45);
    }

    #[rstest]
    #[case("chr1\t100")]
    #[case("chr1\tfoo\t200")]
    fn test_parse_region_invalid(#[case] line: &str) {
        assert!(line.parse::<Region>().is_err());
    }
}
