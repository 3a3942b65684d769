pub mod interval;
pub mod query;
pub mod region;
pub mod score;
pub mod summary;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::query::{QueryRegion, QueryRegionSet};
pub use self::region::Region;
pub use self::score::RegionScore;
pub use self::summary::TranscriptSummary;
