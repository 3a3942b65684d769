use num_traits::{PrimInt, Unsigned, identities::zero};
use std::cmp::Ordering::{self};

/// Represent a range from [start, end)
/// Inclusive start, exclusive of end
///
/// The payload `T` only needs `Clone`, so float-valued signal intervals are
/// representable. Ordering and equality look at coordinates only.
#[derive(Debug, Clone)]
pub struct Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Clone + Send + Sync,
{
    pub start: I,
    pub end: I,
    pub val: T,
}

impl<I, T> Ord for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Clone + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Interval<I, T>) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl<I, T> Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Clone + Send + Sync,
{
    /// Compute the intersect between this interval and [start, end)
    #[inline]
    pub fn intersect(&self, start: I, end: I) -> I {
        std::cmp::min(self.end, end)
            .checked_sub(&std::cmp::max(self.start, start))
            .unwrap_or_else(zero::<I>)
    }

    /// Check if this interval lies fully inside [start, end)
    #[inline]
    pub fn contained_in(&self, start: I, end: I) -> bool {
        self.start >= start && self.end <= end
    }
}

impl<I, T> PartialOrd for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Clone + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I, T> Eq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Clone + Send + Sync,
{
}

impl<I, T> PartialEq for Interval<I, T>
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Clone + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Interval<I, T>) -> bool {
        self.start == other.start && self.end == other.end
    }
}
