use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::PricePoint;

/// Sorted, de-duplicated set of every day that produced a price row.
///
/// Built once from the fetched prices and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradingDateIndex {
    dates: Vec<NaiveDate>,
}

impl TradingDateIndex {
    /// Build the index from arbitrary (unsorted, repeated) dates.
    pub fn new<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let set: BTreeSet<NaiveDate> = dates.into_iter().collect();
        Self {
            dates: set.into_iter().collect(),
        }
    }

    /// Index of every date present in `points`, across all tickers.
    pub fn from_points<'a, I>(points: I) -> Self
    where
        I: IntoIterator<Item = &'a PricePoint>,
    {
        Self::new(points.into_iter().map(|p| p.date))
    }

    /// The trading days in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of distinct trading days.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether no trading day is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// First trading day on or after `day`, or `None` when `day` is past the last one.
    #[must_use]
    pub fn next_trading_day(&self, day: NaiveDate) -> Option<NaiveDate> {
        let idx = self.dates.partition_point(|d| *d < day);
        self.dates.get(idx).copied()
    }

    /// Straight scan with the same contract as [`Self::next_trading_day`].
    #[doc(hidden)]
    #[must_use]
    pub fn next_trading_day_linear(&self, day: NaiveDate) -> Option<NaiveDate> {
        self.dates.iter().copied().find(|d| *d >= day)
    }
}
