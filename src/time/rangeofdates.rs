use chrono::{
    Days,
    NaiveDate
};

use crate::error::{CompoundingError, Result};

/// Inclusive `[from, until]` range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeOfDates {
    from: NaiveDate,
    until: NaiveDate
}

impl RangeOfDates {
    pub fn new(from: NaiveDate, until: NaiveDate) -> Result<RangeOfDates> {
        if from > until {
            Err(CompoundingError::InvalidDateRange { from, until })
        } else {
            Ok(RangeOfDates { from, until })
        }
    }

    pub fn from(&self) -> NaiveDate {
        self.from
    }

    pub fn until(&self) -> NaiveDate {
        self.until
    }

    /// Number of calendar days in the range, both ends included.
    pub fn len(&self) -> usize {
        ((self.until - self.from).num_days() + 1) as usize
    }

    /// Offset of `d` from `from`, or `None` outside of the range.
    #[inline]
    pub fn offset(&self, d: NaiveDate) -> Option<usize> {
        if self.contain(d) {
            Some((d - self.from).num_days() as usize)
        } else {
            None
        }
    }

    pub fn contain(&self, d: NaiveDate) -> bool {
        (d >= self.from) && (d <= self.until)
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
        }
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.range_of_dates.len() {
            let d = self.range_of_dates.from + Days::new(self.index as u64);
            self.index += 1;
            Some(d)
        } else {
            None
        }
    }
}
