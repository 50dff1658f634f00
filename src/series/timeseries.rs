use chrono::NaiveDate;

use crate::error::{CompoundingError, Result};
use crate::time::rangeofdates::RangeOfDates;

/// Daily observations over a fixed inclusive range of dates.
///
/// Storage is dense: one `Option<T>` slot per calendar day, looked up by the
/// day offset from the start of the range. The range never changes after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries<T> {
    range: RangeOfDates,
    observations: Vec<Option<T>>
}

impl<T> TimeSeries<T> {
    /// A series with every slot empty.
    pub fn new(range: RangeOfDates) -> TimeSeries<T> {
        let mut observations = Vec::with_capacity(range.len());
        observations.resize_with(range.len(), || None);
        TimeSeries { range, observations }
    }

    pub fn range(&self) -> &RangeOfDates {
        &self.range
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// True when no slot holds a value.
    pub fn is_empty(&self) -> bool {
        self.observations.iter().all(Option::is_none)
    }

    fn index(&self, d: NaiveDate) -> Result<usize> {
        self.range.offset(d).ok_or(CompoundingError::DateOutOfRange {
            date: d,
            from: self.range.from(),
            until: self.range.until()
        })
    }

    pub fn get(&self, d: NaiveDate) -> Result<Option<&T>> {
        let i = self.index(d)?;
        Ok(self.observations[i].as_ref())
    }

    pub fn get_mut(&mut self, d: NaiveDate) -> Result<Option<&mut T>> {
        let i = self.index(d)?;
        Ok(self.observations[i].as_mut())
    }

    /// Stores `value` at `d`, returning the value it replaced.
    pub fn set(&mut self, d: NaiveDate, value: T) -> Result<Option<T>> {
        let i = self.index(d)?;
        Ok(self.observations[i].replace(value))
    }

    pub fn clear(&mut self, d: NaiveDate) -> Result<Option<T>> {
        let i = self.index(d)?;
        Ok(self.observations[i].take())
    }

    /// Every day of the range with its slot.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<&T>)> + '_ {
        self.range.iter().zip(self.observations.iter().map(Option::as_ref))
    }

    /// Only the days that hold a value.
    pub fn observations(&self) -> impl Iterator<Item = (NaiveDate, &T)> + '_ {
        self.iter().filter_map(|(d, o)| o.map(|v| (d, v)))
    }
}
