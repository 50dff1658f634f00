use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::error::{CompoundingError, Result};
use crate::series::timeseries::TimeSeries;
use crate::time::daycounter::daycounter::DayCounter;
use crate::time::rangeofdates::RangeOfDates;

/// Published overnight fixings of one benchmark, stored in percent.
///
/// The day counter is shared with whoever built the series; it is the
/// convention under which the fixings accrue.
#[derive(Debug, Clone)]
pub struct Resets {
    ts: TimeSeries<f64>,
    day_counter: Arc<dyn DayCounter>
}

impl Resets {
    pub fn new(ts: TimeSeries<f64>, day_counter: Arc<dyn DayCounter>) -> Resets {
        Resets { ts, day_counter }
    }

    /// Builds the series from `(date, percentage)` pairs in any order.
    ///
    /// The range runs from the earliest to the latest observation; a later
    /// duplicate of a date overwrites an earlier one.
    pub fn from_observations(
        observations: Vec<(NaiveDate, f64)>,
        day_counter: Arc<dyn DayCounter>
    ) -> Result<Resets> {
        let from = observations.iter().map(|(d, _)| *d).min()
            .ok_or(CompoundingError::EmptyInput("no reset observations"))?;
        let until = observations.iter().map(|(d, _)| *d).max()
            .ok_or(CompoundingError::EmptyInput("no reset observations"))?;

        let mut ts = TimeSeries::new(RangeOfDates::new(from, until)?);
        for (d, percentage) in observations {
            ts.set(d, percentage)?;
        }
        Ok(Resets::new(ts, day_counter))
    }

    pub fn time_series(&self) -> &TimeSeries<f64> {
        &self.ts
    }

    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    /// The fixing published for `d`, as a decimal (`1.80` percent is `0.018`).
    pub fn value(&self, d: NaiveDate) -> Result<f64> {
        self.ts.get(d)?
            .map(|percentage| percentage / 100.0)
            .ok_or(CompoundingError::MissingReset(d))
    }

    /// Latest date of the range that holds a fixing.
    pub fn last_reset_date(&self) -> Result<NaiveDate> {
        let range = self.ts.range();
        let mut d = range.until();
        loop {
            if self.ts.get(d)?.is_some() {
                return Ok(d);
            }
            if d == range.from() {
                return Err(CompoundingError::EmptyInput("reset series has no fixing"));
            }
            d = d - Days::new(1);
        }
    }
}
