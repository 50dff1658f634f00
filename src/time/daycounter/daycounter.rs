use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use crate::time::rangeofdates::RangeOfDates;

/// Converts a date interval into a year fraction.
pub trait DayCounter: Send + Sync + fmt::Debug {
    fn year_fraction(&self, d1: NaiveDate, d2: NaiveDate) -> f64;

    fn fraction(&self, range: &RangeOfDates) -> f64 {
        self.year_fraction(range.from(), range.until())
    }
}

/// Actual day count over a constant dominator (Actual/360, Actual/365 Fixed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActualDayCounter {
    dominator_value: f64
}

impl ActualDayCounter {
    pub fn new(dominator_value: f64) -> ActualDayCounter {
        ActualDayCounter { dominator_value }
    }

    pub fn actual_360() -> ActualDayCounter {
        ActualDayCounter::new(360.0)
    }

    pub fn actual_365_fixed() -> ActualDayCounter {
        ActualDayCounter::new(365.0)
    }
}

impl DayCounter for ActualDayCounter {
    #[inline]
    fn year_fraction(&self, d1: NaiveDate, d2: NaiveDate) -> f64 {
        (d2 - d1).num_days() as f64 / self.dominator_value
    }
}

/// Day counts a benchmark definition may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayCounterType {
    Actual360,
    Actual365Fixed
}

impl DayCounterType {
    pub fn generate(&self) -> Arc<dyn DayCounter> {
        match self {
            DayCounterType::Actual360 => Arc::new(ActualDayCounter::actual_360()),
            DayCounterType::Actual365Fixed => Arc::new(ActualDayCounter::actual_365_fixed())
        }
    }
}
