use chrono::NaiveDate;

use crate::error::{CompoundingError, Result};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::termdate::make_overnight_maturity;

// ─────────────────────────────────────────────────────────────────────────────
// CompoundingPeriod
// ─────────────────────────────────────────────────────────────────────────────

/// One overnight accrual `[effective, maturity]` and the reset date whose
/// fixing applies to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundingPeriod {
    period: RangeOfDates,
    fixing_date: NaiveDate
}

impl CompoundingPeriod {
    pub fn new(period: RangeOfDates, fixing_date: NaiveDate) -> CompoundingPeriod {
        CompoundingPeriod { period, fixing_date }
    }

    pub fn period(&self) -> &RangeOfDates {
        &self.period
    }

    pub fn effective(&self) -> NaiveDate {
        self.period.from()
    }

    pub fn maturity(&self) -> NaiveDate {
        self.period.until()
    }

    pub fn fixing_date(&self) -> NaiveDate {
        self.fixing_date
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CompoundingSchedule
// ─────────────────────────────────────────────────────────────────────────────

/// Contiguous overnight periods covering a whole coupon period.
///
/// Never empty, and `periods[i].maturity() == periods[i + 1].effective()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundingSchedule {
    periods: Vec<CompoundingPeriod>
}

impl CompoundingSchedule {
    pub fn new(periods: Vec<CompoundingPeriod>) -> Result<CompoundingSchedule> {
        if periods.is_empty() {
            return Err(CompoundingError::EmptyInput("compounding schedule has no period"));
        }
        Ok(CompoundingSchedule { periods })
    }

    pub fn periods(&self) -> &[CompoundingPeriod] {
        &self.periods
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// First effective date to last maturity.
    pub fn full_period(&self) -> Result<RangeOfDates> {
        let first = self.periods.first()
            .ok_or(CompoundingError::EmptyInput("compounding schedule has no period"))?;
        let last = self.periods.last()
            .ok_or(CompoundingError::EmptyInput("compounding schedule has no period"))?;
        RangeOfDates::new(first.effective(), last.maturity())
    }
}

/// Splits `coupon_period` into overnight periods of the publication calendar,
/// each fixing on its own effective date.
///
/// A coupon period of a single day has nothing to compound and is rejected.
pub fn make_compounding_schedule(
    coupon_period: &RangeOfDates,
    publication: &dyn HolidayCalendar
) -> Result<CompoundingSchedule> {
    if coupon_period.from() == coupon_period.until() {
        return Err(CompoundingError::EmptyInput("coupon period starts on its maturity"));
    }

    let mut periods = Vec::new();
    let mut d = coupon_period.from();
    while d < coupon_period.until() {
        let maturity = make_overnight_maturity(d, publication);
        periods.push(CompoundingPeriod::new(RangeOfDates::new(d, maturity)?, d));
        d = maturity;
    }
    CompoundingSchedule::new(periods)
}
