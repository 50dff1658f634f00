use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};

use crate::time::utility::{clamped_date, days_of_month};

const ONE_DAY: Days = Days::new(1);

/// Business-day classification used by every date rule in the crate.
///
/// Only `is_holiday` and `get_holiday_set` are required; the navigation helpers
/// are derived from `is_holiday`. Weekends count as holidays.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    /// All non-business days of `year`, weekends included.
    fn get_holiday_set(&self, year: i32) -> BTreeSet<NaiveDate>;

    fn is_business_day(&self, d: NaiveDate) -> bool {
        !self.is_holiday(d)
    }

    fn shift_n_business_day(&self, horizon: NaiveDate, n: i32) -> NaiveDate {
        let shift_one_day: fn(NaiveDate) -> NaiveDate = if n >= 0 {
            |d: NaiveDate| d + ONE_DAY
        } else {
            |d: NaiveDate| d - ONE_DAY
        };

        let mut m = n.unsigned_abs();
        let mut d = horizon;
        while m > 0 {
            d = shift_one_day(d);
            m -= self.is_business_day(d) as u32;
        }
        d
    }

    /// First business day strictly after `d`.
    fn next_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, 1)
    }

    /// Last business day strictly before `d`.
    fn previous_business_day(&self, d: NaiveDate) -> NaiveDate {
        self.shift_n_business_day(d, -1)
    }

    fn last_business_day_of_month(&self, year: i32, month: u32) -> NaiveDate {
        let mut eom = clamped_date(year, month, days_of_month(year, month));
        while self.is_holiday(eom) {
            eom = eom - ONE_DAY;
        }
        eom
    }

    fn first_business_day_of_month(&self, year: i32, month: u32) -> NaiveDate {
        let mut fom = clamped_date(year, month, 1);
        while self.is_holiday(fom) {
            fom = fom + ONE_DAY;
        }
        fom
    }

    /// Whether `d` is the last business day of its month.
    fn is_end_of_month(&self, d: NaiveDate) -> bool {
        self.last_business_day_of_month(d.year(), d.month()) == d
    }
}
