// ── inversemodifiedfollowing.rs ──────────────────────────────────────────────
//
// Start-date rule of compounded averages defined by their end date (SARON).
//
// A term window [start, end] is published on its end date, so the start date is
// only defined implicitly: it is the business day whose Modified Following
// `start + term` reproduces the end date. Several start dates can map onto the
// same end date (month ends, weekends), hence the search and the tie-break.

use chrono::{Datelike, Days, NaiveDate};
use log::{trace, warn};

use crate::error::{CompoundingError, Result};
use crate::time::businessdayadjuster::{BusinessDayConvention, DateAdjuster};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::period::Period;

/// Calendar days searched on each side of the proposed start date.
const SEARCH_RADIUS: Days = Days::new(4);

/// Recovers a start date from a known maturity and term.
///
/// Bound to one `(maturity, term)` pair; build a new one for every end date.
///
/// ```
/// use chrono::NaiveDate;
/// use rfrcompounding::interestrate::inversemodifiedfollowing::InverseModifiedFollowing;
/// use rfrcompounding::time::calendar::simplecalendar::SimpleCalendar;
/// use rfrcompounding::time::period::Period;
/// use rfrcompounding::time::termdate::make_effective;
///
/// let calendar = SimpleCalendar::weekends_only();
/// let maturity = NaiveDate::from_ymd_opt(2018, 10, 8).unwrap();
/// let term = Period::months(1);
/// let convention = InverseModifiedFollowing::new(maturity, term);
///
/// // 2018-09-06 and 2018-09-07 both roll onto 2018-10-08, the earlier one wins
/// let effective = make_effective(maturity, term, &convention, &calendar).unwrap();
/// assert_eq!(effective, NaiveDate::from_ymd_opt(2018, 9, 6).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InverseModifiedFollowing {
    maturity: NaiveDate,
    term: Period
}

impl InverseModifiedFollowing {
    pub fn new(maturity: NaiveDate, term: Period) -> InverseModifiedFollowing {
        InverseModifiedFollowing { maturity, term }
    }

    pub fn maturity(&self) -> NaiveDate {
        self.maturity
    }

    pub fn term(&self) -> Period {
        self.term
    }

    /// Business days within four calendar days of `candidate`, ascending.
    fn business_days_around(&self, candidate: NaiveDate, calendar: &dyn HolidayCalendar) -> Vec<NaiveDate> {
        let mut business_days = Vec::new();
        let mut d = candidate - SEARCH_RADIUS;
        let last = candidate + SEARCH_RADIUS;
        while d <= last {
            if calendar.is_business_day(d) {
                business_days.push(d);
            }
            d = d + Days::new(1);
        }
        business_days
    }

    #[inline]
    fn rolls_onto_maturity(&self, d: NaiveDate, calendar: &dyn HolidayCalendar) -> bool {
        BusinessDayConvention::ModifiedFollowing.adjust(d + self.term, calendar) == self.maturity
    }

    /// Business days near `candidate` whose Modified Following maturity is ours,
    /// in ascending order.
    pub fn start_dates(&self, candidate: NaiveDate, calendar: &dyn HolidayCalendar) -> Vec<NaiveDate> {
        self.business_days_around(candidate, calendar)
            .into_iter()
            .filter(|&d| self.rolls_onto_maturity(d, calendar))
            .collect()
    }
}

/// Middle start date; the earlier of the two middle ones for an even count.
fn middle(start_dates: &[NaiveDate]) -> Option<NaiveDate> {
    if start_dates.is_empty() {
        None
    } else if start_dates.len() % 2 != 0 {
        Some(start_dates[start_dates.len() / 2])
    } else {
        Some(start_dates[start_dates.len() / 2 - 1])
    }
}

impl DateAdjuster for InverseModifiedFollowing {
    /// `candidate` is the unadjusted `maturity - term`.
    ///
    /// 1. A maturity on the last business day of its month starts on the last
    ///    business day of the candidate's month.
    /// 2. A unique start date is used as is; with several, the middle one (or
    ///    the earlier of the two middle ones).
    /// 3. Without any, the candidate is adjusted Modified Preceding.
    ///
    /// A search window without a single business day means the calendar data
    /// is broken and fails with `ResolverExhausted`.
    fn adjust(&self, candidate: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate> {
        if calendar.is_end_of_month(self.maturity) {
            return Ok(calendar.last_business_day_of_month(candidate.year(), candidate.month()));
        }

        let business_days = self.business_days_around(candidate, calendar);
        if business_days.is_empty() {
            return Err(CompoundingError::ResolverExhausted { maturity: self.maturity, candidate });
        }

        let start_dates: Vec<NaiveDate> = business_days
            .into_iter()
            .filter(|&d| self.rolls_onto_maturity(d, calendar))
            .collect();
        trace!("start dates for {} ({}): {:?}", self.maturity, self.term, start_dates);

        match middle(&start_dates) {
            Some(d) => Ok(d),
            None => {
                warn!(
                    "no start date rolls onto {} over {}, adjusting {} modified preceding",
                    self.maturity, self.term, candidate
                );
                Ok(BusinessDayConvention::ModifiedPreceding.adjust(candidate, calendar))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::calendar::simplecalendar::SimpleCalendar;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_middle() {
        let dates = [ymd(2018, 3, 21), ymd(2018, 3, 22), ymd(2018, 3, 23)];
        assert_eq!(middle(&dates), Some(ymd(2018, 3, 22)));
        assert_eq!(middle(&dates[..2]), Some(ymd(2018, 3, 21)));
        assert_eq!(middle(&dates[..1]), Some(ymd(2018, 3, 21)));
        assert_eq!(middle(&[]), None);

        let four = [ymd(2018, 1, 1), ymd(2018, 1, 2), ymd(2018, 1, 3), ymd(2018, 1, 4)];
        assert_eq!(middle(&four), Some(ymd(2018, 1, 2)));
    }

    #[test]
    fn test_start_dates_are_ascending() {
        let calendar = SimpleCalendar::weekends_only();
        let convention = InverseModifiedFollowing::new(ymd(2018, 10, 8), Period::months(1));
        assert_eq!(
            convention.start_dates(ymd(2018, 9, 8), &calendar),
            vec![ymd(2018, 9, 6), ymd(2018, 9, 7)]
        );
    }

    #[test]
    fn test_end_of_month_maturity_forces_end_of_month_start() {
        let calendar = SimpleCalendar::weekends_only();
        // 2022-09-30 is a Friday, 2022-08-31 a Wednesday
        let convention = InverseModifiedFollowing::new(ymd(2022, 9, 30), Period::months(1));
        assert_eq!(convention.adjust(ymd(2022, 8, 30), &calendar).unwrap(), ymd(2022, 8, 31));
    }

    #[test]
    fn test_fallback_to_modified_preceding() {
        let calendar = SimpleCalendar::weekends_only();
        // no business day within four days of 2019-11-10 rolls onto 2019-12-10
        let convention = InverseModifiedFollowing::new(ymd(2019, 12, 10), Period::months(1));
        assert!(convention.start_dates(ymd(2019, 11, 10), &calendar).is_empty());
        assert_eq!(convention.adjust(ymd(2019, 11, 10), &calendar).unwrap(), ymd(2019, 11, 8));
    }

    #[test]
    fn test_calendar_without_business_days_is_exhausted() {
        let closed = SimpleCalendar::new(
            &[
                chrono::Weekday::Mon, chrono::Weekday::Tue, chrono::Weekday::Wed,
                chrono::Weekday::Thu, chrono::Weekday::Fri, chrono::Weekday::Sat,
                chrono::Weekday::Sun
            ],
            Vec::new(),
            Vec::new(),
            vec![ymd(2018, 6, 15), ymd(2018, 6, 29)]
        );
        let convention = InverseModifiedFollowing::new(ymd(2018, 6, 15), Period::months(1));
        assert_eq!(
            convention.adjust(ymd(2018, 5, 15), &closed).unwrap_err(),
            CompoundingError::ResolverExhausted { maturity: ymd(2018, 6, 15), candidate: ymd(2018, 5, 15) }
        );
    }
}
