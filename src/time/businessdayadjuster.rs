use chrono::{
    Datelike,
    NaiveDate
};
use serde::{
    Deserialize,
    Serialize
};

use crate::error::Result;
use crate::time::calendar::holidaycalendar::HolidayCalendar;

// ─────────────────────────────────────────────────────────────────────────────
// Adjusters: only called on non-business days
// ─────────────────────────────────────────────────────────────────────────────

fn unadjust(d: NaiveDate, _calendar: &dyn HolidayCalendar) -> NaiveDate {
    d
}

fn following(d: NaiveDate, calendar: &dyn HolidayCalendar) -> NaiveDate {
    calendar.next_business_day(d)
}

fn preceding(d: NaiveDate, calendar: &dyn HolidayCalendar) -> NaiveDate {
    calendar.previous_business_day(d)
}

fn modified_following(d: NaiveDate, calendar: &dyn HolidayCalendar) -> NaiveDate {
    let eom = calendar.last_business_day_of_month(d.year(), d.month());
    if d > eom {
        eom
    } else {
        calendar.next_business_day(d)
    }
}

fn modified_preceding(d: NaiveDate, calendar: &dyn HolidayCalendar) -> NaiveDate {
    let fom = calendar.first_business_day_of_month(d.year(), d.month());
    if d < fom {
        fom
    } else {
        calendar.previous_business_day(d)
    }
}

/// A rule mapping any date onto a business day.
///
/// Implemented by the standard [`BusinessDayConvention`]s and by rules that
/// carry their own state, such as
/// [`InverseModifiedFollowing`](crate::interestrate::inversemodifiedfollowing::InverseModifiedFollowing).
pub trait DateAdjuster {
    fn adjust(&self, d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate>;
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum BusinessDayConvention {
    Unadjusted,
    Following,
    Preceding,
    ModifiedFollowing,
    ModifiedPreceding
}

impl BusinessDayConvention {
    fn adjuster(&self) -> fn(NaiveDate, &dyn HolidayCalendar) -> NaiveDate {
        match self {
            BusinessDayConvention::Unadjusted => unadjust,
            BusinessDayConvention::Following => following,
            BusinessDayConvention::Preceding => preceding,
            BusinessDayConvention::ModifiedFollowing => modified_following,
            BusinessDayConvention::ModifiedPreceding => modified_preceding
        }
    }

    /// Returns `d` when it is a business day, the adjusted date otherwise.
    pub fn adjust(&self, d: NaiveDate, calendar: &dyn HolidayCalendar) -> NaiveDate {
        if calendar.is_holiday(d) {
            (self.adjuster())(d, calendar)
        } else {
            d
        }
    }
}

impl DateAdjuster for BusinessDayConvention {
    fn adjust(&self, d: NaiveDate, calendar: &dyn HolidayCalendar) -> Result<NaiveDate> {
        Ok(BusinessDayConvention::adjust(self, d, calendar))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::calendar::simplecalendar::SimpleCalendar;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn calendar() -> SimpleCalendar {
        SimpleCalendar::new(
            &[Weekday::Sat, Weekday::Sun],
            Vec::new(),
            vec![ymd(2023, 5, 29)],
            Vec::new()
        )
    }

    #[test]
    fn test_business_days_are_left_alone() {
        let calendar = calendar();
        let d = ymd(2023, 5, 26);
        for convention in [
            BusinessDayConvention::Unadjusted,
            BusinessDayConvention::Following,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::ModifiedPreceding,
        ] {
            assert_eq!(convention.adjust(d, &calendar), d);
        }
    }

    #[test]
    fn test_following_and_preceding() {
        let calendar = calendar();
        assert_eq!(BusinessDayConvention::Following.adjust(ymd(2023, 5, 27), &calendar), ymd(2023, 5, 30));
        assert_eq!(BusinessDayConvention::Preceding.adjust(ymd(2023, 5, 29), &calendar), ymd(2023, 5, 26));
        assert_eq!(BusinessDayConvention::Unadjusted.adjust(ymd(2023, 5, 27), &calendar), ymd(2023, 5, 27));
    }

    #[test]
    fn test_modified_conventions_stay_in_month() {
        let calendar = calendar();
        // 2022-07-31 is a Sunday
        assert_eq!(BusinessDayConvention::ModifiedFollowing.adjust(ymd(2022, 7, 31), &calendar), ymd(2022, 7, 29));
        assert_eq!(BusinessDayConvention::Following.adjust(ymd(2022, 7, 31), &calendar), ymd(2022, 8, 1));
        // 2022-05-01 is a Sunday
        assert_eq!(BusinessDayConvention::ModifiedPreceding.adjust(ymd(2022, 5, 1), &calendar), ymd(2022, 5, 2));
        assert_eq!(BusinessDayConvention::Preceding.adjust(ymd(2022, 5, 1), &calendar), ymd(2022, 4, 29));
    }

    #[test]
    fn test_date_adjuster_is_infallible_for_standard_conventions() {
        let calendar = calendar();
        let adjuster: &dyn DateAdjuster = &BusinessDayConvention::ModifiedFollowing;
        assert_eq!(adjuster.adjust(ymd(2023, 5, 27), &calendar).unwrap(), ymd(2023, 5, 30));
    }
}
