use chrono::{Days, NaiveDate};

use crate::error::Result;
use crate::time::businessdayadjuster::{BusinessDayConvention, DateAdjuster};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::period::Period;

/// End of the overnight period that starts on `effective`: the next business
/// day of the publication calendar.
pub fn make_overnight_maturity(effective: NaiveDate, publication: &dyn HolidayCalendar) -> NaiveDate {
    BusinessDayConvention::Following.adjust(effective + Days::new(1), publication)
}

/// `effective + term`, adjusted.
///
/// Month and year terms clamp to the end of the month before adjusting; week
/// and day terms count calendar days.
pub fn make_maturity(
    effective: NaiveDate,
    term: Period,
    adjuster: &dyn DateAdjuster,
    publication: &dyn HolidayCalendar
) -> Result<NaiveDate> {
    adjuster.adjust(effective + term, publication)
}

/// `maturity - term`, adjusted. The inverse direction of [`make_maturity`].
pub fn make_effective(
    maturity: NaiveDate,
    term: Period,
    adjuster: &dyn DateAdjuster,
    publication: &dyn HolidayCalendar
) -> Result<NaiveDate> {
    adjuster.adjust(maturity - term, publication)
}

#[cfg(test)]
mod tests {
    use chrono::Weekday;

    use super::*;
    use crate::time::calendar::simplecalendar::SimpleCalendar;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_overnight_maturity_skips_holidays() {
        let publication = SimpleCalendar::new(
            &[Weekday::Sat, Weekday::Sun],
            Vec::new(),
            vec![ymd(2023, 5, 29)],
            Vec::new()
        );
        assert_eq!(make_overnight_maturity(ymd(2023, 5, 26), &publication), ymd(2023, 5, 30));
        assert_eq!(make_overnight_maturity(ymd(2023, 5, 24), &publication), ymd(2023, 5, 25));
    }

    #[test]
    fn test_effective_one_week_preceding() {
        let publication = SimpleCalendar::weekends_only();
        let effective = make_effective(
            ymd(2020, 4, 23),
            Period::weeks(1),
            &BusinessDayConvention::Preceding,
            &publication
        ).unwrap();
        assert_eq!(effective, ymd(2020, 4, 16));
    }

    #[test]
    fn test_effective_one_month_modified_preceding() {
        let publication = SimpleCalendar::weekends_only();
        // 2020-04-25 is a Saturday
        let effective = make_effective(
            ymd(2020, 5, 25),
            Period::months(1),
            &BusinessDayConvention::ModifiedPreceding,
            &publication
        ).unwrap();
        assert_eq!(effective, ymd(2020, 4, 24));
    }

    #[test]
    fn test_effective_modified_preceding_rolls_forward_into_month() {
        let publication = SimpleCalendar::new(
            &[Weekday::Sat, Weekday::Sun],
            Vec::new(),
            vec![ymd(2019, 1, 1)],
            Vec::new()
        );
        let effective = make_effective(
            ymd(2019, 2, 1),
            Period::months(1),
            &BusinessDayConvention::ModifiedPreceding,
            &publication
        ).unwrap();
        assert_eq!(effective, ymd(2019, 1, 2));
    }

    #[test]
    fn test_effective_end_of_month() {
        let publication = SimpleCalendar::weekends_only();
        let effective = make_effective(
            ymd(2020, 3, 31),
            Period::months(1),
            &BusinessDayConvention::ModifiedPreceding,
            &publication
        ).unwrap();
        assert_eq!(effective, ymd(2020, 2, 28));

        let effective = make_effective(
            ymd(2022, 7, 31),
            Period::months(1),
            &BusinessDayConvention::ModifiedPreceding,
            &publication
        ).unwrap();
        assert_eq!(effective, ymd(2022, 6, 30));
    }

    #[test]
    fn test_maturity_modified_following() {
        let publication = SimpleCalendar::weekends_only();
        // 2018-10-06 is a Saturday
        let maturity = make_maturity(
            ymd(2018, 9, 6),
            Period::months(1),
            &BusinessDayConvention::ModifiedFollowing,
            &publication
        ).unwrap();
        assert_eq!(maturity, ymd(2018, 10, 8));
    }
}
