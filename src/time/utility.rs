use chrono::NaiveDate;

#[inline]
pub const fn is_leap(year: i32) -> bool {
    ((year % 4 == 0) && (year % 100 != 0)) || (year % 400 == 0)
}

pub const fn days_of_month(year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Builds `year-month-day`, clamping `day` to the last day of the month.
///
/// This is the end-of-month normalisation used by month arithmetic:
/// 2020-03-31 minus one month lands on 2020-02-29, not on a non-existent date.
pub fn clamped_date(year: i32, month: u32, day: u32) -> NaiveDate {
    let last = days_of_month(year, month);
    // month is always in 1..=12 and day is clamped, so the date exists
    NaiveDate::from_ymd_opt(year, month, day.min(last))
        .unwrap_or_else(|| panic!("invalid month {month} for year {year}"))
}
