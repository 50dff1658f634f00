use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

use crate::time::period::Period;
use crate::time::utility::days_of_month;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum EasterType {
    #[default]
    Western,
    Orthodox
}

/// Easter Sunday of `year`, `None` outside of 1583..=4099.
pub fn easter_sunday(year: i32, easter_type: EasterType) -> Option<NaiveDate> {
    if !(1583..=4099).contains(&year) {
        return None;
    }

    let g = year % 19;

    let p = match easter_type {
        EasterType::Orthodox => {
            let i = (19 * g + 15) % 30;
            let j = (year + year / 4 + i) % 7;
            let e = if year <= 1600 {
                10
            } else {
                10 + year / 100 - 16 - (year / 100 - 16) / 4
            };
            i - j + e
        },
        EasterType::Western => {
            let c = year / 100;
            let c_div_4 = c / 4;
            let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
            let h_div_28 = h / 28;
            let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
            let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
            i - j
        }
    };

    // p is negative for a March Easter
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    let month = 3 + (p + 26) / 30;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// What happens to a fixed-date holiday that falls on a weekend.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum WeekendSubstitution {
    /// The holiday is lost.
    #[default]
    None,
    /// Observed on the next weekday that is not already a holiday.
    Following,
    /// Observed on the previous weekday that is not already a holiday.
    Preceding
}

/// A holiday rule that repeats every year.
///
/// Configuration files name the variant through the `holiday_type` field:
///
/// ```json
/// { "holiday_type": "EasterRelated", "shift_days": -2 }
/// { "holiday_type": "FixedDate", "month": 12, "day": 25, "substitution": "Following" }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "holiday_type")]
pub enum AnnualHoliday {
    FixedDate {
        month: u32,
        day: u32,
        #[serde(default)]
        substitution: WeekendSubstitution
    },
    EasterRelated {
        #[serde(default)]
        easter_type: EasterType,
        shift_days: i32
    },
    NthWeekday {
        month: u32,
        n: u8,
        weekday: Weekday
    },
    LastWeekday {
        month: u32,
        weekday: Weekday
    }
}

impl AnnualHoliday {
    pub fn fixed_date(month: u32, day: u32) -> AnnualHoliday {
        AnnualHoliday::FixedDate { month, day, substitution: WeekendSubstitution::None }
    }

    pub fn easter_related(shift_days: i32) -> AnnualHoliday {
        AnnualHoliday::EasterRelated { easter_type: EasterType::Western, shift_days }
    }

    /// Checks the rule parameters, returning a description of the first problem.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            AnnualHoliday::FixedDate { month, day, .. } => {
                if !(1..=12).contains(&month) {
                    Err(format!("month {month} out of 1..=12"))
                } else if day == 0 || day > days_of_month(2000, month) {
                    Err(format!("day {day} does not exist in month {month}"))
                } else {
                    Ok(())
                }
            },
            AnnualHoliday::EasterRelated { .. } => Ok(()),
            AnnualHoliday::NthWeekday { month, n, .. } => {
                if !(1..=12).contains(&month) || !(1..=5).contains(&n) {
                    Err(format!("invalid nth weekday rule: month {month}, n {n}"))
                } else {
                    Ok(())
                }
            },
            AnnualHoliday::LastWeekday { month, .. } => {
                if !(1..=12).contains(&month) {
                    Err(format!("month {month} out of 1..=12"))
                } else {
                    Ok(())
                }
            }
        }
    }

    pub fn substitution(&self) -> WeekendSubstitution {
        match self {
            AnnualHoliday::FixedDate { substitution, .. } => *substitution,
            _ => WeekendSubstitution::None
        }
    }

    /// The unsubstituted date of the holiday in `year`, if it occurs.
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        match *self {
            AnnualHoliday::FixedDate { month, day, .. } => NaiveDate::from_ymd_opt(year, month, day),
            AnnualHoliday::EasterRelated { easter_type, shift_days } => {
                easter_sunday(year, easter_type).map(|easter| easter + Period::days(shift_days))
            },
            AnnualHoliday::NthWeekday { month, n, weekday } => {
                NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
            },
            AnnualHoliday::LastWeekday { month, weekday } => {
                let eom = NaiveDate::from_ymd_opt(year, month, days_of_month(year, month))?;
                let days_back = (eom.weekday().num_days_from_monday() + 7
                    - weekday.num_days_from_monday()) % 7;
                Some(eom - Days::new(days_back as u64))
            }
        }
    }
}
