use std::collections::{BTreeSet, HashSet};

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::holiday::annualholiday::{AnnualHoliday, WeekendSubstitution};

const ONE_DAY: Days = Days::new(1);

/// Weekend representation using a bitmask, one bit per weekday from Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeekendMask(u8);

impl WeekendMask {
    fn new<'a>(weekends: impl IntoIterator<Item = &'a Weekday>) -> Self {
        let mut mask = 0u8;
        for weekday in weekends {
            mask |= 1u8 << weekday.num_days_from_monday();
        }
        WeekendMask(mask)
    }

    #[inline]
    fn is_weekend(&self, weekday: Weekday) -> bool {
        let bit = 1u8 << weekday.num_days_from_monday();
        (self.0 & bit) != 0
    }
}

/// Calendar made of weekends, annual holiday rules and one-off dates.
///
/// One-off business days override everything else, so an exceptional Saturday
/// opening can be expressed without touching the rules.
#[derive(Debug, Clone)]
pub struct SimpleCalendar {
    weekends: WeekendMask,
    annual_holidays: Vec<AnnualHoliday>,
    additional_holidays: HashSet<NaiveDate>,
    additional_business_days: HashSet<NaiveDate>
}

impl SimpleCalendar {
    pub fn new(
        weekends: &[Weekday],
        annual_holidays: Vec<AnnualHoliday>,
        additional_holidays: Vec<NaiveDate>,
        additional_business_days: Vec<NaiveDate>
    ) -> SimpleCalendar {
        SimpleCalendar {
            weekends: WeekendMask::new(weekends),
            annual_holidays,
            additional_holidays: additional_holidays.into_iter().collect(),
            additional_business_days: additional_business_days.into_iter().collect()
        }
    }

    /// Saturday/Sunday weekend and nothing else.
    pub fn weekends_only() -> SimpleCalendar {
        SimpleCalendar::new(&[Weekday::Sat, Weekday::Sun], Vec::new(), Vec::new(), Vec::new())
    }

    pub fn annual_holidays(&self) -> &[AnnualHoliday] {
        &self.annual_holidays
    }

    #[inline]
    pub fn is_weekend(&self, d: NaiveDate) -> bool {
        self.weekends.is_weekend(d.weekday())
    }

    /// Observed dates of the annual rules for `year`, after weekend substitution.
    ///
    /// Substituted dates may leave the year (a Saturday 31 December moved to
    /// the following Monday), so callers look at adjacent years too.
    fn observed_annual_holidays(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut dates: Vec<(NaiveDate, WeekendSubstitution)> = self.annual_holidays
            .iter()
            .filter_map(|rule| rule.date_in(year).map(|d| (d, rule.substitution())))
            .collect();
        dates.sort_by_key(|(d, _)| *d);

        let mut observed: BTreeSet<NaiveDate> = dates.iter().map(|(d, _)| *d).collect();
        for (d, substitution) in dates {
            if !self.is_weekend(d) {
                continue;
            }
            let step: fn(NaiveDate) -> NaiveDate = match substitution {
                WeekendSubstitution::None => continue,
                WeekendSubstitution::Following => |d: NaiveDate| d + ONE_DAY,
                WeekendSubstitution::Preceding => |d: NaiveDate| d - ONE_DAY
            };
            let mut substitute = step(d);
            while self.is_weekend(substitute) || observed.contains(&substitute) {
                substitute = step(substitute);
            }
            observed.insert(substitute);
        }
        observed
    }

    pub fn is_annual_holiday(&self, d: NaiveDate) -> bool {
        (d.year() - 1..=d.year() + 1)
            .any(|year| self.observed_annual_holidays(year).contains(&d))
    }
}

impl HolidayCalendar for SimpleCalendar {
    fn is_holiday(&self, d: NaiveDate) -> bool {
        if self.additional_business_days.contains(&d) {
            return false;
        }
        self.is_weekend(d) || self.additional_holidays.contains(&d) || self.is_annual_holiday(d)
    }

    fn get_holiday_set(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut holiday_set = BTreeSet::new();

        let mut d = NaiveDate::from_yo_opt(year, 1).unwrap_or(NaiveDate::MIN);
        while d.year() == year {
            if self.is_weekend(d) {
                holiday_set.insert(d);
            }
            d = d + ONE_DAY;
        }

        for y in year - 1..=year + 1 {
            holiday_set.extend(
                self.observed_annual_holidays(y)
                    .into_iter()
                    .filter(|d| d.year() == year)
            );
        }

        holiday_set.extend(
            self.additional_holidays
                .iter()
                .filter(|d| d.year() == year)
                .copied()
        );

        for b_day in self.additional_business_days.iter() {
            holiday_set.remove(b_day);
        }

        holiday_set
    }
}
