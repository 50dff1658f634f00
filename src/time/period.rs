use std::fmt;
use std::num::ParseIntError;
use std::ops::{Add, Neg, Sub};

use chrono::{
    Datelike,
    Days,
    NaiveDate
};
use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::time::utility::clamped_date;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
    Years
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y'
        }
    }

    /// Month-based units clamp to the end of the month, the others count days.
    pub fn is_month_based(&self) -> bool {
        matches!(self, TimeUnit::Months | TimeUnit::Years)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParsePeriodError {
    #[error("empty period string")]
    Empty,
    #[error("unknown time unit '{0}' found")]
    UnknownTimeUnit(char),
    #[error(transparent)]
    Parse(#[from] ParseIntError)
}

/// A term such as `1W`, `3M` or `1Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    number: i32,
    unit: TimeUnit
}

impl Period {
    pub fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn months(number: i32) -> Period {
        Period::new(number, TimeUnit::Months)
    }

    pub fn years(number: i32) -> Period {
        Period::new(number, TimeUnit::Years)
    }

    pub fn parse(period_str: &str) -> Result<Period, ParsePeriodError> {
        let trimmed = period_str.trim();
        let unit_chr = trimmed.chars().last().ok_or(ParsePeriodError::Empty)?;
        let number = trimmed[..trimmed.len() - unit_chr.len_utf8()].parse::<i32>()?;
        match unit_chr.to_ascii_uppercase() {
            'D' => Ok(Period::days(number)),
            'W' => Ok(Period::weeks(number)),
            'M' => Ok(Period::months(number)),
            'Y' => Ok(Period::years(number)),
            _ => Err(ParsePeriodError::UnknownTimeUnit(unit_chr))
        }
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}

impl TryFrom<String> for Period {
    type Error = ParsePeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Period::parse(&value)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> String {
        period.to_string()
    }
}

impl Neg for Period {
    type Output = Period;

    fn neg(self) -> Period {
        Period::new(-self.number, self.unit)
    }
}

fn shift_days(horizon: NaiveDate, number: i64) -> NaiveDate {
    let days = Days::new(number.unsigned_abs());
    if number >= 0 {
        horizon + days
    } else {
        horizon - days
    }
}

fn shift_months(horizon: NaiveDate, number: i32) -> NaiveDate {
    let total = horizon.month0() as i32 + number;
    let new_year = horizon.year() + total.div_euclid(12);
    let new_month = total.rem_euclid(12) as u32 + 1;
    clamped_date(new_year, new_month, horizon.day())
}

impl Add<Period> for NaiveDate {
    type Output = Self;

    fn add(self, period: Period) -> Self {
        match period.unit {
            TimeUnit::Days => shift_days(self, period.number as i64),
            TimeUnit::Weeks => shift_days(self, 7 * period.number as i64),
            TimeUnit::Months => shift_months(self, period.number),
            TimeUnit::Years => shift_months(self, 12 * period.number)
        }
    }
}

impl Sub<Period> for NaiveDate {
    type Output = Self;

    fn sub(self, period: Period) -> Self {
        self + (-period)
    }
}
