use chrono::NaiveDate;
use log::debug;
use serde::{
    Deserialize,
    Serialize
};

use crate::error::{CompoundingError, Result};
use crate::interestrate::compounding::compound;
use crate::interestrate::inversemodifiedfollowing::InverseModifiedFollowing;
use crate::math::round::round;
use crate::series::resets::Resets;
use crate::series::timeseries::TimeSeries;
use crate::time::businessdayadjuster::BusinessDayConvention;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::period::Period;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::schedule::compoundingschedule::make_compounding_schedule;
use crate::time::termdate::{make_effective, make_overnight_maturity};

/// How the start of a term window is derived from its end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectiveDateRule {
    /// `end - term`, adjusted with a plain convention.
    Fixed(BusinessDayConvention),
    /// The start whose Modified Following `start + term` is the end date.
    /// Only month-based terms; configuration rejects the others.
    InverseModifiedFollowing
}

impl EffectiveDateRule {
    pub fn effective(
        &self,
        maturity: NaiveDate,
        term: Period,
        publication: &dyn HolidayCalendar
    ) -> Result<NaiveDate> {
        match self {
            EffectiveDateRule::Fixed(convention) => make_effective(maturity, term, convention, publication),
            EffectiveDateRule::InverseModifiedFollowing => {
                let convention = InverseModifiedFollowing::new(maturity, term);
                make_effective(maturity, term, &convention, publication)
            }
        }
    }
}

/// Window of a compounded term rate published for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateWindow {
    pub effective: NaiveDate,
    pub maturity: NaiveDate,
    pub day_count: i64
}

/// The window of the `term` rate published on `date`: it ends on the next
/// business day and starts where `rule` puts it.
pub fn make_rate_window(
    date: NaiveDate,
    term: Period,
    rule: EffectiveDateRule,
    publication: &dyn HolidayCalendar
) -> Result<RateWindow> {
    let maturity = make_overnight_maturity(date, publication);
    let effective = rule.effective(maturity, term, publication)?;
    Ok(RateWindow {
        effective,
        maturity,
        day_count: (maturity - effective).num_days()
    })
}

/// Compounded `term` rates in percent, one per overnight maturity from `from`
/// to the maturity of the last reset.
///
/// End dates whose window would start before `from` are left empty.
pub fn make_compounded_rate(
    term: Period,
    resets: &Resets,
    from: NaiveDate,
    rule: EffectiveDateRule,
    publication: &dyn HolidayCalendar,
    decimal_places: u32
) -> Result<TimeSeries<f64>> {
    debug!("compounded {} rate from {} with {:?}, {} decimal places", term, from, rule, decimal_places);

    let last_reset = resets.last_reset_date()?;
    if from > last_reset {
        return Err(CompoundingError::EmptyInput("no reset on or after the rate start"));
    }

    let until = make_overnight_maturity(last_reset, publication);
    let mut ts = TimeSeries::new(RangeOfDates::new(from, until)?);

    let mut d = from;
    while d <= last_reset {
        let maturity = make_overnight_maturity(d, publication);
        let effective = rule.effective(maturity, term, publication)?;
        if effective >= from {
            let schedule = make_compounding_schedule(&RangeOfDates::new(effective, maturity)?, publication)?;
            let rate = compound(&schedule, resets)?;
            ts.set(maturity, round(rate * 100.0, decimal_places))?;
        }
        d = maturity;
    }

    debug!(
        "compounded {} rate published on {} dates up to {}",
        term, ts.observations().count(), ts.range().until()
    );
    Ok(ts)
}
