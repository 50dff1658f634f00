use chrono::NaiveDate;
use log::debug;

use crate::error::{CompoundingError, Result};
use crate::math::round::round;
use crate::series::resets::Resets;
use crate::series::timeseries::TimeSeries;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::termdate::make_overnight_maturity;

/// Walks the overnight periods from `from` to the last reset and publishes a
/// level at `from` and at every overnight maturity.
///
/// `carry` maps the unrounded level of a step onto the level carried into the
/// next one; the published value is always `round(carried, decimal_places)`.
fn make_index(
    resets: &Resets,
    from: NaiveDate,
    publication: &dyn HolidayCalendar,
    decimal_places: u32,
    starting_value: f64,
    carry: fn(f64, u32) -> f64
) -> Result<TimeSeries<f64>> {
    let last_reset = resets.last_reset_date()?;
    if from > last_reset {
        return Err(CompoundingError::EmptyInput("no reset on or after the index start"));
    }

    let until = make_overnight_maturity(last_reset, publication);
    let mut ts = TimeSeries::new(RangeOfDates::new(from, until)?);
    let day_counter = resets.day_counter();

    let mut index = carry(starting_value, decimal_places);
    ts.set(from, round(index, decimal_places))?;

    let mut d = from;
    while d <= last_reset {
        let maturity = make_overnight_maturity(d, publication);
        let rate = resets.value(d)?;
        index = carry(index * (1.0 + rate * day_counter.year_fraction(d, maturity)), decimal_places);
        ts.set(maturity, round(index, decimal_places))?;
        d = maturity;
    }
    Ok(ts)
}

/// Compounded index whose running level keeps full precision; only the
/// published values are rounded (SOFR, SONIA, €STR style).
pub fn make_compounded_index(
    resets: &Resets,
    from: NaiveDate,
    publication: &dyn HolidayCalendar,
    decimal_places: u32,
    starting_value: f64
) -> Result<TimeSeries<f64>> {
    debug!("compounded index from {} starting at {}, {} decimal places", from, starting_value, decimal_places);
    let ts = make_index(resets, from, publication, decimal_places, starting_value, |x, _| x)?;
    debug!("compounded index published over {} to {}", ts.range().from(), ts.range().until());
    Ok(ts)
}

/// Compounded index whose running level is itself rounded after every
/// overnight step, so each publication compounds the previous published
/// value (SARON style).
pub fn make_compounded_index_rounded_daily(
    resets: &Resets,
    from: NaiveDate,
    publication: &dyn HolidayCalendar,
    decimal_places: u32,
    starting_value: f64
) -> Result<TimeSeries<f64>> {
    debug!(
        "daily rounded compounded index from {} starting at {}, {} decimal places",
        from, starting_value, decimal_places
    );
    let ts = make_index(resets, from, publication, decimal_places, starting_value, round)?;
    debug!("daily rounded compounded index published over {} to {}", ts.range().from(), ts.range().until());
    Ok(ts)
}
