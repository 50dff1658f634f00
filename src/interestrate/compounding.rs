use crate::error::Result;
use crate::series::resets::Resets;
use crate::time::schedule::compoundingschedule::CompoundingSchedule;

/// Growth of one unit over the schedule: the product of `1 + r * tau` over
/// every overnight period, un-annualised and unrounded.
pub fn compound_factor(schedule: &CompoundingSchedule, resets: &Resets) -> Result<f64> {
    let day_counter = resets.day_counter();
    schedule.periods().iter().try_fold(1.0, |factor, period| {
        let rate = resets.value(period.fixing_date())?;
        Ok(factor * (1.0 + rate * day_counter.fraction(period.period())))
    })
}

/// Simple annualised rate equivalent to compounding the schedule, as a decimal.
pub fn compound(schedule: &CompoundingSchedule, resets: &Resets) -> Result<f64> {
    let factor = compound_factor(schedule, resets)?;
    let tau = resets.day_counter().fraction(&schedule.full_period()?);
    Ok((factor - 1.0) / tau)
}
