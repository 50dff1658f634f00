use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

use crate::error::Result;
use crate::interestrate::index::compoundedindex::{
    make_compounded_index,
    make_compounded_index_rounded_daily
};
use crate::interestrate::index::compoundedrate::{EffectiveDateRule, make_compounded_rate};
use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::series::resets::Resets;
use crate::series::timeseries::TimeSeries;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::daycounter::daycounter::DayCounter;
use crate::time::period::Period;

/// When a compounded index level gets rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IndexRounding {
    /// Only published values are rounded; the running level keeps full precision.
    #[default]
    PublishedOnly,
    /// The running level is rounded after every overnight step.
    Daily
}

/// One compounded term rate published for a benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateDefinition {
    pub term: Period,
    pub decimal_places: u32,
    pub effective_date_rule: EffectiveDateRule
}

fn default_starting_value() -> f64 {
    100.0
}

#[derive(Deserialize)]
struct RateDefinitionJsonProp {
    term: String,
    decimal_places: u32,
    effective_date_rule: EffectiveDateRule
}

#[derive(Deserialize)]
struct BenchmarkJsonProp {
    name: String,
    calendar: String,
    day_count: String,
    #[serde(default = "default_starting_value")]
    starting_value: f64,
    index_decimal_places: u32,
    #[serde(default)]
    index_rounding: IndexRounding,
    #[serde(default)]
    rates: Vec<RateDefinitionJsonProp>
}

/// An overnight benchmark: its publication calendar, accrual convention and
/// the compounded products published from its fixings.
#[derive(Clone)]
pub struct Benchmark {
    name: String,
    calendar: Arc<dyn HolidayCalendar>,
    day_counter: Arc<dyn DayCounter>,
    starting_value: f64,
    index_decimal_places: u32,
    index_rounding: IndexRounding,
    rates: Vec<RateDefinition>
}

impl fmt::Debug for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Benchmark")
            .field("name", &self.name)
            .field("day_counter", &self.day_counter)
            .field("starting_value", &self.starting_value)
            .field("index_decimal_places", &self.index_decimal_places)
            .field("index_rounding", &self.index_rounding)
            .field("rates", &self.rates)
            .finish()
    }
}

impl Benchmark {
    pub fn new(
        name: String,
        calendar: Arc<dyn HolidayCalendar>,
        day_counter: Arc<dyn DayCounter>,
        starting_value: f64,
        index_decimal_places: u32,
        index_rounding: IndexRounding,
        rates: Vec<RateDefinition>
    ) -> Benchmark {
        Benchmark {
            name,
            calendar,
            day_counter,
            starting_value,
            index_decimal_places,
            index_rounding,
            rates
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn calendar(&self) -> &Arc<dyn HolidayCalendar> {
        &self.calendar
    }

    pub fn day_counter(&self) -> &Arc<dyn DayCounter> {
        &self.day_counter
    }

    pub fn starting_value(&self) -> f64 {
        self.starting_value
    }

    pub fn index_decimal_places(&self) -> u32 {
        self.index_decimal_places
    }

    pub fn index_rounding(&self) -> IndexRounding {
        self.index_rounding
    }

    pub fn rates(&self) -> &[RateDefinition] {
        &self.rates
    }

    /// Fixings in percent accruing under this benchmark's day count.
    pub fn resets(&self, observations: Vec<(NaiveDate, f64)>) -> Result<Resets> {
        Resets::from_observations(observations, self.day_counter.clone())
    }

    pub fn compounded_index(&self, resets: &Resets, from: NaiveDate) -> Result<TimeSeries<f64>> {
        let make = match self.index_rounding {
            IndexRounding::PublishedOnly => make_compounded_index,
            IndexRounding::Daily => make_compounded_index_rounded_daily
        };
        make(resets, from, self.calendar.as_ref(), self.index_decimal_places, self.starting_value)
    }

    /// Every configured term rate, in configuration order.
    pub fn compounded_rates(&self, resets: &Resets, from: NaiveDate) -> Result<Vec<(Period, TimeSeries<f64>)>> {
        self.rates
            .iter()
            .map(|rate| {
                let ts = make_compounded_rate(
                    rate.term,
                    resets,
                    from,
                    rate.effective_date_rule,
                    self.calendar.as_ref(),
                    rate.decimal_places
                )?;
                Ok((rate.term, ts))
            })
            .collect()
    }
}

/// Parses a benchmark entry, resolving its calendar and day count by name.
pub fn get_benchmark_from_json(
    json_value: serde_json::Value,
    calendars: &Manager<Arc<dyn HolidayCalendar>>,
    day_counters: &Manager<Arc<dyn DayCounter>>
) -> std::result::Result<Benchmark, ManagerError> {
    let json_prop: BenchmarkJsonProp = parse_json_value(json_value)?;
    let mut rates = Vec::with_capacity(json_prop.rates.len());
    for rate in json_prop.rates {
        let term = Period::parse(&rate.term)?;
        if rate.effective_date_rule == EffectiveDateRule::InverseModifiedFollowing && !term.unit().is_month_based() {
            return Err(ManagerError::InvalidRate {
                benchmark: json_prop.name,
                reason: format!("{term} is not a month-based term for InverseModifiedFollowing")
            });
        }
        rates.push(RateDefinition {
            term,
            decimal_places: rate.decimal_places,
            effective_date_rule: rate.effective_date_rule
        });
    }

    Ok(Benchmark::new(
        json_prop.name,
        calendars.get(&json_prop.calendar)?,
        day_counters.get(&json_prop.day_count)?,
        json_prop.starting_value,
        json_prop.index_decimal_places,
        json_prop.index_rounding,
        rates
    ))
}
