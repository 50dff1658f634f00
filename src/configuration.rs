use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::interestrate::index::benchmark::{Benchmark, get_benchmark_from_json};
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaycalendarmanager::HolidayCalendarManager;
use crate::time::daycounter::daycounter::DayCounter;
use crate::time::daycounter::daycountermanager::DayCounterManager;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_calendar: Vec<serde_json::Value>,
    #[serde(default)]
    day_count: Vec<serde_json::Value>,
    #[serde(default)]
    benchmark: Vec<serde_json::Value>
}

/// Calendars, day counts and benchmarks loaded from one JSON document.
///
/// ```json
/// {
///     "holiday_calendar": [{ "name": "US", "holidays": [...] }],
///     "day_count": [{ "name": "ACT/360", "day_count": "Actual360" }],
///     "benchmark": [{ "name": "SOFR", "calendar": "US", "day_count": "ACT/360", "index_decimal_places": 8 }]
/// }
/// ```
///
/// Benchmarks refer to calendars and day counts by name, so those sections
/// are loaded first.
pub struct Configuration {
    holiday_calendar_manager: Manager<Arc<dyn HolidayCalendar>>,
    day_counter_manager: Manager<Arc<dyn DayCounter>>,
    benchmarks: Vec<Arc<Benchmark>>
}

impl Configuration {
    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let mut holiday_calendar_manager = HolidayCalendarManager::new();
        holiday_calendar_manager.insert_obj_from_json_vec(&json_prop.holiday_calendar)?;

        let mut day_counter_manager = DayCounterManager::new();
        day_counter_manager.insert_obj_from_json_vec(&json_prop.day_count)?;

        let mut benchmarks = Vec::with_capacity(json_prop.benchmark.len());
        for json_value in json_prop.benchmark {
            let benchmark = get_benchmark_from_json(json_value, &holiday_calendar_manager, &day_counter_manager)?;
            debug!("registered benchmark '{}'", benchmark.name());
            benchmarks.push(Arc::new(benchmark));
        }

        Ok(Configuration { holiday_calendar_manager, day_counter_manager, benchmarks })
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn holiday_calendar_manager(&self) -> &Manager<Arc<dyn HolidayCalendar>> {
        &self.holiday_calendar_manager
    }

    pub fn day_counter_manager(&self) -> &Manager<Arc<dyn DayCounter>> {
        &self.day_counter_manager
    }

    pub fn benchmarks(&self) -> &[Arc<Benchmark>] {
        &self.benchmarks
    }

    pub fn benchmark(&self, name: &str) -> Result<Arc<Benchmark>, ManagerError> {
        self.benchmarks
            .iter()
            .find(|benchmark| benchmark.name() == name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFound(name.to_owned()))
    }
}

impl FromStr for Configuration {
    type Err = ManagerError;

    fn from_str(json: &str) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        Configuration::from_json_prop(json_prop)
    }
}
