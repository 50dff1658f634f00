use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Weekday};
use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::simplecalendar::SimpleCalendar;
use crate::time::holiday::annualholiday::AnnualHoliday;

fn default_weekends() -> Vec<Weekday> {
    vec![Weekday::Sat, Weekday::Sun]
}

#[derive(Deserialize)]
struct SimpleCalendarJsonProp {
    name: String,
    #[serde(default = "default_weekends")]
    weekends: Vec<Weekday>,
    #[serde(default)]
    holidays: Vec<AnnualHoliday>,
    #[serde(default)]
    additional_holidays: Vec<NaiveDate>,
    #[serde(default)]
    additional_business_days: Vec<NaiveDate>
}

fn get_simple_calendar_from_json(json_value: serde_json::Value) -> Result<Arc<dyn HolidayCalendar>, ManagerError> {
    let json_prop: SimpleCalendarJsonProp = parse_json_value(json_value)?;
    let weekends: HashSet<Weekday> = json_prop.weekends.iter().copied().collect();
    if weekends.len() == 7 {
        return Err(ManagerError::InvalidHoliday {
            calendar: json_prop.name,
            reason: "every day of the week is a weekend".to_string()
        });
    }
    for holiday in json_prop.holidays.iter() {
        holiday.validate().map_err(|reason| ManagerError::InvalidHoliday {
            calendar: json_prop.name.clone(),
            reason
        })?;
    }

    Ok(Arc::new(SimpleCalendar::new(
        &json_prop.weekends,
        json_prop.holidays,
        json_prop.additional_holidays,
        json_prop.additional_business_days
    )))
}

pub struct HolidayCalendarManager;

impl HolidayCalendarManager {
    pub fn new() -> Manager<Arc<dyn HolidayCalendar>> {
        Manager::new(get_simple_calendar_from_json)
    }
}
