use std::sync::Arc;

use serde::Deserialize;

use crate::manager::manager::Manager;
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::time::daycounter::daycounter::{DayCounter, DayCounterType};

#[derive(Deserialize)]
struct DayCounterJsonProp {
    day_count: DayCounterType
}

fn get_day_counter_from_json(json_value: serde_json::Value) -> Result<Arc<dyn DayCounter>, ManagerError> {
    let json_prop: DayCounterJsonProp = parse_json_value(json_value)?;
    Ok(json_prop.day_count.generate())
}

pub struct DayCounterManager;

impl DayCounterManager {
    pub fn new() -> Manager<Arc<dyn DayCounter>> {
        Manager::new(get_day_counter_from_json)
    }
}
