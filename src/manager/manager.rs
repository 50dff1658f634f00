use std::collections::HashMap;

use log::debug;

use super::managererror::{ManagerError, parse_json_value};
use super::namedobject::NamedJsonObject;

/// Registry of configuration objects keyed by their `name`.
///
/// Entries are parsed from JSON by the function given at construction; a later
/// entry with an existing name replaces the earlier one.
pub struct Manager<V> {
    map: HashMap<String, V>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl<V> Manager<V>
where
    V: Clone
{
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map: HashMap::new(), get_obj_from_json }
    }

    pub fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFound(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn insert(&mut self, name: String, v: V) -> Option<V> {
        self.map.insert(name, v)
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = parse_json_value(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!("registered '{}'", named_object.name());
        self.insert(named_object.name().to_owned(), v);
        Ok(())
    }

    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for json_value in json_vec {
            self.insert_obj_from_json(json_value.clone())?;
        }
        Ok(())
    }
}
