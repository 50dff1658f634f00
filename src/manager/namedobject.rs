use serde::Deserialize;

/// The `name` every configuration entry is registered under.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedJsonObject {
    name: String
}

impl NamedJsonObject {
    pub fn name(&self) -> &str {
        &self.name
    }
}
