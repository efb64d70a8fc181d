use std::collections::HashMap;

use super::value::Value;

/// Name to value bindings. There is a single flat scope: blocks do not
/// introduce new ones.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    values: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Binds `name`, replacing any earlier value, and returns the value stored.
    pub fn store(&mut self, name: &str, value: Value) -> Value {
        self.values.insert(name.to_string(), value.clone());
        value
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
