use std::collections::HashMap;

use crate::value::Value;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.store.get(name).copied()
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
