use std::collections::HashMap;

use anyhow::{anyhow, Result};

/// The single global scope of a program: variable name to numeric value.
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Environment {
    store: HashMap<String, f64>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strict lookup. A missing variable is an error.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.store
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("undefined variable {name}"))
    }

    /// Lenient lookup. A missing variable reads as zero and is not inserted.
    pub fn get_or_default(&self, name: &str) -> f64 {
        self.store.get(name).copied().unwrap_or_default()
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.store.insert(name.to_string(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
