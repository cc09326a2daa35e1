use std::collections::HashMap;

/// A name bound to a value by an assignment line.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self{name: name.into(), value}
    }
}

/// Identifiers are letters only, `[A-Za-z]+`.
pub fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// Every binding made during a session. Later assignments to the same name
/// replace earlier ones; nothing is ever removed.
#[derive(Debug, Default)]
pub struct VariableStore {
    values: HashMap<String, f64>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn assign(&mut self, variable: &Variable) {
        log::debug!("{} bound to {:?}", variable.name, variable.value);
        self.values.insert(variable.name.clone(), variable.value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
