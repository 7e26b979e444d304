use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The flat variable store shared by the whole program.
///
/// There is a single namespace with no scoping or shadowing. Binding a name
/// that already exists replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn define(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Returns the value bound to `name`.
    ///
    /// # Errors
    /// `RuntimeError::UnknownVariable` if nothing is bound to `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// All bindings ordered by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), value))
                                       .collect();
        bindings.sort_unstable_by_key(|(name, _)| *name);
        bindings
    }
}
