use std::collections::HashMap;

use crate::{ast::TypeName, interpreter::value::core::Value};

/// A declared variable.
///
/// Created once by a declaration and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name:      String,
    /// The type written in the declaration.
    pub type_name: TypeName,
    /// The value after coercion to `type_name`.
    pub value:     Value,
}

/// Maps variable names to their declarations for the duration of one run.
///
/// Entries can be added but never replaced or removed.
#[derive(Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Variable>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Adds a variable.
    ///
    /// Returns `false`, leaving the existing entry untouched, if the name is
    /// already bound.
    pub fn insert(&mut self, variable: Variable) -> bool {
        if self.contains(&variable.name) {
            return false;
        }
        self.variables.insert(variable.name.clone(), variable);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
