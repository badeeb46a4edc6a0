use std::collections::HashMap;

/// The single, flat variable store of a running program.
///
/// There is no scoping: blocks, branches and loop bodies all read and write
/// the same bindings. Values are only ever written by assignments and only
/// ever read by identifier references.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable.
    ///
    /// # Example
    /// ```
    /// use whilst::interpreter::evaluator::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// assert_eq!(env.get("x"), None);
    ///
    /// env.assign("x", 4.0);
    /// env.assign("x", 5.0);
    /// assert_eq!(env.get("x"), Some(5.0));
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Number of variables that have been assigned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns all bindings sorted by name.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, f64)> {
        let mut bindings: Vec<_> = self.variables
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), *value))
                                       .collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
