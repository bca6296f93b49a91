// Input configuration and remapping system

use super::action::{default_bindings, Action};
use std::collections::HashMap;

/// Maps binding names (as sent by the host input layer) to game actions.
///
/// Several names may point at the same action, e.g. an alias
/// `"Attack"` next to the canonical `"LightAttack"`.
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Mapping from binding names to actions
    bindings: HashMap<String, Action>,

    /// Reverse mapping for quick lookups (action -> all names)
    action_to_names: HashMap<Action, Vec<String>>,
}

impl InputConfig {
    /// Create an empty input configuration
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            action_to_names: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings<I, S>(bindings: I) -> Self
    where
        I: IntoIterator<Item = (S, Action)>,
        S: Into<String>,
    {
        let mut config = Self::new();
        for (name, action) in bindings {
            config.bind(name, action);
        }
        config
    }

    /// Bind a name to an action
    pub fn bind(&mut self, name: impl Into<String>, action: Action) {
        let name = name.into();

        // Remove any existing binding for this name
        self.unbind_name(&name);

        self.action_to_names
            .entry(action)
            .or_default()
            .push(name.clone());
        self.bindings.insert(name, action);
    }

    /// Unbind a name
    pub fn unbind_name(&mut self, name: &str) {
        if let Some(action) = self.bindings.remove(name) {
            if let Some(names) = self.action_to_names.get_mut(&action) {
                names.retain(|n| n != name);
                if names.is_empty() {
                    self.action_to_names.remove(&action);
                }
            }
        }
    }

    /// Unbind all names for an action
    pub fn unbind_action(&mut self, action: Action) {
        if let Some(names) = self.action_to_names.remove(&action) {
            for name in names {
                self.bindings.remove(&name);
            }
        }
    }

    /// Get the action bound to a name
    pub fn get_action(&self, name: &str) -> Option<Action> {
        self.bindings.get(name).copied()
    }

    /// Get all names bound to an action
    pub fn get_names(&self, action: Action) -> Vec<String> {
        self.action_to_names
            .get(&action)
            .cloned()
            .unwrap_or_default()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.action_to_names.contains_key(&action)
    }

    /// Get all bindings as a list
    pub fn get_all_bindings(&self) -> Vec<(String, Action)> {
        self.bindings
            .iter()
            .map(|(name, action)| (name.clone(), *action))
            .collect()
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_names.clear();
    }

    /// Reset to the canonical action names
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (name, action) in default_bindings() {
            self.bind(name, action);
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
