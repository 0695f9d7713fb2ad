//! Input actions and key bindings
//!
//! Physical key identifiers (as delivered by the host) are decoupled from
//! game actions through a binding table; unbound keys are ignored.

use std::collections::HashMap;

/// Abstract input command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Left,
    Right,
}

/// Held-state per action; mutated by key events, read once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
        }
    }

    pub fn held(&self, action: Action) -> bool {
        match action {
            Action::Left => self.left,
            Action::Right => self.right,
        }
    }
}

/// Key identifier → action table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert("ArrowLeft".to_string(), Action::Left);
        bindings.insert("ArrowRight".to_string(), Action::Right);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Resolve a host key identifier; `None` for unbound keys
    pub fn resolve(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Bind a key to an action, replacing any previous binding for that key
    pub fn bind(&mut self, key: impl Into<String>, action: Action) {
        self.bindings.insert(key.into(), action);
    }
}
