use crate::error::{DialogError, Result};
use std::collections::HashMap;

/// Parameters handed to an action callback. Every field is optional and a
/// callback may ignore any of them.
pub struct ActionContext<'a, G> {
    pub gui: Option<&'a mut G>,
    pub id: Option<&'a str>,
    pub action: Option<&'a str>,
}

pub type ActionCallback<G> = Box<dyn FnMut(ActionContext<'_, G>)>;

/// Host-owned namespace of named callbacks, keyed by action name.
pub struct ActionRegistry<G> {
    callbacks: HashMap<String, ActionCallback<G>>,
}

impl<G> Default for ActionRegistry<G> {
    fn default() -> Self {
        Self {
            callbacks: HashMap::new(),
        }
    }
}

impl<G> ActionRegistry<G> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, callback: F) -> &mut Self
    where
        F: FnMut(ActionContext<'_, G>) + 'static,
    {
        self.callbacks.insert(name.into(), Box::new(callback));
        self
    }

    pub fn with<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: FnMut(ActionContext<'_, G>) + 'static,
    {
        self.register(name, callback);
        self
    }

    pub fn remove(&mut self, name: &str) -> bool {
        self.callbacks.remove(name).is_some()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.callbacks.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.callbacks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    pub fn invoke(&mut self, name: &str, context: ActionContext<'_, G>) -> Result<()> {
        let callback = self
            .callbacks
            .get_mut(name)
            .ok_or_else(|| DialogError::UnknownAction(name.to_string()))?;
        callback(context);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Invoked { action: String },
    /// The action name resolved to nothing; the press was a no-op.
    Missing { action: String },
    /// The pressed button is not rendered (empty `cancel_action`).
    NoButton,
}

impl ActionOutcome {
    pub fn was_invoked(&self) -> bool {
        matches!(self, ActionOutcome::Invoked { .. })
    }
}
