/// Module for the binding container one walk produces.
/// Map-shaped, append-only while the walk runs, read-only afterwards.
use std::collections::HashMap;

use crate::values::DynValue;

use super::{ScopeError, ScopeResult};

/// Outcome recorded for a discovered name: an actual value, or the
/// marker for "declared somewhere in the chain, never assigned".
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    Value(DynValue),
    Unbound,
}

#[derive(Debug, Default)]
pub struct Bindings {
    env: HashMap<String, Binding>,
    order: Vec<String>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings {
            env: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The three-outcome read: a value, or an error saying whether the
    /// name is unbound or entirely undefined. Never a silent default.
    pub fn get(&self, name: &str) -> ScopeResult<&DynValue> {
        match self.env.get(name) {
            None => Err(ScopeError::UndefinedName(name.to_string())),
            Some(Binding::Unbound) => Err(ScopeError::UnboundName(name.to_string())),
            Some(Binding::Value(val)) => Ok(val),
        }
    }

    /// Sole mutation primitive: record an outcome for `name` only if
    /// none exists yet. First writer wins; later calls are no-ops.
    pub fn set_if_absent(&mut self, name: &str, binding: Binding) {
        if !self.env.contains_key(name) {
            self.env.insert(name.to_string(), binding);
            self.order.push(name.to_string());
        }
    }

    /// Existence, not boundedness: true for unbound names too.
    pub fn contains(&self, name: &str) -> bool {
        self.env.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.env.len()
    }

    pub fn is_empty(&self) -> bool {
        self.env.is_empty()
    }

    /// Keys in discovery order (innermost frame's names first).
    /// Re-iterating is fine; the container does not change after the
    /// walk completes.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
