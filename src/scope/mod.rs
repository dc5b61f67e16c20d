//! Dynamic-scope lookup: walk an explicit call-chain snapshot and
//! merge every frame's names into one queryable container.

use std::error::Error;
use std::fmt;

use crate::frames::{ChainSource, RoutineId};

mod bindings;

pub use bindings::{Binding, Bindings};

pub type ScopeResult<T> = Result<T, ScopeError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ScopeError {
    /// The name was never declared in any observed frame.
    UndefinedName(String),
    /// The name is declared somewhere in the chain but had no value
    /// assigned at observation time.
    UnboundName(String),
}

impl fmt::Display for ScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ScopeError::UndefinedName(name) => {
                write!(f, "Name '{}' is not defined in the dynamic scope", name)
            }
            ScopeError::UnboundName(name) => {
                write!(f, "Name '{}' is unbound in the dynamic scope", name)
            }
        }
    }
}

impl Error for ScopeError {}

lazy_static! {
    static ref WALKER_ROUTINE: RoutineId = RoutineId::fresh();
}

/// Identity of the lookup routine itself. A runtime bridge whose
/// snapshots can include re-entries into the walker must stamp those
/// frames with this id so the walk skips them.
pub fn walker_routine() -> RoutineId {
    *WALKER_ROUTINE
}

/// Build a read-only view of every name visible to the given call
/// chain, as if scoping were dynamic: innermost frames are visited
/// first, and once a name has an outcome (bound or unbound), outer
/// frames cannot override it.
pub fn lookup_dynamic_scope(source: &dyn ChainSource) -> Bindings {
    let chain = source.snapshot();
    let mut bindings = Bindings::new();

    for frame in chain.iter() {
        // Re-entries into the lookup are not part of the observed
        // chain. Matched by routine identity, not name.
        if frame.routine() == walker_routine() {
            continue;
        }

        // Bound pass. Captured names are resolved by the frame that
        // owns them, so a closure observing one cannot shadow it.
        for (name, value) in frame.bound_entries() {
            if frame.is_captured(name) {
                continue;
            }
            bindings.set_if_absent(name, Binding::Value(value.clone()));
        }

        // Unbound pass: declared in this frame, not yet assigned.
        for name in frame.declared_here() {
            if !frame.is_bound(name) {
                bindings.set_if_absent(name, Binding::Unbound);
            }
        }
    }

    bindings
}
