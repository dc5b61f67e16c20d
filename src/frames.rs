//! The runtime-facing half of the crate: descriptors for in-flight
//! invocations, and the trait a host runtime implements to hand the
//! walker a snapshot of the calling thread's stack.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::values::DynValue;

/// Process-unique identity of a routine (the code object being
/// executed, not its name). Two routines that happen to share a name
/// still get distinct ids, which is what makes walker self-detection
/// reliable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoutineId(usize);

impl RoutineId {
    pub fn fresh() -> RoutineId {
        static NEXT: AtomicUsize = AtomicUsize::new(0);
        RoutineId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Point-in-time descriptor of one active invocation.
///
/// Declared names come in three disjoint flavors:
/// - `locals`: names the routine body declares itself;
/// - `cells`: locals that nested closures share;
/// - `captured`: free names owned by an enclosing routine, reached via
///   closure. These are *not* declared here; their owner declares them.
///
/// `bound` holds only the names actually assigned at the moment of
/// inspection. Real runtimes surface captured names there too, so the
/// bound map is allowed to contain them.
#[derive(Debug, Clone)]
pub struct Frame {
    routine: RoutineId,
    name: String,
    locals: Vec<String>,
    cells: Vec<String>,
    captured: Vec<String>,
    bound: HashMap<String, DynValue>,
}

impl Frame {
    pub fn new(routine: RoutineId, name: &str) -> Frame {
        Frame {
            routine,
            name: name.to_string(),
            locals: Vec::new(),
            cells: Vec::new(),
            captured: Vec::new(),
            bound: HashMap::new(),
        }
    }

    pub fn routine(&self) -> RoutineId {
        self.routine
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record a name declared in the routine body, without assigning it.
    pub fn declare(&mut self, name: &str) {
        self.locals.push(name.to_string());
    }

    /// Record a local that nested closures share (cell-style).
    pub fn cell(&mut self, name: &str) {
        self.cells.push(name.to_string());
    }

    /// Record a free name owned by an enclosing routine.
    pub fn capture(&mut self, name: &str) {
        self.captured.push(name.to_string());
    }

    /// Assign a value to a name. Does not declare it; use this directly
    /// for captured names, which the owning frame declares.
    pub fn bind<T: Into<DynValue>>(&mut self, name: &str, value: T) {
        self.bound.insert(name.to_string(), value.into());
    }

    /// Declare a local and assign it in one step.
    pub fn define<T: Into<DynValue>>(&mut self, name: &str, value: T) {
        self.declare(name);
        self.bind(name, value);
    }

    pub fn is_captured(&self, name: &str) -> bool {
        self.captured.iter().any(|c| c == name)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bound.contains_key(name)
    }

    pub fn bound_entries(&self) -> impl Iterator<Item = (&str, &DynValue)> {
        self.bound.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every name this frame itself declares: locals plus cells.
    /// Captured names are deliberately absent.
    pub fn declared_here(&self) -> impl Iterator<Item = &str> {
        self.locals
            .iter()
            .chain(self.cells.iter())
            .map(String::as_str)
    }
}

/// Read-only snapshot of a call chain, ordered innermost caller first.
/// Built once per lookup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct CallChain {
    frames: Vec<Frame>,
}

impl CallChain {
    pub fn new() -> CallChain {
        CallChain { frames: Vec::new() }
    }

    /// Append the next frame outward.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl From<Vec<Frame>> for CallChain {
    fn from(frames: Vec<Frame>) -> CallChain {
        CallChain { frames }
    }
}

/// The one environmental capability the walker consumes: enumerate the
/// calling thread's active frames. Implemented by a runtime bridge in
/// production and by [`FixedChain`] in tests.
pub trait ChainSource {
    /// Frames of the current execution context, innermost caller
    /// first. Each call must produce an independent snapshot.
    fn snapshot(&self) -> CallChain;
}

/// A `ChainSource` over a pre-built chain; every snapshot is a copy of
/// the same frames.
pub struct FixedChain {
    chain: CallChain,
}

impl FixedChain {
    pub fn new<C: Into<CallChain>>(chain: C) -> FixedChain {
        FixedChain {
            chain: chain.into(),
        }
    }
}

impl ChainSource for FixedChain {
    fn snapshot(&self) -> CallChain {
        self.chain.clone()
    }
}
