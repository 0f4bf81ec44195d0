//! The runtime scope chain.
//!
//! Scopes live in an arena owned by the evaluator. Each frame records the
//! index of its parent (or none, for function calls), and frames are
//! pushed and popped strictly LIFO, so a child can never outlive its
//! parent and no reference counting is needed.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::Object;

/// Index of the root frame; it is never popped.
const ROOT: usize = 0;

#[derive(Clone, Debug, Default)]
struct Frame {
    bindings: FxHashMap<String, Object>,
    parent: Option<usize>,
}

/// Restores the scope that was current before a push.
///
/// Returned by [`State::push_scope`] and [`State::push_isolated`] and
/// consumed by [`State::pop_scope`].
#[must_use = "a pushed scope must be popped with its mark"]
#[derive(Debug, Eq, PartialEq)]
pub struct ScopeMark {
    previous: usize,
    frames: usize,
}

/// Scope chain: variable bindings from the current frame up to the root.
#[derive(Clone, Debug)]
pub struct State {
    frames: Vec<Frame>,
    current: usize,
}

impl State {
    pub fn new() -> Self {
        State {
            frames: vec![Frame::default()],
            current: ROOT,
        }
    }

    /// Open a child of the current scope (blocks, `for` initializers).
    pub fn push_scope(&mut self) -> ScopeMark {
        self.push_frame(Some(self.current))
    }

    /// Open a scope with no parent (function calls).
    pub fn push_isolated(&mut self) -> ScopeMark {
        self.push_frame(None)
    }

    fn push_frame(&mut self, parent: Option<usize>) -> ScopeMark {
        let mark = ScopeMark {
            previous: self.current,
            frames: self.frames.len(),
        };
        self.frames.push(Frame {
            bindings: FxHashMap::default(),
            parent,
        });
        self.current = mark.frames;
        trace!(depth = self.frames.len(), isolated = parent.is_none(), "push scope");
        mark
    }

    /// Drop every frame opened since `mark` and make its previous scope
    /// current again.
    pub fn pop_scope(&mut self, mark: ScopeMark) {
        debug_assert!(mark.frames > ROOT && mark.frames <= self.frames.len());
        self.frames.truncate(mark.frames.max(ROOT + 1));
        self.current = mark.previous;
        trace!(depth = self.frames.len(), "pop scope");
    }

    /// Bind `name` in the current scope, replacing any binding of the same
    /// name in that scope.
    pub fn define(&mut self, name: impl Into<String>, value: Object) {
        let name = name.into();
        trace!(%name, ty = %value.ty(), "define");
        self.frames[self.current].bindings.insert(name, value);
    }

    /// Look `name` up from the current scope outwards.
    pub fn get(&self, name: &str) -> Option<&Object> {
        let frame = self.resolve(name)?;
        self.frames[frame].bindings.get(name)
    }

    /// Mutable lookup, same resolution as [`get`](Self::get).
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Object> {
        let frame = self.resolve(name)?;
        self.frames[frame].bindings.get_mut(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Index of the nearest frame binding `name`.
    fn resolve(&self, name: &str) -> Option<usize> {
        let mut index = Some(self.current);
        while let Some(i) = index {
            let frame = &self.frames[i];
            if frame.bindings.contains_key(name) {
                return Some(i);
            }
            index = frame.parent;
        }
        None
    }

    /// Number of live frames, the root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Number of bindings in the root scope.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames[ROOT].bindings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames[ROOT].bindings.is_empty()
    }

    /// Root-scope bindings in no particular order.
    pub fn root_bindings(&self) -> impl Iterator<Item = (&str, &Object)> {
        self.frames[ROOT]
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Forget every binding and drop back to a single empty root.
    pub fn clear(&mut self) {
        self.frames.truncate(ROOT + 1);
        self.frames[ROOT].bindings.clear();
        self.current = ROOT;
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
