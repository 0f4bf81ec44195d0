//! RAII scope guards for the evaluator.
//!
//! [`ScopedEvaluator`] pops the scope it opened when dropped, so a block
//! or call restores the caller's scope whether it finished normally,
//! with an abrupt completion, with an error, or by panicking.
//!
//! ```text
//! self.with_scope(|scoped| {
//!     scoped.state.define(name, value);
//!     scoped.exec_statements(body)
//! })
//! ```

use std::ops::{Deref, DerefMut};

use super::Evaluator;
use crate::ScopeMark;

/// Guard over an evaluator with one extra scope open.
///
/// Derefs to [`Evaluator`]; the scope is popped on drop.
pub struct ScopedEvaluator<'guard> {
    evaluator: &'guard mut Evaluator,
    mark: Option<ScopeMark>,
}

impl Drop for ScopedEvaluator<'_> {
    fn drop(&mut self) {
        if let Some(mark) = self.mark.take() {
            self.evaluator.state.pop_scope(mark);
        }
    }
}

impl Deref for ScopedEvaluator<'_> {
    type Target = Evaluator;

    fn deref(&self) -> &Self::Target {
        self.evaluator
    }
}

impl DerefMut for ScopedEvaluator<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.evaluator
    }
}

impl Evaluator {
    /// Open a child of the current scope.
    pub fn scoped(&mut self) -> ScopedEvaluator<'_> {
        let mark = self.state.push_scope();
        ScopedEvaluator {
            evaluator: self,
            mark: Some(mark),
        }
    }

    /// Open a parentless scope, as for a function call.
    pub fn isolated(&mut self) -> ScopedEvaluator<'_> {
        let mark = self.state.push_isolated();
        ScopedEvaluator {
            evaluator: self,
            mark: Some(mark),
        }
    }

    /// Run `f` in a child scope.
    pub fn with_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedEvaluator<'_>) -> T,
    {
        let mut scoped = self.scoped();
        f(&mut scoped)
    }

    /// Run `f` in a parentless scope.
    pub fn with_isolated_scope<T, F>(&mut self, f: F) -> T
    where
        F: FnOnce(&mut ScopedEvaluator<'_>) -> T,
    {
        let mut scoped = self.isolated();
        f(&mut scoped)
    }
}
