//! Which steps the cook has marked done.

use std::collections::BTreeSet;

/// Completed step positions for one view of a recipe.
///
/// Indices are not checked against the recipe: toggling a step that does not
/// exist is accepted and has no visible effect.
#[derive(Debug, Clone, Default)]
pub struct CompletionTracker {
    completed: BTreeSet<usize>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a step between done and not done. Returns the new state.
    pub fn toggle(&mut self, step_index: usize) -> bool {
        if self.completed.remove(&step_index) {
            false
        } else {
            self.completed.insert(step_index);
            true
        }
    }

    pub fn is_complete(&self, step_index: usize) -> bool {
        self.completed.contains(&step_index)
    }

    /// Completed step positions in ascending order.
    pub fn completed_steps(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }
}
