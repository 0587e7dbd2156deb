//! Undo/redo for slide edits.
//!
//! Every mutating command records a snapshot of the slide it is about to
//! change. Undo hands that snapshot back and keeps the state it replaces on
//! the redo stack, so undo and redo are symmetric swaps. Both stacks are
//! bounded; the oldest entries fall off first.

use std::collections::VecDeque;

use crate::slide::Slide;

/// Default number of undo steps kept per deck.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// A slide state together with where it lives and what changed it.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// 1-based slide number in the owning deck.
    pub slide_number: usize,
    pub slide: Slide,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: VecDeque<Snapshot>,
    max_depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl History {
    /// History keeping at most `max_depth` undo steps (minimum 1).
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: VecDeque::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Remember `slide` as it is before an edit. Clears the redo stack.
    pub fn record(&mut self, slide_number: usize, slide: &Slide, description: impl Into<String>) {
        self.redo.clear();
        let description = description.into();
        tracing::debug!(slide_number, %description, "recorded undo step");
        push_bounded(
            &mut self.undo,
            Snapshot {
                slide_number,
                slide: slide.clone(),
                description,
            },
            self.max_depth,
        );
    }

    /// Slide number the next undo applies to.
    pub fn next_undo_slide(&self) -> Option<usize> {
        self.undo.back().map(|s| s.slide_number)
    }

    /// Slide number the next redo applies to.
    pub fn next_redo_slide(&self) -> Option<usize> {
        self.redo.back().map(|s| s.slide_number)
    }

    /// Pop the latest snapshot. `current` is the slide as it is now, which
    /// becomes the matching redo step.
    pub fn undo(&mut self, current: &Slide) -> Option<Snapshot> {
        let snapshot = self.undo.pop_back()?;
        push_bounded(
            &mut self.redo,
            Snapshot {
                slide_number: snapshot.slide_number,
                slide: current.clone(),
                description: snapshot.description.clone(),
            },
            self.max_depth,
        );
        Some(snapshot)
    }

    /// Reverse of [`History::undo`].
    pub fn redo(&mut self, current: &Slide) -> Option<Snapshot> {
        let snapshot = self.redo.pop_back()?;
        push_bounded(
            &mut self.undo,
            Snapshot {
                slide_number: snapshot.slide_number,
                slide: current.clone(),
                description: snapshot.description.clone(),
            },
            self.max_depth,
        );
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.undo.back().map(|s| s.description.as_str())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo.back().map(|s| s.description.as_str())
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<Snapshot>, snapshot: Snapshot, max_depth: usize) {
    stack.push_back(snapshot);
    while stack.len() > max_depth {
        stack.pop_front();
    }
}
