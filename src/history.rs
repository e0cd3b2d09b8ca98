//! Linear undo history of serialized canvas snapshots.

/// LIFO stack of data-URL snapshots.
///
/// A snapshot is pushed right before a stroke starts, so the top of the stack is
/// always the canvas as it was before the most recent stroke.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    snapshots: Vec<String>,
    /// Maximum number of snapshots retained (0 = unlimited)
    max_depth: usize,
}

impl UndoHistory {
    pub fn new(max_depth: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            max_depth,
        }
    }

    /// Appends a snapshot, dropping the oldest entry when the depth limit is reached.
    pub fn push(&mut self, snapshot: String) {
        if self.max_depth > 0 && self.snapshots.len() >= self.max_depth {
            let excess = self.snapshots.len() + 1 - self.max_depth;
            self.snapshots.drain(..excess);
            log::debug!("Undo history full, dropped {excess} oldest snapshot(s)");
        }
        self.snapshots.push(snapshot);
    }

    /// Removes and returns the most recent snapshot, if any.
    pub fn pop(&mut self) -> Option<String> {
        self.snapshots.pop()
    }

    /// Discards every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
