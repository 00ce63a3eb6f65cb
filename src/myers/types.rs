/// Alias for a vector of Edit
/// Result of the Myers diff function
pub type EditScript = Vec<Edit>;

/// A single step of an edit script.
///
/// Positions always refer to the original, top-level sequences passed to
/// `diff`, never to an intermediate sub-slice. `Delete` removes the element
/// at `position_old` in the left sequence. `Insert` places the element found
/// at `position_new` in the right sequence immediately before `position_old`
/// in the left sequence; `position_old` may equal the left length, meaning
/// "append".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    Delete {
        position_old: usize,
    },
    Insert {
        position_old: usize,
        position_new: usize,
    },
}

impl Edit {
    pub fn is_insert(&self) -> bool {
        matches!(self, Edit::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Edit::Delete { .. })
    }

    /// The anchor of this edit in the left sequence.
    pub fn position_old(&self) -> usize {
        match self {
            Edit::Delete { position_old } => *position_old,
            Edit::Insert { position_old, .. } => *position_old,
        }
    }
}

/// Counts the inserts and deletes in a script, in that order.
pub fn tally(script: &[Edit]) -> (usize, usize) {
    let inserts = script.iter().filter(|e| e.is_insert()).count();
    (inserts, script.len() - inserts)
}
