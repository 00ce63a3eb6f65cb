use thiserror::Error;

use crate::myers::Edit;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplyError {
    #[error("operation anchored at {position} precedes the cursor at {cursor}")]
    OutOfOrder { position: usize, cursor: usize },
    #[error("operation anchored at {position} lies past the end of the old sequence ({len})")]
    PastEnd { position: usize, len: usize },
    #[error("delete at {position} has no element to remove ({len})")]
    DeletePastEnd { position: usize, len: usize },
    #[error("insert draws from {position} past the end of the new sequence ({len})")]
    InsertSourcePastEnd { position: usize, len: usize },
}

/// Replays an edit script against `old`, drawing inserted elements out of
/// `new` by their recorded `position_new`.
///
/// A script produced by [`crate::myers::diff`] on the same pair always
/// applies cleanly and yields `new` exactly. Errors are reserved for
/// hand-built or corrupted scripts whose positions run backwards or out of
/// range.
pub fn apply<T: Clone>(old: &[T], new: &[T], script: &[Edit]) -> Result<Vec<T>, ApplyError> {
    let mut result = Vec::with_capacity(new.len());
    let mut cursor = 0;

    for edit in script {
        let position = edit.position_old();
        if position < cursor {
            return Err(ApplyError::OutOfOrder { position, cursor });
        }
        if position > old.len() {
            return Err(ApplyError::PastEnd { position, len: old.len() });
        }

        // elements untouched between the cursor and this edit carry over
        result.extend(old[cursor..position].iter().cloned());
        cursor = position;

        match edit {
            Edit::Delete { .. } => {
                if cursor == old.len() {
                    return Err(ApplyError::DeletePastEnd { position, len: old.len() });
                }
                cursor += 1;
            }
            Edit::Insert { position_new, .. } => {
                let element = new.get(*position_new).ok_or(ApplyError::InsertSourcePastEnd {
                    position: *position_new,
                    len: new.len(),
                })?;
                result.push(element.clone());
            }
        }
    }

    result.extend(old[cursor..].iter().cloned());
    Ok(result)
}
