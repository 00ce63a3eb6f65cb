//! Minimal insert/delete edit scripts between sequences, computed with the
//! linear-space bisection form of Myers' diff algorithm.
//!
//! The engine splits the two sequences at a "middle snake", found by
//! running forward and reverse searches over the edit graph until they
//! meet, then solves the two halves recursively. Auxiliary space stays in
//! O(min(n, m)) and time in O(min(n, m) * D), where D is the number of
//! differences. Script positions always refer to the sequences as passed
//! by the caller.
//!
//! ```
//! use midsnake::{apply, diff};
//!
//! let old = vec![1, 2, 3];
//! let new = vec![1, 3, 4];
//! let script = diff(&old, &new);
//! assert_eq!(script.len(), 2);
//! assert_eq!(apply(&old, &new, &script).unwrap(), new);
//! ```

pub mod myers;
pub mod patch;

pub use myers::{diff, diff_from, diff_lines, distance, Edit, EditScript};
pub use patch::{apply, ApplyError};
