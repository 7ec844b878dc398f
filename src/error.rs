//! Errors surfaced by line indexing.

use thiserror::Error;

/// Failure modes of building a line table.
///
/// Both variants mean the counting pass and the extraction pass disagreed about
/// how many lines the buffer holds. The table is never returned in that case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Extraction tried to emit a record beyond the preallocated table.
    #[error("line extraction overran the table: {counted} lines were counted")]
    TableOverrun {
        /// Lines found by the counting pass.
        counted: usize,
    },

    /// Extraction finished with fewer records than were counted.
    #[error("line extraction produced {extracted} lines but {counted} were counted")]
    LineCountMismatch {
        /// Lines found by the counting pass.
        counted: usize,
        /// Records actually written by the extraction pass.
        extracted: usize,
    },
}

pub type Result<T> = std::result::Result<T, IndexError>;
