//! Builds a random-access line index over an in-memory buffer.
//!
//! Two passes: the counter sizes the table (in parallel for large buffers), then
//! the extractor fills it front to back. The passes must agree on the line count;
//! if they don't, the caller gets an [`IndexError`](crate::IndexError) and no table.

pub mod counter;
pub mod extractor;
pub mod table;

use log::{debug, warn};

use crate::config::IndexerConfig;
use crate::error::Result;
use counter::count_lines;
use extractor::extract_lines;
use table::LineTable;

/// Indexes `buffer` with the default configuration.
pub fn build_line_index(buffer: &[u8]) -> Result<LineTable> {
    build_line_index_with(buffer, &IndexerConfig::default())
}

/// Indexes `buffer`: count, allocate exactly that many records, fill, verify.
pub fn build_line_index_with(buffer: &[u8], config: &IndexerConfig) -> Result<LineTable> {
    if buffer.is_empty() {
        debug!("indexer: empty buffer, no lines");
        return Ok(LineTable::default());
    }

    let counted = count_lines(buffer, config);
    debug!(
        "indexer: {} bytes, {} lines counted ({})",
        buffer.len(),
        counted,
        if config.use_parallel(buffer.len()) { "parallel" } else { "sequential" }
    );

    extract_lines(buffer, counted).inspect_err(|e| warn!("indexer: {e}"))
}
