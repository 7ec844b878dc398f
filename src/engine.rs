//! Lookup session: one resident buffer and its line table.
//!
//! Hosts that load a file once and then read many lines at random keep both the
//! bytes and the index here. Loading new bytes drops the previous index.

use log::debug;

use crate::config::IndexerConfig;
use crate::error::Result;
use crate::indexer::build_line_index_with;
use crate::indexer::table::LineTable;

/// Resident buffer plus the index built over it.
#[derive(Debug, Default)]
pub struct LookupEngine {
    /// Bytes being indexed. A host may write into them through `get_buffer_pointer`.
    buffer: Vec<u8>,
    /// Index over `buffer`, present once `build_index` has succeeded.
    table: Option<LineTable>,
}

impl LookupEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the buffer, sizes it to `size` bytes, and returns a pointer to
    /// the start of the write region. The host writes there, then calls `commit`.
    ///
    /// Do not hold on to the pointer: any later call that may reallocate the
    /// buffer invalidates it.
    pub fn get_buffer_pointer(&mut self, size: usize) -> *mut u8 {
        self.table = None;
        self.buffer.clear();
        // Zero-filled: `commit` never exposes uninitialized bytes.
        self.buffer.resize(size, 0);
        self.buffer.as_mut_ptr()
    }

    /// Marks the first `len` bytes of the write region as the buffer content.
    /// `len` is clamped to the size passed to `get_buffer_pointer`.
    pub fn commit(&mut self, len: usize) -> &[u8] {
        self.table = None;
        self.buffer.truncate(len);
        &self.buffer
    }

    /// Replaces the buffer with a copy of `bytes`.
    pub fn load(&mut self, bytes: &[u8]) {
        self.table = None;
        self.buffer.clear();
        self.buffer.extend_from_slice(bytes);
    }

    /// Indexes the resident buffer and returns its line count.
    ///
    /// On failure the previous index stays dropped; lookups see no lines.
    pub fn build_index(&mut self, config: &IndexerConfig) -> Result<usize> {
        self.table = None;
        let table = build_line_index_with(&self.buffer, config)?;
        let lines = table.len();
        debug!("engine: indexed {} bytes into {} lines", self.buffer.len(), lines);
        self.table = Some(table);
        Ok(lines)
    }

    /// The current index, if one has been built.
    #[inline(always)]
    pub fn table(&self) -> Option<&LineTable> {
        self.table.as_ref()
    }

    /// Number of indexed lines; zero before indexing.
    #[inline(always)]
    pub fn line_count(&self) -> usize {
        self.table.as_ref().map_or(0, LineTable::len)
    }

    /// Content bytes of line `line`.
    pub fn line(&self, line: usize) -> Option<&[u8]> {
        self.table.as_ref()?.line_bytes(&self.buffer, line)
    }

    /// `(offset, len)` pairs for lines in `[start, end)`, clamped to the index.
    pub fn get_line_ranges(&self, start: usize, end: usize) -> Vec<(u64, u64)> {
        self.table
            .as_ref()
            .map(|table| table.ranges(start, end))
            .unwrap_or_default()
    }

    /// Line index covering byte `pos`, or `None` past the end of the buffer.
    pub fn line_at_offset(&self, pos: u64) -> Option<usize> {
        if pos >= self.buffer.len() as u64 {
            return None;
        }
        self.table.as_ref()?.line_containing(pos)
    }

    #[inline(always)]
    pub fn buffer_len(&self) -> usize {
        self.buffer.len()
    }

    /// Drops the buffer and the index, releasing their memory.
    pub fn clear(&mut self) {
        self.buffer = Vec::new();
        self.table = None;
    }
}
