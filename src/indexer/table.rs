//! Line table: one `(offset, len)` record per line, in document order.

use std::ops::Range;

/// Byte range of one line, excluding its delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineRecord {
    /// Index of the first byte of the line within the buffer.
    pub offset: u64,
    /// Content bytes in the line, delimiter not included.
    pub len: u64,
}

impl LineRecord {
    #[inline(always)]
    pub fn new(offset: u64, len: u64) -> Self {
        Self { offset, len }
    }

    /// Exclusive end offset of the line content. Saturates at `u64::MAX`.
    #[inline(always)]
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.len)
    }

    #[inline(always)]
    pub fn byte_range(&self) -> Range<usize> {
        self.offset as usize..self.end() as usize
    }
}

impl From<LineRecord> for (u64, u64) {
    fn from(record: LineRecord) -> Self {
        (record.offset, record.len)
    }
}

/// Ordered line records for one buffer. Offsets are strictly increasing and
/// records never overlap; the gaps between them are delimiter bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineTable {
    records: Vec<LineRecord>,
}

impl LineTable {
    pub(crate) fn from_records(records: Vec<LineRecord>) -> Self {
        Self { records }
    }

    /// Number of lines.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, line: usize) -> Option<LineRecord> {
        self.records.get(line).copied()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[LineRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRecord> {
        self.records.iter()
    }

    /// Content bytes of `line` within `buffer`, or `None` if the line does not exist
    /// or `buffer` is shorter than the one the table was built from.
    pub fn line_bytes<'a>(&self, buffer: &'a [u8], line: usize) -> Option<&'a [u8]> {
        let record = self.records.get(line)?;
        buffer.get(record.byte_range())
    }

    /// Index of the line whose record starts at or before `pos`.
    ///
    /// A position inside a delimiter maps to the line that delimiter terminates.
    /// Returns `None` for an empty table.
    pub fn line_containing(&self, pos: u64) -> Option<usize> {
        if self.records.is_empty() {
            return None;
        }
        let i = self.records.partition_point(|r| r.offset <= pos);
        Some(i.saturating_sub(1))
    }

    /// `(offset, len)` pairs for lines in `[start, end)`, clamped to the table.
    pub fn ranges(&self, start: usize, end: usize) -> Vec<(u64, u64)> {
        let end = end.min(self.records.len());
        let start = start.min(end);
        self.records[start..end]
            .iter()
            .map(|&record| record.into())
            .collect()
    }

    /// Row-major `N x 2` layout: `[offset0, len0, offset1, len1, ...]`.
    pub fn to_flat(&self) -> Vec<u64> {
        let mut flat = Vec::with_capacity(self.records.len() * 2);
        for record in &self.records {
            flat.push(record.offset);
            flat.push(record.len);
        }
        flat
    }

    pub fn into_records(self) -> Vec<LineRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a LineTable {
    type Item = &'a LineRecord;
    type IntoIter = std::slice::Iter<'a, LineRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
