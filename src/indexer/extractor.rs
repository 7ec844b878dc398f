//! Line extraction pass. Walks the buffer once, front to back, and records the
//! `(offset, len)` of every line into a table sized by the counting pass.
//!
//! `\n` and `\r` both end a line. A `\r` also swallows the byte right after it,
//! which is the `\n` of a CRLF pair. That byte is skipped without being inspected,
//! so a bare `\r` followed by content yields a line the counter never saw and the
//! count check rejects the buffer. This holds at the end of the buffer too: a final
//! `\r` plus one swallowed byte still gets an (empty) trailing record. Only a `\r`
//! that is itself the last byte ends the buffer without a trailing record.

use memchr::memchr2;

use crate::error::{IndexError, Result};
use crate::indexer::table::{LineRecord, LineTable};

/// Fills a table of exactly `counted` records from `buffer`.
///
/// Fails instead of growing or truncating the table when the records found
/// disagree with `counted`.
pub fn extract_lines(buffer: &[u8], counted: usize) -> Result<LineTable> {
    let len = buffer.len();
    let mut records: Vec<LineRecord> = Vec::with_capacity(counted);
    let mut emit = |offset: usize, line_len: usize| -> Result<()> {
        if records.len() == counted {
            return Err(IndexError::TableOverrun { counted });
        }
        records.push(LineRecord::new(offset as u64, line_len as u64));
        Ok(())
    };

    let mut cursor = 0usize;
    let mut ends_on_cr = false;
    while let Some(rel) = memchr2(b'\n', b'\r', &buffer[cursor..]) {
        let i = cursor + rel;
        emit(cursor, i - cursor)?;
        let last = if buffer[i] == b'\r' { i + 1 } else { i };
        // A `\r` in the last byte would skip past the end.
        ends_on_cr = last >= len;
        cursor = (last + 1).min(len);
    }

    if !ends_on_cr && buffer.last().is_some_and(|&b| b != b'\n') {
        emit(cursor, len - cursor)?;
    }

    if records.len() != counted {
        return Err(IndexError::LineCountMismatch {
            counted,
            extracted: records.len(),
        });
    }
    Ok(LineTable::from_records(records))
}
