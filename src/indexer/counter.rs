//! Line counting pass. Counts `\n` bytes with `memchr` and corrects for an
//! unterminated final line.
//!
//! Counting is associative over disjoint ranges, so large buffers are split into
//! contiguous chunks that rayon counts independently. Each worker returns its own
//! partial count and the partials are summed once all workers join.

#[cfg(feature = "parallel")]
use log::trace;
use memchr::memchr_iter;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::IndexerConfig;

/// Number of lines in `buffer`: one per `\n`, plus one if the last byte is not `\n`.
///
/// An empty buffer has zero lines.
pub fn count_lines(buffer: &[u8], config: &IndexerConfig) -> usize {
    match buffer.last() {
        None => 0,
        Some(&b'\n') => count_newlines(buffer, config),
        Some(_) => count_newlines(buffer, config) + 1,
    }
}

/// Number of `\n` bytes in `buffer`, sequential or parallel per `config`.
#[cfg(feature = "parallel")]
pub fn count_newlines(buffer: &[u8], config: &IndexerConfig) -> usize {
    if config.use_parallel(buffer.len()) {
        count_newlines_parallel(buffer, config)
    } else {
        count_chunk(buffer)
    }
}

/// Number of `\n` bytes in `buffer`. Built without `parallel`, always sequential.
#[cfg(not(feature = "parallel"))]
pub fn count_newlines(buffer: &[u8], _config: &IndexerConfig) -> usize {
    count_chunk(buffer)
}

/// Newlines in a single contiguous range.
#[inline(always)]
pub fn count_chunk(chunk: &[u8]) -> usize {
    memchr_iter(b'\n', chunk).count()
}

#[cfg(feature = "parallel")]
fn count_newlines_parallel(buffer: &[u8], config: &IndexerConfig) -> usize {
    let workers = rayon::current_num_threads();
    let chunk_size = config.chunk_size(buffer.len(), workers);
    trace!(
        "counter: {} bytes over {} workers, chunk_size={}",
        buffer.len(),
        workers,
        chunk_size
    );
    buffer.par_chunks(chunk_size).map(count_chunk).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq() -> IndexerConfig {
        IndexerConfig::sequential()
    }

    #[test]
    fn empty_buffer_has_no_lines() {
        assert_eq!(count_lines(b"", &seq()), 0);
    }

    #[test]
    fn terminated_lines() {
        assert_eq!(count_lines(b"a,b\nc,d\n", &seq()), 2);
        assert_eq!(count_lines(b"\n", &seq()), 1);
        assert_eq!(count_lines(b"\n\n\n", &seq()), 3);
    }

    #[test]
    fn unterminated_final_line_counts() {
        assert_eq!(count_lines(b"a,b\nc,d", &seq()), 2);
        assert_eq!(count_lines(b"x", &seq()), 1);
    }

    #[test]
    fn crlf_counts_once_per_line() {
        assert_eq!(count_lines(b"a,b\r\nc,d\r\n", &seq()), 2);
    }

    #[test]
    fn parallel_matches_sequential() {
        let mut buffer = Vec::new();
        for i in 0..5000 {
            buffer.extend_from_slice(format!("{i},{}\n", i * 7).as_bytes());
        }
        buffer.extend_from_slice(b"tail");
        let parallel = IndexerConfig::new()
            .with_parallel_threshold(0)
            .with_min_chunk_size(17);
        assert_eq!(count_lines(&buffer, &parallel), 5001);
        assert_eq!(count_lines(&buffer, &seq()), 5001);
    }
}
