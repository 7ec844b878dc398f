use csv_lookup::{build_line_index, build_line_index_with, IndexError, IndexerConfig, LineTable};
use pretty_assertions::assert_eq;

fn pairs(table: &LineTable) -> Vec<(u64, u64)> {
    table.iter().map(|&record| record.into()).collect()
}

fn index(buffer: &[u8]) -> Vec<(u64, u64)> {
    pairs(&build_line_index(buffer).expect("index builds"))
}

#[test]
fn lf_terminated() {
    assert_eq!(index(b"a,b\nc,d\n"), vec![(0, 3), (4, 3)]);
}

#[test]
fn unterminated_last_line() {
    assert_eq!(index(b"a,b\nc,d"), vec![(0, 3), (4, 3)]);
}

#[test]
fn crlf_terminated() {
    assert_eq!(index(b"a,b\r\nc,d\r\n"), vec![(0, 3), (5, 3)]);
}

#[test]
fn single_newline_is_one_empty_line() {
    assert_eq!(index(b"\n"), vec![(0, 0)]);
}

#[test]
fn empty_buffer_gives_empty_table() {
    assert_eq!(build_line_index(b""), Ok(LineTable::default()));
}

#[test]
fn mixed_endings_and_blank_lines() {
    let buffer = b"h1,h2\r\n\r\n1,2\n\n3,4\r\nlast";
    assert_eq!(
        index(buffer),
        vec![(0, 5), (7, 0), (9, 3), (13, 0), (14, 3), (19, 4)]
    );
}

#[test]
fn lines_slice_back_out_of_buffer() {
    let buffer = b"name,qty\r\nbolt,4\r\nnut,12\r\n";
    let table = build_line_index(buffer).expect("index builds");
    let lines: Vec<&[u8]> = (0..table.len())
        .filter_map(|i| table.line_bytes(buffer, i))
        .collect();
    assert_eq!(lines, vec![&b"name,qty"[..], &b"bolt,4"[..], &b"nut,12"[..]]);
}

#[test]
fn bare_cr_is_rejected_not_truncated() {
    assert_eq!(
        build_line_index(b"a\rb\nc\n"),
        Err(IndexError::TableOverrun { counted: 2 })
    );
}

#[test]
fn trailing_cr_does_not_read_past_end() {
    assert_eq!(index(b"a,b\nc,d\r"), vec![(0, 3), (4, 3)]);
}

#[test]
fn large_buffer_parallel_count() {
    let mut buffer = Vec::new();
    for i in 0..20_000u32 {
        buffer.extend_from_slice(format!("{i},{},row{i}\r\n", i % 97).as_bytes());
    }
    let config = IndexerConfig::new()
        .with_parallel_threshold(1024)
        .with_min_chunk_size(4096);
    let table = build_line_index_with(&buffer, &config).expect("index builds");
    assert_eq!(table.len(), 20_000);
    assert_eq!(table.line_bytes(&buffer, 12_345), Some(&b"12345,26,row12345"[..]));
    assert_eq!(table, build_line_index_with(&buffer, &IndexerConfig::sequential()).unwrap());
}

#[test]
fn cr_swallowing_final_byte_is_rejected() {
    assert_eq!(
        build_line_index(b"a\rb"),
        Err(IndexError::TableOverrun { counted: 1 })
    );
    assert_eq!(
        build_line_index(b"a\nb\rc"),
        Err(IndexError::TableOverrun { counted: 2 })
    );
}
