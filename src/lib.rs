//! Random-access line index over in-memory delimited text (e.g. a CSV file read
//! whole). Produces one `(offset, length)` record per line so any line can be
//! sliced out without rescanning the buffer.
//!
//! The indexing core lives in [`indexer`]. This file is the FFI layer for JS:
//! a stateless `create_lookup`, plus session exports over a global
//! [`LookupEngine`] for load-once, read-many use.

use once_cell::sync::Lazy;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod error;
pub mod indexer;

pub use config::IndexerConfig;
pub use engine::LookupEngine;
pub use error::IndexError;
pub use indexer::table::{LineRecord, LineTable};
pub use indexer::{build_line_index, build_line_index_with};

/// Global session. Single-threaded WASM implies one resident buffer at a time.
static ENGINE: Lazy<RwLock<LookupEngine>> = Lazy::new(|| RwLock::new(LookupEngine::new()));

/// Converts `(offset, len)` pairs into a JS array of two-element arrays.
fn pairs_to_js(pairs: impl IntoIterator<Item = (u64, u64)>) -> JsValue {
    let arr = js_sys::Array::new();
    for (offset, len) in pairs {
        let pair = js_sys::Array::new();
        pair.push(&JsValue::from(offset as f64));
        pair.push(&JsValue::from(len as f64));
        arr.push(&pair.into());
    }
    arr.into()
}

/// Indexes `data` and returns its lines as `[[offset, length], ...]`.
/// Nothing is retained between calls.
#[wasm_bindgen]
pub fn create_lookup(data: &[u8]) -> Result<JsValue, JsError> {
    let table = build_line_index(data)?;
    Ok(pairs_to_js(table.iter().map(|&record| record.into())))
}

/// Same table as `create_lookup` in flat row-major form:
/// `[offset0, length0, offset1, length1, ...]`.
#[wasm_bindgen]
pub fn create_lookup_flat(data: &[u8]) -> Result<Vec<f64>, JsError> {
    let table = build_line_index(data)?;
    Ok(table.to_flat().into_iter().map(|v| v as f64).collect())
}

/// Returns a pointer to a `size`-byte write region in the session buffer. JS writes
/// the file there, then calls `index_buffer(len)` with the number of bytes written.
///
/// **Important:** Do not cache this pointer in JS. Any later session call may
/// reallocate the buffer and invalidate it.
#[wasm_bindgen]
pub fn get_buffer_pointer(size: usize) -> *mut u8 {
    ENGINE
        .write()
        .expect("engine lock")
        .get_buffer_pointer(size)
}

/// Indexes the first `len` bytes JS wrote into the session buffer. Returns the
/// line count.
#[wasm_bindgen]
pub fn index_buffer(len: usize) -> Result<usize, JsError> {
    let mut engine = ENGINE.write().expect("engine lock");
    engine.commit(len);
    Ok(engine.build_index(&IndexerConfig::default())?)
}

/// Copies `data` into the session buffer and indexes it. Returns the line count.
#[wasm_bindgen]
pub fn load_and_index(data: &[u8]) -> Result<usize, JsError> {
    let mut engine = ENGINE.write().expect("engine lock");
    engine.load(data);
    Ok(engine.build_index(&IndexerConfig::default())?)
}

/// Number of lines in the session index.
#[wasm_bindgen]
pub fn get_line_count() -> usize {
    ENGINE.read().expect("engine lock").line_count()
}

/// `[[offset, length], ...]` for session lines in `[start, end)`.
#[wasm_bindgen]
pub fn get_line_byte_ranges(start: usize, end: usize) -> JsValue {
    let engine = ENGINE.read().expect("engine lock");
    pairs_to_js(engine.get_line_ranges(start, end))
}

/// Raw bytes of session line `line`, or `undefined` if there is no such line.
#[wasm_bindgen]
pub fn get_line(line: usize) -> Option<Vec<u8>> {
    ENGINE
        .read()
        .expect("engine lock")
        .line(line)
        .map(<[u8]>::to_vec)
}

/// Index of the session line covering byte `pos`, or `undefined` past the end.
#[wasm_bindgen]
pub fn line_at_offset(pos: f64) -> Option<usize> {
    if pos.is_nan() || pos < 0.0 {
        return None;
    }
    ENGINE.read().expect("engine lock").line_at_offset(pos as u64)
}

/// Clears the session buffer and index. Call between files to free memory.
#[wasm_bindgen]
pub fn clear() {
    ENGINE.write().expect("engine lock").clear();
}
