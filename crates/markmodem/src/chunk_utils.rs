//! UTF-8-safe chunk-splitting helpers for exercising the scanner under
//! arbitrary delivery boundaries. Test support, not part of the public
//! API surface.

/// Split `payload` into approximately equal-sized chunks without breaking
/// UTF-8 code points.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn produce_chunks(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let len = payload.len();
    let chunk_size = len.div_ceil(parts);
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < len {
        let mut end = usize::min(start + chunk_size, len);
        while end < len && !payload.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&payload[start..end]);
        start = end;
    }
    chunks
}

/// Every two-chunk split of `payload` at a character boundary, including
/// the degenerate empty head and empty tail.
pub fn two_way_splits(payload: &str) -> impl Iterator<Item = (&str, &str)> {
    (0..=payload.len())
        .filter(move |&offset| payload.is_char_boundary(offset))
        .map(move |offset| payload.split_at(offset))
}
