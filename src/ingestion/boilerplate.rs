//! Front-matter removal for Project Gutenberg texts.
//!
//! Distributed eBooks open with a licence banner and a block of catalogue
//! metadata. Everything up to and including the start marker line, plus a
//! fixed number of lines after it, is dropped.

/// Marker that opens the substantive content of a Gutenberg eBook.
pub const START_MARKER: &str = "*** START OF THE PROJECT GUTENBERG EBOOK";

/// Number of lines skipped after the marker line (title, author, blank lines).
pub const HEADER_LINES_AFTER_MARKER: usize = 10;

/// Removes the distributor front-matter from `text`.
///
/// Texts without the marker are returned unchanged. This is a fixed-offset
/// heuristic: the skipped lines are not inspected.
pub fn strip_front_matter(text: &str) -> &str {
    let Some(start_idx) = text.find(START_MARKER) else {
        return text;
    };

    let Some(marker_line_end) = text[start_idx..].find('\n') else {
        return text;
    };

    let mut body = &text[start_idx + marker_line_end + 1..];
    for _ in 0..HEADER_LINES_AFTER_MARKER {
        match body.find('\n') {
            Some(idx) => body = &body[idx + 1..],
            None => break,
        }
    }

    body
}
