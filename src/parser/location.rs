//! Mapping sqlparser token locations back into the source text

use sqlparser::tokenizer::Location;

/// Convert a (1-based line, 1-based column) `Location` to a byte offset in `source`.
///
/// Columns count characters, not bytes, so multi-byte text before the location is
/// accounted for. Returns `None` for the empty location (line 0) or a location that
/// lies outside `source`.
pub fn location_to_byte_offset(source: &str, location: Location) -> Option<usize> {
    let line = usize::try_from(location.line).ok()?.checked_sub(1)?;
    let column = usize::try_from(location.column).ok()?.checked_sub(1)?;

    let line_start = if line == 0 {
        0
    } else {
        source.match_indices('\n').nth(line - 1)?.0 + 1
    };

    let rest = &source[line_start..];
    rest.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(rest.len()))
        .nth(column)
        .map(|i| line_start + i)
}
