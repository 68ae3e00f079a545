//! Text search primitives shared by both log formats.

/// Indices of every line containing `query` as a substring, ascending.
///
/// An empty result means "not found" and is a valid outcome; callers that
/// require the marker turn it into `MissingMarker`.
pub fn find_indices<S: AsRef<str>>(query: &str, lines: &[S]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.as_ref().contains(query))
        .map(|(i, _)| i)
        .collect()
}

/// Token-form labeled value lookup.
///
/// Finds the first token containing `label` as a substring and returns its
/// index together with the value of the *following* token. The value is the
/// first character of that token read as a single decimal digit, so a token
/// `"128"` yields 1. This truncation matches the recording subsystem's
/// established readers and is kept verbatim; multi-digit device revisions
/// would be misread if they ever occur.
pub fn labeled_digit<S: AsRef<str>>(label: &str, tokens: &[S]) -> Option<(usize, u32)> {
    let index = tokens.iter().position(|t| t.as_ref().contains(label))?;
    let value = tokens
        .get(index + 1)?
        .as_ref()
        .chars()
        .next()?
        .to_digit(10)?;
    Some((index, value))
}

/// Line-form labeled value lookup: `"Label: 1234"` style.
///
/// Returns the integer after the first colon when `label` occurs in `line`,
/// `None` otherwise. Absence is not an error here.
pub fn labeled_int_after_colon(label: &str, line: &str) -> Option<i64> {
    if !line.contains(label) {
        return None;
    }
    let (_, rest) = line.split_once(':')?;
    rest.trim().parse().ok()
}
