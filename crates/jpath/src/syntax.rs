//! Source syntaxes accepted by the loader and the comment-stripping pre-pass.
use std::borrow::Cow;

const COMMENT: u8 = b'#';
const LINE_SEPARATOR: u8 = b'\n';

/// The syntax of the source handed to the loader.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Syntax {
    /// Plain JSON, passed to the decoder as is.
    #[default]
    Json,
    /// JSON preceded or interleaved with comment lines.
    ///
    /// Every line that contains `#` is dropped in its entirety, as is every empty line.
    /// The marker is not an inline comment: a `#` inside a string value removes the whole line
    /// that holds it, which usually surfaces as a decode error or a missing key.
    JsonWithComments,
}

impl Syntax {
    /// Prepare `source` for decoding according to this syntax.
    #[must_use]
    pub fn preprocess<'a>(self, source: &'a [u8]) -> Cow<'a, [u8]> {
        match self {
            Syntax::Json => Cow::Borrowed(source),
            Syntax::JsonWithComments => Cow::Owned(strip_comments(source)),
        }
    }
}

/// Remove empty lines and lines containing `#` from `source`.
///
/// Surviving lines are re-joined with `\n`.
///
/// ```rust
/// let stripped = jpath::strip_comments(b"#\n# profile.conf\n\n{\"name\": \"John Smith\"}\n");
/// assert_eq!(stripped, b"{\"name\": \"John Smith\"}");
/// ```
#[must_use]
pub fn strip_comments(source: &[u8]) -> Vec<u8> {
    let mut output = Vec::with_capacity(source.len());
    let mut dropped = 0_usize;
    for line in source.split(|byte| *byte == LINE_SEPARATOR) {
        if line.is_empty() || line.contains(&COMMENT) {
            dropped += 1;
            continue;
        }
        if !output.is_empty() {
            output.push(LINE_SEPARATOR);
        }
        output.extend_from_slice(line);
    }
    tracing::trace!(dropped, "Stripped comment and blank lines");
    output
}
