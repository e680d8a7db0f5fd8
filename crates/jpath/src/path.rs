//! Slash-delimited paths.
//!
//! Segments are literal object keys: there is no escaping and no array indexing. Empty
//! segments produced by leading, trailing or repeated separators are kept as empty keys.

pub(crate) const SEPARATOR: char = '/';

/// Split `path` into its segments.
///
/// Never yields an empty sequence: an empty path is a single empty segment.
pub(crate) fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split(SEPARATOR)
}

/// Rebuild the full path from its segments for diagnostics.
pub(crate) fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let capacity = segments
        .iter()
        .map(|segment| segment.as_ref().len() + 1)
        .sum();
    let mut path = String::with_capacity(capacity);
    for (idx, segment) in segments.iter().enumerate() {
        if idx > 0 {
            path.push(SEPARATOR);
        }
        path.push_str(segment.as_ref());
    }
    path
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::{join, split};

    #[test_case("organizer/name", &["organizer", "name"]; "nested")]
    #[test_case("name", &["name"]; "single segment")]
    #[test_case("", &[""]; "empty path")]
    #[test_case("/organizer/name", &["", "organizer", "name"]; "leading separator")]
    #[test_case("organizer/", &["organizer", ""]; "trailing separator")]
    #[test_case("a//b", &["a", "", "b"]; "repeated separator")]
    fn splitting(path: &str, expected: &[&str]) {
        assert_eq!(split(path).collect::<Vec<_>>(), expected);
    }

    #[test_case("organizer/name"; "nested")]
    #[test_case("/organizer/name"; "leading separator")]
    #[test_case(""; "empty path")]
    #[test_case("a//b/"; "empty segments")]
    fn join_restores_split(path: &str) {
        let segments: Vec<_> = split(path).collect();
        assert_eq!(join(&segments), path);
    }
}
