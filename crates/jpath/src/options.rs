use std::path::Path;

use crate::{Document, Error, Syntax};

/// Configuration options for loading a [`Document`].
///
/// ```rust
/// # fn example() -> Result<(), jpath::Error> {
/// let document = jpath::options()
///     .strip_comments(true)
///     .parse_from_str("#\n# /etc/profile.conf\n#\n{\"organizer\": {\"age\": 33}}")?;
///
/// assert_eq!(document.get_key_string_by_path("organizer/age")?, "33");
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    syntax: Syntax,
}

impl ParseOptions {
    /// Create a new [`ParseOptions`] with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
    /// Set the syntax of the sources to parse.
    #[must_use]
    pub fn syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }
    /// Drop comment and blank lines before decoding.
    ///
    /// Shorthand for [`Syntax::JsonWithComments`] (or [`Syntax::Json`] when `false`).
    #[must_use]
    pub fn strip_comments(self, yes: bool) -> Self {
        self.syntax(if yes {
            Syntax::JsonWithComments
        } else {
            Syntax::Json
        })
    }
    /// Create an empty [`Document`] using these options.
    #[must_use]
    pub fn document(self) -> Document {
        Document::with_syntax(self.syntax)
    }
    /// Parse a file into a new [`Document`] using these options.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON after pre-processing.
    pub fn parse_from_file(self, file: impl AsRef<Path>) -> Result<Document, Error> {
        let mut document = self.document();
        document.parse_from_file(file)?;
        Ok(document)
    }
    /// Parse a string into a new [`Document`] using these options.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not valid JSON after pre-processing.
    pub fn parse_from_str(self, source: &str) -> Result<Document, Error> {
        self.parse_from_slice(source.as_bytes())
    }
    /// Parse bytes into a new [`Document`] using these options.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not valid JSON after pre-processing.
    pub fn parse_from_slice(self, source: &[u8]) -> Result<Document, Error> {
        let mut document = self.document();
        document.parse_from_slice(source)?;
        Ok(document)
    }
}
