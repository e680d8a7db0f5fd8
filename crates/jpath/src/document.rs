use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde_json::Value;

use crate::{path, resolver, Error, Syntax};

/// A parsed JSON document that can be queried with slash-delimited paths.
///
/// A document starts empty, is filled by one of the `parse_from_*` methods and can then be
/// queried any number of times. Lookups borrow the document immutably, so a parsed document
/// can be shared across threads freely.
///
/// ```rust
/// use jpath::Document;
///
/// # fn example() -> Result<(), jpath::Error> {
/// let document: Document = r#"{"organizer": {"name": "John Smith", "age": 33}}"#.parse()?;
///
/// assert_eq!(document.get_key_string_by_path("organizer/name")?, "John Smith");
/// assert_eq!(document.get_key_string_by_path("organizer/age")?, "33");
/// assert!(document
///     .get_key_string_by_path("organizer/missing")
///     .unwrap_err()
///     .is_key_not_found());
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    syntax: Syntax,
    file_name: Option<PathBuf>,
    root: Option<Value>,
}

impl Document {
    /// Create an empty document that expects plain JSON.
    #[must_use]
    pub fn new() -> Document {
        Document::default()
    }

    /// Create an empty document that parses its input with the given syntax.
    #[must_use]
    pub fn with_syntax(syntax: Syntax) -> Document {
        Document {
            syntax,
            ..Document::default()
        }
    }

    /// Parse a plain JSON file into a new document.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain valid JSON.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Document, Error> {
        let mut document = Document::new();
        document.parse_from_file(file)?;
        Ok(document)
    }

    /// Parse plain JSON bytes into a new document.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not valid JSON.
    pub fn from_slice(source: &[u8]) -> Result<Document, Error> {
        let mut document = Document::new();
        document.parse_from_slice(source)?;
        Ok(document)
    }

    /// Read and parse `file`, replacing the current root.
    ///
    /// The file name is recorded before the file is read, so it is available even if reading
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be inspected or read (check
    /// [`std::io::Error::kind`] for [`std::io::ErrorKind::NotFound`]), or [`Error::Decode`] if
    /// its content is not valid JSON.
    pub fn parse_from_file(&mut self, file: impl AsRef<Path>) -> Result<(), Error> {
        let file = file.as_ref();
        self.file_name = Some(file.to_path_buf());
        fs::metadata(file).map_err(|error| Error::io(file, error))?;
        let source = fs::read(file).map_err(|error| Error::io(file, error))?;
        tracing::debug!(file = %file.display(), bytes = source.len(), "Read document");
        self.parse_from_slice(&source)
    }

    /// Parse `source`, replacing the current root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `source` is not valid JSON after pre-processing.
    pub fn parse_from_str(&mut self, source: &str) -> Result<(), Error> {
        self.parse_from_slice(source.as_bytes())
    }

    /// Parse `source` bytes, replacing the current root.
    ///
    /// On failure the current root is kept as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `source` is not valid JSON after pre-processing.
    pub fn parse_from_slice(&mut self, source: &[u8]) -> Result<(), Error> {
        let source = self.syntax.preprocess(source);
        let root = serde_json::from_slice(&source)?;
        tracing::debug!(bytes = source.len(), syntax = ?self.syntax, "Decoded document");
        self.root = Some(root);
        Ok(())
    }

    /// The syntax this document parses its input with.
    #[must_use]
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// The file this document was last loaded from, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// The decoded root value, if anything was parsed.
    #[must_use]
    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    /// Returns `true` if nothing has been parsed into this document yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Resolve `segments` and return the value they point to.
    ///
    /// The value is a string, a number or an object.
    ///
    /// # Errors
    ///
    /// - [`Error::PathNull`] if `segments` is empty.
    /// - [`Error::KeyNotFound`] naming the first segment missing from its object.
    /// - [`Error::KeyTypeInvalid`] naming the segment that reached a boolean, array or null,
    ///   or that was applied to a value which is not an object.
    /// - [`Error::Empty`] if nothing has been parsed yet.
    pub fn get_key_object_by_paths<S: AsRef<str>>(&self, segments: &[S]) -> Result<&Value, Error> {
        resolver::resolve(self.root_or_empty()?, segments)
    }

    /// Resolve `segments` and return the text of the string or number they point to.
    ///
    /// Strings are returned verbatim and numbers in their shortest textual form.
    ///
    /// # Errors
    ///
    /// Same as [`Document::get_key_object_by_paths`], and [`Error::KeyTypeInvalid`] with the
    /// full path joined by `/` if the value is an object.
    pub fn get_key_string_by_paths<S: AsRef<str>>(&self, segments: &[S]) -> Result<String, Error> {
        let value = self.get_key_object_by_paths(segments)?;
        resolver::to_text(value, || path::join(segments))
    }

    /// Split `path` on `/` and resolve it like [`Document::get_key_object_by_paths`].
    ///
    /// Segments are literal keys, so a leading `/` yields an empty first key.
    ///
    /// # Errors
    ///
    /// Same as [`Document::get_key_object_by_paths`].
    pub fn get_key_object_by_path(&self, path: &str) -> Result<&Value, Error> {
        resolver::resolve(self.root_or_empty()?, path::split(path))
    }

    /// Split `path` on `/` and resolve it like [`Document::get_key_string_by_paths`].
    ///
    /// # Errors
    ///
    /// Same as [`Document::get_key_string_by_paths`]; the full path in the error is `path`.
    pub fn get_key_string_by_path(&self, path: &str) -> Result<String, Error> {
        let value = self.get_key_object_by_path(path)?;
        resolver::to_text(value, || path.to_string())
    }

    fn root_or_empty(&self) -> Result<&Value, Error> {
        self.root.as_ref().ok_or(Error::Empty)
    }
}

/// Parse a plain JSON string into a new document.
impl FromStr for Document {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Document::from_slice(source.as_bytes())
    }
}
