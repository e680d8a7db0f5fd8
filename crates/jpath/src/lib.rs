//! # jpath
//!
//! Slash-delimited path lookups into JSON documents.
//!
//! A [`Document`] is parsed once and then queried with paths such as `organizer/name`. Each
//! segment is a literal object key; lookups descend through objects only and end at a string,
//! a number or an object.
//!
//! ```rust
//! # fn example() -> Result<(), jpath::Error> {
//! let document: jpath::Document =
//!     r#"{"organizer": {"name": "John Smith", "age": 33}}"#.parse()?;
//!
//! assert_eq!(document.get_key_string_by_path("organizer/name")?, "John Smith");
//! assert_eq!(document.get_key_string_by_path("organizer/age")?, "33");
//! assert!(document.get_key_object_by_path("organizer")?.is_object());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! Configuration files may carry `#` comment lines when parsed with
//! [`Syntax::JsonWithComments`]:
//!
//! ```rust,no_run
//! # fn example() -> Result<(), jpath::Error> {
//! let config = jpath::options()
//!     .strip_comments(true)
//!     .parse_from_file("/etc/profile.conf")?;
//! let name = config.get_key_string_by_path("organizer/name")?;
//! # Ok(())
//! # }
//! ```
mod document;
mod error;
mod number;
mod options;
mod path;
mod resolver;
mod syntax;

pub use document::Document;
pub use error::Error;
pub use options::ParseOptions;
pub use syntax::{strip_comments, Syntax};

/// Get [`ParseOptions`] for configuring how a [`Document`] is loaded.
#[must_use]
pub fn options() -> ParseOptions {
    ParseOptions::new()
}
