//! Contains a parser for Java-like method signatures.
//!
//! # Examples
//!
//! Basic usage:
//! ```
//! use method_sig::parser;
//!
//! let sig = parser::parse("private void log(String value)").unwrap();
//! assert_eq!(sig.method_name(), "log");
//! assert_eq!(sig.arguments().len(), 1);
//! ```

pub mod nom_support;

pub mod signature;

pub use self::signature::{has_access_modifier, parse, parse_arguments, Error};
