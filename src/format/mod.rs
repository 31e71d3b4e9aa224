//! The outline text codec
//!
//! Converts lists to and from a line-oriented plain-text form:
//!
//! ```text
//! Heading
//! =======
//! - [ ] A pending item
//!   - [X] A finished child, indented two spaces per level
//! ```
//!
//! Rendering is the `Display` impl on [`crate::List`], parsing the
//! `FromStr` impl; both also surface as the [`crate::List::render`] and
//! [`crate::List::parse`] conveniences. Rendering never fails. Parsing
//! stops at the first malformed line and reports it by 1-based line number.

mod parse;
mod render;

pub use parse::ParseError;

/// Indent prefix for one nesting level.
pub(crate) const INDENT: &str = "  ";
