//! Outline text parsing
//!
//! Line-oriented parser for the checkbox outline format. Lines 1 and 2 are
//! the heading and its underline; every later non-blank line is one item.
//! Nesting is tracked with a stack of child indices into the tree being
//! built, and the line after the current one decides whether the stack
//! grows or shrinks. Parsing stops at the first malformed line.

use std::str::FromStr;

use thiserror::Error;

use crate::domain::{Item, List, State};

use super::INDENT;

/// A validation failure raised while parsing outline text.
///
/// Line numbers are 1-based positions in the input, so the first item line
/// is line 3. Widths and lengths count bytes, matching what a reader sees
/// in ASCII text.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    /// Line 2 is not `'='` repeated to the length of line 1
    #[error("Line 2: expected a heading underline of {heading_len} '=' characters, found a line of length {underline_len}")]
    UnderlineMismatch {
        heading_len: usize,
        underline_len: usize,
    },

    /// An item line is not indented to the depth the outline is at
    #[error("Line {line}: expected an indent of width {expected}, found {found}")]
    IndentMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// The checkbox brackets are missing or malformed; a bracket the line
    /// was too short to hold is reported as an empty string
    #[error("Line {line}: expected '[' and ']' around the state, found {open:?} and {close:?}")]
    BracketMismatch {
        line: usize,
        open: String,
        close: String,
    },

    /// The character between the brackets is not a known marker
    #[error("Line {line}: expected a state of ' ' or 'X', found {found:?}")]
    InvalidState { line: usize, found: char },
}

impl FromStr for List {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = text.split('\n').collect();
        let heading = lines.first().copied().unwrap_or("");
        let underline = lines.get(1).copied().unwrap_or("");
        if underline != "=".repeat(heading.len()) {
            return Err(ParseError::UnderlineMismatch {
                heading_len: heading.len(),
                underline_len: underline.len(),
            });
        }

        let mut list = List::new(heading);
        // Child-index path from the root down to the current parent; its
        // length is the nesting depth of the line being read.
        let mut path: Vec<usize> = Vec::new();
        let mut next_id = 0;

        let item_lines = lines.get(2..).unwrap_or(&[]);
        for (offset, &line) in item_lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let line_no = offset + 3;

            let expected = INDENT.repeat(path.len());
            let indent = &line[..line.find('-').unwrap_or(line.len())];
            if indent != expected {
                return Err(ParseError::IndentMismatch {
                    line: line_no,
                    expected: expected.len(),
                    found: indent.len(),
                });
            }

            let rest = &line[indent.len()..];
            // Only the bracket pair and the marker are checked; the
            // character right after the dash can be anything.
            let mut head = rest.chars().skip(2);
            let open = head.next();
            let marker = head.next();
            let close = head.next();
            let marker = match (open, marker, close) {
                (Some('['), Some(marker), Some(']')) => marker,
                _ => {
                    return Err(ParseError::BracketMismatch {
                        line: line_no,
                        open: open.map(String::from).unwrap_or_default(),
                        close: close.map(String::from).unwrap_or_default(),
                    });
                }
            };
            let state = State::from_marker(marker).ok_or(ParseError::InvalidState {
                line: line_no,
                found: marker,
            })?;
            let description = match rest.char_indices().nth(6) {
                Some((start, _)) => &rest[start..],
                None => "",
            };

            next_id += 1;
            let parent = node_at_mut(&mut list.root, &path);
            let child_index = parent.children.len();
            parent
                .children
                .push(Item::with_id(next_id, state, description));

            // The raw next line (blank ones included) decides nesting: a
            // shorter dash prefix closes one level, a longer one opens the
            // item just added as the new parent.
            if let Some(next_line) = item_lines.get(offset + 1) {
                let next_indent = next_line.find('-').unwrap_or(0);
                if next_indent < indent.len() {
                    path.pop();
                } else if next_indent > indent.len() {
                    path.push(child_index);
                }
            }
        }

        Ok(list)
    }
}

/// Follows a child-index path down from `node`.
fn node_at_mut<'a>(mut node: &'a mut Item, path: &[usize]) -> &'a mut Item {
    for &index in path {
        node = &mut node.children[index];
    }
    node
}
