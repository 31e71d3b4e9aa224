//! Domain model for the outline tree
//!
//! Contains the tree structure and its mutations without any text-format
//! concerns.

mod item;
mod list;

pub use item::{Item, State};
pub use list::{Iter, List};
