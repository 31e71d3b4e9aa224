//! checklist - Hierarchical TODO lists with a plain-text outline format
//!
//! A [`List`] is a tree of checkbox items under a single heading. Items
//! are added, reordered, completed and deleted through the tree API, and
//! a whole list converts to and from a fixed text form:
//!
//! ```text
//! Groceries
//! =========
//! - [ ] Milk
//! - [X] Eggs
//! ```
//!
//! # Example
//!
//! ```
//! use checklist::List;
//!
//! let mut list = List::new("Groceries");
//! list.add("Milk");
//! list.add("Eggs").complete();
//!
//! let text = list.render();
//! assert_eq!(text, "Groceries\n=========\n- [ ] Milk\n- [X] Eggs\n");
//!
//! let parsed = List::parse(&text)?;
//! assert_eq!(parsed.heading(), "Groceries");
//! assert_eq!(parsed.items().len(), 2);
//! # Ok::<(), checklist::ParseError>(())
//! ```

pub mod domain;
pub mod format;

pub use domain::{Item, Iter, List, State};
pub use format::ParseError;
