//! The outline document
//!
//! A [`List`] owns a single root item whose description is the document
//! heading. The structural operations on the list itself are conveniences
//! over the root's direct children; nested items are reached through
//! [`List::root_mut`] and [`Item::child_mut`].

use serde::{Deserialize, Serialize};

use crate::format::ParseError;

use super::item::{Item, State};

/// A hierarchical TODO list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub(crate) root: Item,
}

impl List {
    /// Creates an empty list with the given heading
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            root: Item::with_id(0, State::Pending, heading),
        }
    }

    /// The document heading
    pub fn heading(&self) -> &str {
        &self.root.description
    }

    /// Replaces the document heading; surrounding whitespace is dropped
    pub fn set_heading(&mut self, heading: impl Into<String>) {
        self.root.set_description(heading);
    }

    /// The root item that owns the whole outline
    pub fn root(&self) -> &Item {
        &self.root
    }

    /// Mutable access to the root item
    pub fn root_mut(&mut self) -> &mut Item {
        &mut self.root
    }

    /// The top-level items, in order
    pub fn items(&self) -> &[Item] {
        &self.root.children
    }

    /// Appends a new pending top-level item and returns it
    pub fn add(&mut self, description: impl Into<String>) -> &mut Item {
        self.root.add(description)
    }

    /// Moves the top-level item at `index` up one slot; see [`Item::move_up`]
    pub fn move_up(&mut self, index: usize) {
        self.root.move_up(index);
    }

    /// Moves the top-level item at `index` down one slot; see [`Item::move_down`]
    pub fn move_down(&mut self, index: usize) {
        self.root.move_down(index);
    }

    /// Removes the top-level item at `index`; see [`Item::delete`]
    pub fn delete(&mut self, index: usize) {
        self.root.delete(index);
    }

    /// Walks every item except the root in document order.
    ///
    /// Yields `(depth, item)` pairs, where top-level items have depth 0.
    /// Document order is depth-first: an item comes right before its own
    /// children, which come before its next sibling.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.root)
    }

    /// Renders the list in the outline text format
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Parses a list from the outline text format
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        text.parse()
    }

    /// Re-parses this list from text, replacing its contents.
    ///
    /// All-or-nothing: when the text is rejected the list is left unchanged.
    pub fn load(&mut self, text: &str) -> Result<(), ParseError> {
        *self = text.parse()?;
        Ok(())
    }
}

/// Document-order iterator over the items of a [`List`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<(usize, &'a Item)>,
}

impl<'a> Iter<'a> {
    fn new(root: &'a Item) -> Self {
        // Reversed so that siblings pop in document order.
        let stack = root.children.iter().rev().map(|item| (0, item)).collect();
        Self { stack }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a Item);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, item) = self.stack.pop()?;
        for child in item.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, item))
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = (usize, &'a Item);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_has_a_trimmed_heading_and_no_items() {
        let list = List::new("  Groceries  ");

        assert_eq!(list.heading(), "Groceries");
        assert!(list.items().is_empty());
        assert_eq!(list.root().id(), 0);
        assert!(list.root().state().is_pending());
    }

    #[test]
    fn set_heading_trims() {
        let mut list = List::new("Old");
        list.set_heading("  New  ");
        assert_eq!(list.heading(), "New");
    }

    #[test]
    fn list_operations_act_on_top_level_items() {
        let mut list = List::new("Chores");
        list.add("sweep");
        list.add("mop");
        list.add("dust");

        // sweep, mop, dust -> sweep, dust, mop -> dust, sweep, mop -> dust, sweep
        list.move_up(2);
        list.move_down(0);
        list.delete(2);

        let names: Vec<_> = list.items().iter().map(|i| i.description()).collect();
        assert_eq!(names, ["dust", "sweep"]);
        assert_eq!(list.items()[0].id(), 0);
        assert_eq!(list.items()[1].id(), 1);
    }

    #[test]
    fn root_mut_reaches_nested_items() {
        let mut list = List::new("Plan");
        list.add("top").add("nested");

        if let Some(nested) = list.root_mut().child_mut(0).and_then(|c| c.child_mut(0)) {
            nested.complete();
        }

        assert!(list.items()[0].children()[0].state().is_done());
    }

    #[test]
    fn iter_walks_in_document_order() {
        let mut list = List::new("Plan");
        let first = list.add("first");
        first.add("first.a");
        first.add("first.b").add("first.b.deep");
        list.add("second");

        let seen: Vec<(usize, &str)> = list
            .iter()
            .map(|(depth, item)| (depth, item.description()))
            .collect();

        assert_eq!(
            seen,
            [
                (0, "first"),
                (1, "first.a"),
                (1, "first.b"),
                (2, "first.b.deep"),
                (0, "second"),
            ]
        );
    }

    #[test]
    fn iter_is_empty_for_a_fresh_list() {
        let list = List::new("Nothing");
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn lists_are_iterable_by_reference() {
        let mut list = List::new("Plan");
        list.add("a").complete();
        list.add("b");

        let mut done = 0;
        for (_, item) in &list {
            if item.state().is_done() {
                done += 1;
            }
        }

        assert_eq!(done, 1);
    }

    #[test]
    fn load_replaces_contents() {
        let mut list = List::new("Before");
        list.add("old");

        list.load("After\n=====\n- [X] new\n").unwrap();

        assert_eq!(list.heading(), "After");
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].description(), "new");
        assert!(list.items()[0].state().is_done());
    }

    #[test]
    fn failed_load_leaves_the_list_untouched() {
        let mut list = List::new("Kept");
        list.add("still here");

        assert!(list.load("Broken\n==\n").is_err());

        assert_eq!(list.heading(), "Kept");
        assert_eq!(list.items()[0].description(), "still here");
    }

    #[test]
    fn serde_round_trip() {
        let mut list = List::new("Persisted");
        list.add("kept").complete();
        list.add("pending").add("nested");

        let json = serde_json::to_string(&list).unwrap();
        let parsed: List = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, list);
    }

    #[test]
    fn serde_skips_empty_children() {
        let list = List::new("Compact");
        let json = serde_json::to_string(&list).unwrap();

        assert!(json.contains(r#""description":"Compact""#));
        assert!(!json.contains("children"));
    }
}
