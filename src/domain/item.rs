//! Outline item model
//!
//! Items are the nodes of the outline tree: one task each, or the document
//! heading when the item is the root. Every item exclusively owns its
//! children and there are no parent back-references, so a tree is a plain
//! owned value.

use serde::{Deserialize, Serialize};

/// Completion state of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum State {
    /// Still waiting to be done
    #[default]
    Pending,
    /// Finished
    Done,
}

impl State {
    /// Returns true if this state represents completion
    pub fn is_done(&self) -> bool {
        matches!(self, State::Done)
    }

    /// Returns true if this state represents an open task
    pub fn is_pending(&self) -> bool {
        matches!(self, State::Pending)
    }

    /// Returns the checkbox marker character for this state
    pub fn marker(&self) -> char {
        match self {
            State::Pending => ' ',
            State::Done => 'X',
        }
    }

    /// Parses a checkbox marker character, if it is one
    pub fn from_marker(marker: char) -> Option<State> {
        match marker {
            ' ' => Some(State::Pending),
            'X' => Some(State::Done),
            _ => None,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Pending => write!(f, "pending"),
            State::Done => write!(f, "done"),
        }
    }
}

/// A node in the outline tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stamped at creation from the sibling count (or the parser's running
    /// counter) and never recomputed; moves swap the two affected ids
    pub(crate) id: usize,

    /// Completion state
    pub(crate) state: State,

    /// Trimmed task text
    pub(crate) description: String,

    /// Ordered children; sibling order is the only ordering
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) children: Vec<Item>,
}

impl Item {
    /// Creates an item with a specific id (for `add` and the parser)
    pub(crate) fn with_id(id: usize, state: State, description: impl Into<String>) -> Self {
        let description = description.into();
        Self {
            id,
            state,
            description: description.trim().to_string(),
            children: Vec::new(),
        }
    }

    /// The id stamped when the item was created or parsed
    pub fn id(&self) -> usize {
        self.id
    }

    /// The completion state
    pub fn state(&self) -> State {
        self.state
    }

    /// Replaces the completion state
    pub fn set_state(&mut self, state: State) {
        self.state = state;
    }

    /// Marks the item done
    pub fn complete(&mut self) {
        self.state = State::Done;
    }

    /// Marks the item pending again
    pub fn reopen(&mut self) {
        self.state = State::Pending;
    }

    /// The task text
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the task text; surrounding whitespace is dropped
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into().trim().to_string();
    }

    /// The item's direct children, in order
    pub fn children(&self) -> &[Item] {
        &self.children
    }

    /// Mutable access to the child at `index`, if there is one
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.children.get_mut(index)
    }

    /// Appends a new pending child and returns it.
    ///
    /// The child's id is the number of children the parent had before the
    /// insertion. Ids are stamped once and never renumbered, so deleting a
    /// sibling later leaves a gap rather than reassigning them.
    pub fn add(&mut self, description: impl Into<String>) -> &mut Item {
        let index = self.children.len();
        self.children
            .push(Item::with_id(index, State::Pending, description));
        &mut self.children[index]
    }

    /// Swaps the child at `index` with the one above it.
    ///
    /// The two ids are exchanged along with the positions, so ids keep
    /// tracking slots. Index 0 and out-of-range indices are ignored.
    pub fn move_up(&mut self, index: usize) {
        if index > 0 && index < self.children.len() {
            self.swap_children(index - 1, index);
        }
    }

    /// Swaps the child at `index` with the one below it, exchanging ids the
    /// same way as [`Item::move_up`]. Out-of-range indices are ignored.
    pub fn move_down(&mut self, index: usize) {
        if index < self.children.len().saturating_sub(1) {
            self.swap_children(index, index + 1);
        }
    }

    /// Removes the child at `index` and its subtree, shifting later children
    /// left. Surviving ids are untouched, so the sequence may become
    /// non-contiguous. Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) {
        if index < self.children.len() {
            self.children.remove(index);
        }
    }

    // Ids track slots, not items: swap the elements, then swap the ids back.
    fn swap_children(&mut self, upper: usize, lower: usize) {
        self.children.swap(upper, lower);
        let id = self.children[upper].id;
        self.children[upper].id = self.children[lower].id;
        self.children[lower].id = id;
    }
}
