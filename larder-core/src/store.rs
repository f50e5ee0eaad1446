use uuid::Uuid;

use crate::item::{GroceryItem, ItemCandidate};

/// In-memory catalog of grocery items for one session.
///
/// The store is the only owner of the item sequence. Items are held in
/// insertion order and read back newest first; they are never updated or
/// removed.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<GroceryItem>,
}

impl ItemStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a candidate under a freshly generated id and returns the new item.
    ///
    /// The candidate is trusted as-is; validation belongs to the caller.
    pub fn add_item(&mut self, candidate: ItemCandidate) -> &GroceryItem {
        let id = Uuid::new_v4().to_string();
        let index = self.items.len();
        self.items.push(GroceryItem::from_candidate(id, candidate));
        &self.items[index]
    }

    /// All items, most recently added first.
    pub fn list_items(
        &self,
    ) -> impl ExactSizeIterator<Item = &GroceryItem> + DoubleEndedIterator {
        self.items.iter().rev()
    }

    /// The most recently added item.
    pub fn latest(&self) -> Option<&GroceryItem> {
        self.items.last()
    }

    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
