use shopkit_core::CartId;

use crate::item::Item;

/// An ordered list of cart entries.
///
/// Insertion order is preserved. Adding an item always appends a new entry,
/// even when an equal entry is already present; `quantity` on [`Item`] is
/// never folded.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    id: CartId,
    items: Vec<Item>,
}

impl Cart {
    /// Create an empty cart with a fresh id.
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    /// Create an empty cart under a caller-chosen id (e.g. for deterministic tests).
    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    /// Empty the cart. The id is kept.
    pub fn clear(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        tracing::debug!(cart_id = %self.id, dropped, "cart cleared");
    }

    /// Append `item` as a new entry.
    pub fn add(&mut self, item: Item) {
        tracing::debug!(
            cart_id = %self.id,
            item = %item,
            len = self.items.len() + 1,
            "item added to cart"
        );
        self.items.push(item);
    }

    /// Remove the first entry equal to `item`.
    ///
    /// Returns the removed entry, or `None` (leaving the cart untouched) when
    /// nothing matches.
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let Some(index) = self.items.iter().position(|entry| entry == item) else {
            tracing::debug!(cart_id = %self.id, item = %item, "no matching entry to remove");
            return None;
        };

        let removed = self.items.remove(index);
        tracing::debug!(
            cart_id = %self.id,
            item = %removed,
            index,
            len = self.items.len(),
            "item removed from cart"
        );
        Some(removed)
    }

    /// Current entries in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of entries (not the sum of quantities).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of unit prices over all entries.
    pub fn total_cost(&self) -> f64 {
        self.items.iter().map(Item::price).sum()
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
