//! Set of menu item ids the guest has ticked.
use crate::model::ItemId;

/// Insertion-ordered set of selected item ids.
///
/// Iteration yields ids in the order they were first ticked, which is the
/// order the place-order payload carries. Equality ignores that order: two
/// selections are equal when they hold the same ids.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet {
    ids: Vec<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `id`. Returns `true` when the id is now selected.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.ids.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        }
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Ids in insertion order.
    pub fn to_vec(&self) -> Vec<ItemId> {
        self.ids.clone()
    }
}

impl PartialEq for SelectionSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for SelectionSet {}

impl FromIterator<ItemId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}
