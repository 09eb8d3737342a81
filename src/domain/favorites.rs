use std::collections::HashSet;

use super::pet::PetId;

/// Identifiers the user marked as favorite. Only membership matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<PetId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: PetId) -> bool {
        self.ids.contains(&id)
    }

    /// Removes `id` if present, adds it otherwise.
    /// Returns the new membership of `id`.
    pub fn toggle(&mut self, id: PetId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Members in ascending id order
    pub fn sorted_ids(&self) -> Vec<PetId> {
        let mut ids: Vec<PetId> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<PetId> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = PetId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = FavoriteSet::new();
        assert!(favorites.toggle(3));
        assert!(favorites.contains(3));
        assert!(!favorites.toggle(3));
        assert!(!favorites.contains(3));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let original: FavoriteSet = [1, 4, 9].into_iter().collect();
        for id in [1, 2, 9, 42] {
            let mut favorites = original.clone();
            favorites.toggle(id);
            favorites.toggle(id);
            assert_eq!(favorites, original);
        }
    }

    #[test]
    fn test_sorted_ids() {
        let favorites: FavoriteSet = [9, 1, 4].into_iter().collect();
        assert_eq!(favorites.sorted_ids(), vec![1, 4, 9]);
    }
}
