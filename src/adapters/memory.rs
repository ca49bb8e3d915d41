use crate::domain::model::Item;
use crate::domain::ports::ItemSource;
use crate::utils::error::Result;
use std::collections::BTreeMap;

/// Item source backed by a map loaded once from configuration.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: BTreeMap<u32, Item>,
}

impl InMemoryCatalog {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().map(|item| (item.id(), item)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemSource for InMemoryCatalog {
    fn find_item(&self, id: u32) -> Result<Option<Item>> {
        Ok(self.items.get(&id).cloned())
    }

    fn item_ids(&self) -> Result<Vec<u32>> {
        Ok(self.items.keys().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_item_with_same_id_wins() {
        let catalog = InMemoryCatalog::new([
            Item::sample_laptop(),
            Item::sample_without_package(),
            Item::new(1),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.item_ids().unwrap(), vec![1, 2]);
        assert_eq!(catalog.find_item(1).unwrap(), Some(Item::new(1)));
        assert_eq!(catalog.find_item(3).unwrap(), None);
    }
}
