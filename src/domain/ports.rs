use crate::domain::model::Item;
use crate::utils::error::Result;

/// Provider of items. An unknown id is `Ok(None)`; `Err` means the source
/// itself failed.
pub trait ItemSource: Send + Sync {
    fn find_item(&self, id: u32) -> Result<Option<Item>>;
    fn item_ids(&self) -> Result<Vec<u32>>;
}

