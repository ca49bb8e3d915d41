use crate::core::chain::{evaluate, OrAbsent, OrDefect, Resolution};
use crate::core::field::ItemField;
use crate::domain::ports::ItemSource;
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::sync::Arc;

/// Value read for one item, `None` when a link of its chain is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub id: u32,
    pub field: ItemField,
    pub value: Option<String>,
}

impl Resolved {
    pub fn value_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.value.as_deref().unwrap_or(fallback)
    }
}

/// Traced read of one item: either a value, or the link where the chain broke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traced {
    pub id: u32,
    pub field: ItemField,
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absent_link: Option<&'static str>,
    /// Links resolved before the chain broke, or all of them when present.
    pub depth: usize,
}

impl Traced {
    fn new(id: u32, field: ItemField, resolution: Resolution<String>) -> Self {
        match resolution {
            Resolution::Present(value) => Self {
                id,
                field,
                value: Some(value),
                absent_link: None,
                depth: field.links() + 1,
            },
            Resolution::Absent { link, depth } => Self {
                id,
                field,
                value: None,
                absent_link: Some(link.link),
                depth,
            },
        }
    }

    pub fn value_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.value.as_deref().unwrap_or(fallback)
    }
}

/// Reads item fields from an [`ItemSource`] without nested presence checks.
///
/// An unknown id and a missing link both resolve to absence; an error from
/// the source is returned to the caller.
pub struct ItemResolver<S: ItemSource> {
    source: S,
}

impl<S: ItemSource> ItemResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn resolve(&self, id: u32, field: ItemField) -> Result<Option<String>> {
        let value = evaluate(|| {
            let item = self.source.find_item(id).or_defect()?.or_absent("item")?;
            Ok(field.read(&item)?)
        })?;

        tracing::debug!(
            "item {} {}: {}",
            id,
            field,
            value.as_deref().unwrap_or("<absent>")
        );
        Ok(value)
    }

    pub fn resolve_or(&self, id: u32, field: ItemField, fallback: &str) -> Result<String> {
        self.resolve(id, field)
            .map(|value| value.unwrap_or_else(|| fallback.to_string()))
    }

    /// Like [`ItemResolver::resolve`], but reports which link was absent.
    pub fn trace(&self, id: u32, field: ItemField) -> Result<Resolution<String>> {
        let item = self.source.find_item(id)?;
        let resolution = field.trace(item.as_ref());

        if let Resolution::Absent { link, depth } = &resolution {
            tracing::debug!(
                "item {} {}: chain broke at '{}' after {} link(s)",
                id,
                field,
                link.link,
                depth
            );
        }
        Ok(resolution)
    }

    pub fn trace_ids(&self, ids: &[u32], field: ItemField) -> Result<Vec<Traced>> {
        ids.iter()
            .map(|&id| {
                self.trace(id, field)
                    .map(|resolution| Traced::new(id, field, resolution))
            })
            .collect()
    }

    pub fn resolve_ids(&self, ids: &[u32], field: ItemField) -> Result<Vec<Resolved>> {
        let resolved = ids
            .iter()
            .map(|&id| {
                self.resolve(id, field).map(|value| Resolved { id, field, value })
            })
            .collect::<Result<Vec<_>>>()?;

        let present = resolved.iter().filter(|r| r.value.is_some()).count();
        tracing::info!(
            "Resolved {} for {} item(s): {} present, {} absent",
            field,
            resolved.len(),
            present,
            resolved.len() - present
        );
        Ok(resolved)
    }

    /// Resolves `field` for every item of the source, in ascending id order.
    pub fn resolve_all(&self, field: ItemField) -> Result<Vec<Resolved>> {
        let mut ids = self.source.item_ids()?;
        ids.sort_unstable();
        ids.dedup();
        self.resolve_ids(&ids, field)
    }
}

impl<S: ItemSource + 'static> ItemResolver<S> {
    /// Runs [`ItemResolver::resolve_ids`] on the blocking pool.
    pub async fn resolve_async(
        self: Arc<Self>,
        ids: Vec<u32>,
        field: ItemField,
    ) -> Result<Vec<Resolved>> {
        tokio::task::spawn_blocking(move || self.resolve_ids(&ids, field))
            .await
            .map_err(|e| CatalogError::TaskJoin {
                message: e.to_string(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Item;
    use std::collections::BTreeMap;

    struct MapSource(BTreeMap<u32, Item>);

    impl ItemSource for MapSource {
        fn find_item(&self, id: u32) -> Result<Option<Item>> {
            Ok(self.0.get(&id).cloned())
        }

        fn item_ids(&self) -> Result<Vec<u32>> {
            Ok(self.0.keys().copied().collect())
        }
    }

    struct FailingSource;

    impl ItemSource for FailingSource {
        fn find_item(&self, _id: u32) -> Result<Option<Item>> {
            Err(CatalogError::SourceError {
                message: "connection reset".to_string(),
            })
        }

        fn item_ids(&self) -> Result<Vec<u32>> {
            Ok(vec![1])
        }
    }

    fn sample_resolver() -> ItemResolver<MapSource> {
        let items = [Item::sample_laptop(), Item::sample_without_package()];
        ItemResolver::new(MapSource(
            items.into_iter().map(|item| (item.id(), item)).collect(),
        ))
    }

    #[test]
    fn test_resolve_present_and_absent() {
        let resolver = sample_resolver();
        assert_eq!(
            resolver.resolve(1, ItemField::ItemName).unwrap(),
            Some("Laptop".to_string())
        );
        assert_eq!(resolver.resolve(2, ItemField::ItemName).unwrap(), None);
        assert_eq!(
            resolver.resolve(2, ItemField::GroupName).unwrap(),
            Some("Consumer Goods".to_string())
        );
    }

    #[test]
    fn test_unknown_id_is_absence() {
        let resolver = sample_resolver();
        assert_eq!(resolver.resolve(99, ItemField::Id).unwrap(), None);
        assert_eq!(
            resolver.resolve_or(99, ItemField::ItemName, "Unknown Item").unwrap(),
            "Unknown Item"
        );
        assert_eq!(
            resolver.resolve_or(1, ItemField::ItemName, "Unknown Item").unwrap(),
            "Laptop"
        );
    }

    #[test]
    fn test_source_failure_is_not_absence() {
        let resolver = ItemResolver::new(FailingSource);
        assert!(matches!(
            resolver.resolve(1, ItemField::ItemName),
            Err(CatalogError::SourceError { .. })
        ));
        assert!(matches!(
            resolver.resolve_or(1, ItemField::ItemName, "Unknown Item"),
            Err(CatalogError::SourceError { .. })
        ));
        assert!(resolver.trace(1, ItemField::ItemName).is_err());
        assert!(resolver.trace_ids(&[1], ItemField::ItemName).is_err());
        assert!(resolver.resolve_all(ItemField::ItemName).is_err());
    }

    #[test]
    fn test_resolve_all_in_id_order() {
        let resolved = sample_resolver().resolve_all(ItemField::ItemName).unwrap();
        assert_eq!(
            resolved,
            vec![
                Resolved {
                    id: 1,
                    field: ItemField::ItemName,
                    value: Some("Laptop".to_string()),
                },
                Resolved {
                    id: 2,
                    field: ItemField::ItemName,
                    value: None,
                },
            ]
        );
        assert_eq!(resolved[1].value_or("Unknown Item"), "Unknown Item");
    }

    #[test]
    fn test_trace_names_missing_link() {
        let resolver = sample_resolver();
        let traced = resolver.trace(2, ItemField::Code).unwrap();
        assert_eq!(traced.absent_link(), Some("package"));

        let traced = resolver.trace(42, ItemField::Code).unwrap();
        assert_eq!(traced.absent_link(), Some("item"));
    }

    #[test]
    fn test_trace_ids_serialize_absent_link() {
        let traced = sample_resolver()
            .trace_ids(&[1, 2, 9], ItemField::ItemName)
            .unwrap();
        assert_eq!(traced[0].value.as_deref(), Some("Laptop"));
        assert_eq!(traced[0].depth, 5);
        assert_eq!(traced[1].absent_link, Some("package"));
        assert_eq!(traced[1].depth, 2);
        assert_eq!(traced[1].value_or("Unknown Item"), "Unknown Item");

        let json = serde_json::to_value(&traced).unwrap();
        assert_eq!(
            json[1],
            serde_json::json!({
                "id": 2,
                "field": "group.package.code.name",
                "value": null,
                "absent_link": "package",
                "depth": 2
            })
        );
        assert!(json[0].get("absent_link").is_none());
        assert_eq!(json[2]["absent_link"], "item");
        assert_eq!(json[2]["depth"], 0);
    }

    #[tokio::test]
    async fn test_resolve_async_matches_sync() {
        let resolver = Arc::new(sample_resolver());
        let expected = resolver.resolve_ids(&[2, 1, 7], ItemField::Code).unwrap();
        let resolved = resolver
            .clone()
            .resolve_async(vec![2, 1, 7], ItemField::Code)
            .await
            .unwrap();
        assert_eq!(resolved, expected);
        assert_eq!(resolved[1].value.as_deref(), Some("LT-001"));
    }
}
