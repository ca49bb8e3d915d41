use anyhow::Result;
use safe_chain::domain::ports::ItemSource;
use safe_chain::utils::validation::Validate;
use safe_chain::{CatalogConfig, CatalogError, ItemField, ItemResolver, Resolution};
use std::sync::Arc;
use tempfile::TempDir;

const CATALOG: &str = r#"
[catalog]
name = "warehouse"
description = "Items with partially filled chains"
default_fallback = "Unknown Item"

[[items]]
id = 1
[items.group]
group_name = "Consumer Goods"
[items.group.package]
package_name = "Electronics"
[items.group.package.code]
code = "LT-001"
name = "Laptop"

[[items]]
id = 2
[items.group]
group_name = "Consumer Goods"

[[items]]
id = 3

[[items]]
id = 4
[items.group]
group_name = "Office"
[items.group.package]
package_name = "Furniture"
[items.group.package.code]
code = "DK-100"
"#;

fn write_catalog(dir: &TempDir) -> Result<String> {
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, CATALOG)?;
    Ok(path.to_string_lossy().to_string())
}

#[test]
fn test_resolve_catalog_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = write_catalog(&temp_dir)?;

    let config = CatalogConfig::from_file(&path)?;
    config.validate()?;
    let fallback = config.fallback().to_string();
    let resolver = ItemResolver::new(config.into_source());

    let names: Vec<String> = resolver
        .resolve_all(ItemField::ItemName)?
        .iter()
        .map(|r| format!("{}={}", r.id, r.value_or(&fallback)))
        .collect();
    assert_eq!(
        names,
        vec!["1=Laptop", "2=Unknown Item", "3=Unknown Item", "4=Unknown Item"]
    );

    let codes = resolver.resolve_all(ItemField::Code)?;
    assert_eq!(codes[3].value.as_deref(), Some("DK-100"));
    assert_eq!(codes[1].value, None);
    Ok(())
}

#[test]
fn test_trace_reports_link_per_item() -> Result<()> {
    let config = CatalogConfig::from_toml_str(CATALOG)?;
    let resolver = ItemResolver::new(config.into_source());

    let links: Vec<Option<&'static str>> = [1, 2, 3, 4, 5]
        .into_iter()
        .map(|id| resolver.trace(id, ItemField::ItemName).map(|r| r.absent_link()))
        .collect::<Result<_, CatalogError>>()?;
    assert_eq!(
        links,
        vec![None, Some("package"), Some("group"), Some("name"), Some("item")]
    );

    assert_eq!(
        resolver.trace(1, ItemField::PackageName)?,
        Resolution::Present("Electronics".to_string())
    );
    Ok(())
}

#[test]
fn test_sample_catalog_matches_item_fixtures() -> Result<()> {
    let config = CatalogConfig::sample();
    config.validate()?;
    let resolver = ItemResolver::new(config.into_source());

    assert_eq!(resolver.source().item_ids()?, vec![1, 2]);
    assert_eq!(
        resolver.resolve_or(1, ItemField::ItemName, "Unknown Item")?,
        "Laptop"
    );
    assert_eq!(
        resolver.resolve_or(2, ItemField::ItemName, "Unknown Item")?,
        "Unknown Item"
    );
    Ok(())
}

#[tokio::test]
async fn test_resolve_async_over_catalog() -> Result<()> {
    let config = CatalogConfig::from_toml_str(CATALOG)?;
    let resolver = Arc::new(ItemResolver::new(config.into_source()));

    let resolved = resolver
        .clone()
        .resolve_async(vec![4, 1, 9], ItemField::GroupName)
        .await?;

    let values: Vec<Option<&str>> = resolved.iter().map(|r| r.value.as_deref()).collect();
    assert_eq!(values, vec![Some("Office"), Some("Consumer Goods"), None]);

    let json = serde_json::to_value(&resolved)?;
    assert_eq!(json[0]["field"], "group.name");
    assert_eq!(json[2]["value"], serde_json::Value::Null);
    Ok(())
}
