use crate::adapters::memory::InMemoryCatalog;
use crate::domain::model::Item;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique_ids, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_FALLBACK: &str = "Unknown Item";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: String,
    pub description: Option<String>,
    pub default_fallback: Option<String>,
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CatalogError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Built-in catalog holding the two sample items.
    pub fn sample() -> Self {
        Self {
            catalog: CatalogSection {
                name: "sample".to_string(),
                description: Some("Built-in sample items".to_string()),
                default_fallback: None,
            },
            items: vec![Item::sample_laptop(), Item::sample_without_package()],
        }
    }

    /// 替換環境變數 (例如 ${ITEM_NAME})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn fallback(&self) -> &str {
        self.catalog
            .default_fallback
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK)
    }

    pub fn into_source(self) -> InMemoryCatalog {
        InMemoryCatalog::new(self.items)
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;
        validate_unique_ids("items.id", self.items.iter().map(Item::id))?;

        for item in &self.items {
            let Some(group) = item.group() else { continue };
            validate_non_empty_string(
                &format!("items[{}].group.group_name", item.id()),
                group.group_name(),
            )?;

            let Some(package) = group.package() else { continue };
            validate_non_empty_string(
                &format!("items[{}].group.package.package_name", item.id()),
                package.package_name(),
            )?;

            let Some(code) = package.code() else { continue };
            validate_non_empty_string(
                &format!("items[{}].group.package.code.code", item.id()),
                code.code(),
            )?;

            if let Some(name) = code.item_name() {
                validate_non_empty_string(
                    &format!("items[{}].group.package.code.name", item.id()),
                    name.as_str(),
                )?;
            }
        }

        Ok(())
    }
}
