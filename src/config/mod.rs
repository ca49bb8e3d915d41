pub mod toml_config;

#[cfg(feature = "cli")]
use crate::config::toml_config::CatalogConfig;
#[cfg(feature = "cli")]
use crate::core::field::ItemField;
#[cfg(feature = "cli")]
use crate::domain::ports::ItemSource;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "safe-chain")]
#[command(about = "Read fields through optional item chains, falling back when a link is absent")]
pub struct CliConfig {
    #[arg(long, help = "Catalog TOML file (built-in sample items when omitted)")]
    pub catalog: Option<String>,

    #[arg(long, default_value = "group.package.code.name")]
    pub field: String,

    #[arg(long = "item", value_delimiter = ',', help = "Item ids to resolve (all when omitted)")]
    pub items: Vec<u32>,

    #[arg(long, help = "Text printed for absent values (overrides the catalog default)")]
    pub fallback: Option<String>,

    #[arg(long, help = "Report which link of each chain was absent")]
    pub trace: bool,

    #[arg(long, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn item_field(&self) -> Result<ItemField> {
        self.field.parse()
    }

    /// `--fallback`, then the catalog's `default_fallback`, then the built-in default.
    pub fn fallback_for(&self, catalog: &CatalogConfig) -> String {
        self.fallback
            .clone()
            .unwrap_or_else(|| catalog.fallback().to_string())
    }

    /// Ids given with `--item` in the order given, otherwise every id of the source ascending.
    pub fn ids_for<S: ItemSource>(&self, source: &S) -> Result<Vec<u32>> {
        if !self.items.is_empty() {
            return Ok(self.items.clone());
        }
        let mut ids = source.item_ids()?;
        ids.sort_unstable();
        ids.dedup();
        Ok(ids)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(catalog) = &self.catalog {
            validate_path("catalog", catalog)?;
        }
        self.item_field()?;
        Ok(())
    }
}
