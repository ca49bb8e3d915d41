pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::memory::InMemoryCatalog;
pub use config::toml_config::CatalogConfig;
pub use core::chain::{
    evaluate, evaluate_or, null_safe, Chain, ChainError, MissingLink, OrAbsent, OrDefect,
    Resolution,
};
pub use core::field::ItemField;
pub use core::resolver::{ItemResolver, Resolved, Traced};
pub use utils::error::{CatalogError, Result};
