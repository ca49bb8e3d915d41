use crate::core::chain::{Chain, MissingLink, OrAbsent, Resolution};
use crate::domain::model::{Item, ItemCode, ItemGroup, ItemPackage};
use crate::utils::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dotted path to a value reachable from an [`Item`], e.g. `group.package.code.name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ItemField {
    Id,
    GroupName,
    PackageName,
    Code,
    ItemName,
}

impl ItemField {
    pub const ALL: [ItemField; 5] = [
        ItemField::Id,
        ItemField::GroupName,
        ItemField::PackageName,
        ItemField::Code,
        ItemField::ItemName,
    ];

    pub fn as_path(self) -> &'static str {
        match self {
            ItemField::Id => "id",
            ItemField::GroupName => "group.name",
            ItemField::PackageName => "group.package.name",
            ItemField::Code => "group.package.code",
            ItemField::ItemName => "group.package.code.name",
        }
    }

    /// Number of optional links between the item and this field.
    pub fn links(self) -> usize {
        match self {
            ItemField::Id => 0,
            ItemField::GroupName => 1,
            ItemField::PackageName => 2,
            ItemField::Code => 3,
            ItemField::ItemName => 4,
        }
    }

    /// Reads the field, failing with the first link that is absent.
    pub fn read(self, item: &Item) -> std::result::Result<String, MissingLink> {
        if self == ItemField::Id {
            return Ok(item.id().to_string());
        }

        let group = item.group().or_absent("group")?;
        if self == ItemField::GroupName {
            return Ok(group.group_name().to_string());
        }

        let package = group.package().or_absent("package")?;
        if self == ItemField::PackageName {
            return Ok(package.package_name().to_string());
        }

        let code = package.code().or_absent("code")?;
        if self == ItemField::Code {
            return Ok(code.code().to_string());
        }

        Ok(code.item_name().or_absent("name")?.as_str().to_string())
    }

    /// Walks the chain starting at a possibly missing item, recording where it broke.
    pub fn trace(self, item: Option<&Item>) -> Resolution<String> {
        let chain = Chain::start_optional(item, "item");
        match self {
            ItemField::Id => chain.map(|item| item.id().to_string()).finish(),
            ItemField::GroupName => chain
                .then("group", Item::group)
                .map(|group| group.group_name().to_string())
                .finish(),
            ItemField::PackageName => chain
                .then("group", Item::group)
                .then("package", ItemGroup::package)
                .map(|package| package.package_name().to_string())
                .finish(),
            ItemField::Code => chain
                .then("group", Item::group)
                .then("package", ItemGroup::package)
                .then("code", ItemPackage::code)
                .map(|code| code.code().to_string())
                .finish(),
            ItemField::ItemName => chain
                .then("group", Item::group)
                .then("package", ItemGroup::package)
                .then("code", ItemPackage::code)
                .then("name", ItemCode::item_name)
                .map(|name| name.as_str().to_string())
                .finish(),
        }
    }
}

impl fmt::Display for ItemField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ItemField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        ItemField::ALL
            .into_iter()
            .find(|field| field.as_path() == normalized)
            .ok_or_else(|| CatalogError::InvalidFieldPath {
                path: s.to_string(),
            })
    }
}

impl TryFrom<String> for ItemField {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemField> for String {
    fn from(field: ItemField) -> Self {
        field.as_path().to_string()
    }
}
