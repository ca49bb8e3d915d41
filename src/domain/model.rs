use serde::{Deserialize, Serialize};

/// Root of the chain: `Item -> ItemGroup -> ItemPackage -> ItemCode -> ItemName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<ItemGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    pub group_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<ItemPackage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPackage {
    pub package_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ItemCode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCode {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ItemName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName {
    pub name: String,
}

impl Item {
    pub fn new(id: u32) -> Self {
        Self { id, group: None }
    }

    pub fn with_group(mut self, group: ItemGroup) -> Self {
        self.group = Some(group);
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn group(&self) -> Option<&ItemGroup> {
        self.group.as_ref()
    }

    /// Id 1: every link present, resolves to "Laptop".
    pub fn sample_laptop() -> Self {
        Item::new(1).with_group(
            ItemGroup::new("Consumer Goods").with_package(
                ItemPackage::new("Electronics")
                    .with_code(ItemCode::new("LT-001").with_name(ItemName::new("Laptop"))),
            ),
        )
    }

    /// Id 2: the group has no package.
    pub fn sample_without_package() -> Self {
        Item::new(2).with_group(ItemGroup::new("Consumer Goods"))
    }
}

impl ItemGroup {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            package: None,
        }
    }

    pub fn with_package(mut self, package: ItemPackage) -> Self {
        self.package = Some(package);
        self
    }

    pub fn group_name(&self) -> &str {
        &self.group_name
    }

    pub fn package(&self) -> Option<&ItemPackage> {
        self.package.as_ref()
    }
}

impl ItemPackage {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ItemCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn code(&self) -> Option<&ItemCode> {
        self.code.as_ref()
    }
}

impl ItemCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: ItemName) -> Self {
        self.name = Some(name);
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn item_name(&self) -> Option<&ItemName> {
        self.name.as_ref()
    }
}

impl ItemName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}
