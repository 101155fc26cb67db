use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Money};

/// Stable product identifier, opaque to the cart engine.
///
/// Unlike aggregate identifiers this is a caller-supplied string (catalog
/// data ships its own keys); it is only required to be non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: must not be blank"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Menu category of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Appetizers,
    MainCourses,
    Desserts,
    Beverages,
    Specials,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Appetizers,
        Category::MainCourses,
        Category::Desserts,
        Category::Beverages,
        Category::Specials,
    ];
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Category::Appetizers => "Appetizers",
            Category::MainCourses => "Main Courses",
            Category::Desserts => "Desserts",
            Category::Beverages => "Beverages",
            Category::Specials => "Specials",
        };
        f.write_str(label)
    }
}

/// Category selection for catalog queries ("All Items" vs a single tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    All,
    Only(Category),
}

/// A purchasable product definition owned by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub image: String,
    pub category: Category,
}

impl CatalogItem {
    /// Ingest a catalog entry; rejects blank names.
    ///
    /// Price validation (negative / non-finite raw input) happens where the
    /// `Money` is constructed, before this call.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        image: impl Into<String>,
        category: Category,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("catalog item name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            description: description.into(),
            price,
            image: image.into(),
            category,
        })
    }
}

impl Entity for CatalogItem {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_rejects_blank() {
        for raw in ["", "   "] {
            let err = ProductId::new(raw).unwrap_err();
            match err {
                DomainError::InvalidId(_) => {}
                _ => panic!("Expected InvalidId error for blank product id"),
            }
        }
    }

    #[test]
    fn catalog_item_rejects_empty_name() {
        let err = CatalogItem::new(
            ProductId::new("grilled-salmon").unwrap(),
            "   ",
            "Fresh Atlantic salmon",
            Money::from_cents(2499),
            "salmon.jpg",
            Category::MainCourses,
        )
        .unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn category_labels_match_display_names() {
        assert_eq!(Category::MainCourses.to_string(), "Main Courses");
        assert_eq!(Category::Appetizers.to_string(), "Appetizers");
    }
}
