//! Demo seed data: the storefront's static catalog, suggested items, store
//! info, and a pre-seeded cart.
//!
//! Prices enter as raw major-unit floats and pass through the
//! `Money::from_major_units` ingestion boundary, the same path any external
//! catalog feed would take.

use storefront_cart::{ItemCandidate, PricingConfig};
use storefront_catalog::{Catalog, CatalogItem, Category, ProductId, StoreInfo, SuggestedItem};
use storefront_core::{DomainResult, Money};

use crate::session::OrderSession;

fn catalog_item(
    id: &str,
    name: &str,
    description: &str,
    price: f64,
    image: &str,
    category: Category,
) -> DomainResult<CatalogItem> {
    CatalogItem::new(
        ProductId::new(id)?,
        name,
        description,
        Money::from_major_units(price)?,
        image,
        category,
    )
}

pub fn catalog() -> DomainResult<Catalog> {
    Catalog::new(vec![
        catalog_item(
            "grilled-salmon",
            "Grilled Salmon",
            "Fresh Atlantic salmon with lemon herbs and seasonal vegetables",
            24.99,
            "https://images.unsplash.com/photo-1467003909585-2f8a72700288?w=400&h=300&fit=crop",
            Category::MainCourses,
        )?,
        catalog_item(
            "caesar-salad",
            "Caesar Salad",
            "Crisp romaine lettuce with parmesan, croutons, and classic dressing",
            12.99,
            "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=400&h=300&fit=crop",
            Category::Appetizers,
        )?,
        catalog_item(
            "chocolate-cake",
            "Chocolate Cake",
            "Rich chocolate layer cake with ganache and fresh berries",
            8.99,
            "https://images.unsplash.com/photo-1578985545062-69928b1d9587?w=400&h=300&fit=crop",
            Category::Desserts,
        )?,
        catalog_item(
            "margherita-pizza",
            "Margherita Pizza",
            "Classic pizza with fresh mozzarella, tomatoes, and basil",
            16.99,
            "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=400&h=300&fit=crop",
            Category::MainCourses,
        )?,
        catalog_item(
            "craft-beer",
            "Craft Beer",
            "Local IPA with citrus notes and hoppy finish",
            6.99,
            "https://images.unsplash.com/photo-1608270586620-248524c67de9?w=400&h=300&fit=crop",
            Category::Beverages,
        )?,
        catalog_item(
            "truffle-pasta",
            "Truffle Pasta",
            "Handmade pasta with truffle oil, parmesan, and wild mushrooms",
            28.99,
            "https://images.unsplash.com/photo-1621996346565-e3dbc353d2e5?w=400&h=300&fit=crop",
            Category::Specials,
        )?,
        catalog_item(
            "bruschetta",
            "Bruschetta",
            "Toasted bread with fresh tomatoes, basil, and balsamic glaze",
            9.99,
            "https://images.unsplash.com/photo-1572441713132-51c75654db73?w=400&h=300&fit=crop",
            Category::Appetizers,
        )?,
        catalog_item(
            "tiramisu",
            "Tiramisu",
            "Traditional Italian dessert with coffee-soaked ladyfingers",
            7.99,
            "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?w=400&h=300&fit=crop",
            Category::Desserts,
        )?,
        catalog_item(
            "fresh-juice",
            "Fresh Juice",
            "Daily selection of freshly squeezed seasonal fruit juices",
            4.99,
            "https://images.unsplash.com/photo-1613478223719-2ab802602423?w=400&h=300&fit=crop",
            Category::Beverages,
        )?,
    ])
}

pub fn suggested() -> DomainResult<Vec<SuggestedItem>> {
    Ok(vec![
        SuggestedItem::new(
            ProductId::new("garlic-bread")?,
            "Garlic Bread",
            Money::from_major_units(8.99)?,
            "https://images.unsplash.com/photo-1573140247632-f8fd74997d5c?w=300&h=200&fit=crop",
        )?,
        SuggestedItem::new(
            ProductId::new("tiramisu")?,
            "Tiramisu",
            Money::from_major_units(12.99)?,
            "https://images.unsplash.com/photo-1571877227200-a0d98ea607e9?w=300&h=200&fit=crop",
        )?,
    ])
}

pub fn store() -> StoreInfo {
    StoreInfo {
        name: "Giuseppe's Italian Kitchen".to_string(),
        description: "Authentic Italian cuisine made with fresh, locally sourced ingredients. \
                      Family recipes passed down through generations."
            .to_string(),
        website: "www.giuseppes.com".to_string(),
        phone: "(555) 123-4567".to_string(),
        address: "123 Main Street, Downtown, NY 10001".to_string(),
        weekday_hours: "Mon-Fri: 11:00 AM - 10:00 PM".to_string(),
        weekend_hours: "Sat-Sun: 10:00 AM - 11:00 PM".to_string(),
    }
}

/// A full session with the cart pre-seeded the way the storefront opens:
/// two Margherita Pizzas and one Caesar Salad, at the prices captured when
/// those lines entered the cart.
pub fn session() -> DomainResult<OrderSession> {
    let mut session = OrderSession::new(
        catalog()?,
        suggested()?,
        store(),
        PricingConfig::default(),
    );

    session.seed_line(
        ItemCandidate {
            product_id: ProductId::new("margherita-pizza")?,
            name: "Margherita Pizza".to_string(),
            unit_price: Money::from_major_units(24.99)?,
            image: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=300&h=200&fit=crop"
                .to_string(),
            description: Some("Fresh mozzarella, tomato sauce, basil".to_string()),
        },
        2,
    )?;
    session.seed_line(
        ItemCandidate {
            product_id: ProductId::new("caesar-salad")?,
            name: "Caesar Salad".to_string(),
            unit_price: Money::from_major_units(16.50)?,
            image: "https://images.unsplash.com/photo-1546793665-c74683f339c1?w=300&h=200&fit=crop"
                .to_string(),
            description: Some("Romaine lettuce, parmesan, croutons".to_string()),
        },
        1,
    )?;

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_covers_every_category() {
        let catalog = catalog().unwrap();
        for category in Category::ALL {
            assert!(
                catalog.items().iter().any(|item| item.category == category),
                "no demo item in category {category}"
            );
        }
    }

    #[test]
    fn demo_session_opens_with_two_seeded_lines() {
        let session = session().unwrap();
        let lines = session.cart().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].quantity, 2);
        assert_eq!(lines[1].quantity, 1);
    }
}
