//! Black-box tests driving a full ordering session through the public API,
//! the way a rendering shell would.

use storefront_app::{demo, OrderSession, SidebarView};
use storefront_cart::PricingConfig;
use storefront_catalog::{ProductId, StoreInfo};
use storefront_core::DomainError;

fn empty_session() -> OrderSession {
    OrderSession::new(
        demo::catalog().unwrap(),
        demo::suggested().unwrap(),
        demo::store(),
        PricingConfig::default(),
    )
}

fn id(raw: &str) -> ProductId {
    ProductId::new(raw).unwrap()
}

#[test]
fn fresh_session_renders_the_empty_state() {
    let session = empty_session();
    assert_eq!(session.sidebar().unwrap(), SidebarView::Empty);
}

#[test]
fn seeded_session_renders_expected_totals() {
    // 24.99 x 2 + 16.50 = 66.48; at 8.875% tax and 10 points per dollar the
    // sidebar shows 5.90 tax, 72.38 total, 723 points.
    let session = demo::session().unwrap();

    match session.sidebar().unwrap() {
        SidebarView::Active {
            lines,
            suggestions,
            totals,
        } => {
            assert_eq!(lines.len(), 2);
            assert_eq!(lines[0].name, "Margherita Pizza");
            assert_eq!(lines[0].line_total, "49.98");
            assert_eq!(lines[1].name, "Caesar Salad");
            assert_eq!(lines[1].line_total, "16.50");

            assert_eq!(suggestions.len(), 2);
            assert_eq!(suggestions[0].name, "Garlic Bread");

            assert_eq!(totals.subtotal, "66.48");
            assert_eq!(totals.tax, "5.90");
            assert_eq!(totals.total, "72.38");
            assert_eq!(totals.loyalty_points, 723);
        }
        SidebarView::Empty => panic!("Expected active sidebar for seeded session"),
    }
}

#[test]
fn adding_a_suggested_item_twice_merges_into_one_line() {
    let mut session = empty_session();
    session.add_suggested(&id("garlic-bread")).unwrap();
    session.add_suggested(&id("garlic-bread")).unwrap();

    let lines = session.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].description.as_deref(), Some("Added from suggestions"));
}

#[test]
fn adding_a_catalog_product_after_its_suggestion_merges_and_keeps_the_line() {
    // "tiramisu" exists both in the catalog and as a suggestion at a
    // different price; the first line in wins and later adds only bump the
    // quantity.
    let mut session = empty_session();
    session.add_suggested(&id("tiramisu")).unwrap();
    session.add_product(&id("tiramisu")).unwrap();

    let lines = session.cart().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[0].unit_price.to_string(), "12.99");
}

#[test]
fn decrementing_to_zero_removes_the_line() {
    let mut session = empty_session();
    session.add_product(&id("craft-beer")).unwrap();
    session.decrement(&id("craft-beer")).unwrap();

    assert!(session.cart().is_empty());
}

#[test]
fn removing_the_last_line_switches_to_the_empty_state() {
    let mut session = demo::session().unwrap();
    session.remove(&id("margherita-pizza")).unwrap();
    assert!(!session.sidebar().unwrap().is_empty());

    session.remove(&id("caesar-salad")).unwrap();
    assert_eq!(session.sidebar().unwrap(), SidebarView::Empty);
}

#[test]
fn increment_and_decrement_follow_the_sidebar_controls() {
    let mut session = demo::session().unwrap();
    let pizza = id("margherita-pizza");

    session.increment(&pizza).unwrap();
    assert_eq!(session.cart().line(&pizza).unwrap().quantity, 3);

    session.decrement(&pizza).unwrap();
    assert_eq!(session.cart().line(&pizza).unwrap().quantity, 2);
}

#[test]
fn unknown_catalog_id_is_a_not_found_error() {
    let mut session = empty_session();
    let err = session.add_product(&id("no-such-item")).unwrap_err();
    assert_eq!(err, DomainError::NotFound);

    let err = session.add_suggested(&id("no-such-item")).unwrap_err();
    assert_eq!(err, DomainError::NotFound);
}

#[test]
fn sidebar_view_serializes_for_a_json_shell() {
    let session = demo::session().unwrap();
    let json = serde_json::to_value(session.sidebar().unwrap()).unwrap();

    assert_eq!(json["state"], "active");
    assert_eq!(json["totals"]["subtotal"], "66.48");
    assert_eq!(json["lines"][0]["quantity"], 2);

    let empty = serde_json::to_value(SidebarView::Empty).unwrap();
    assert_eq!(empty["state"], "empty");
}

#[test]
fn store_info_is_exposed_unchanged() {
    let session = demo::session().unwrap();
    let StoreInfo { name, address, .. } = session.store().clone();
    assert_eq!(name, "Giuseppe's Italian Kitchen");
    assert_eq!(address, "123 Main Street, Downtown, NY 10001");
}
