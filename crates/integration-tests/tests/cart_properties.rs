//! Cart behaviour across the store, the slot file and a reload.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::sync::Arc;

use bookinest_core::{LineKey, Price, Product, ProductId, QuantityChange, Variant};
use bookinest_storefront::cart::{CART_SLOT_KEY, CartStore, CartView};
use bookinest_storefront::storage::{FileSlotStore, MemorySlotStore, SlotStore};

fn atlas() -> Product {
    Product {
        id: ProductId::new("B1"),
        name: "Atlas".to_string(),
        price: Price::new(1000),
        image: "/img/atlas.jpg".to_string(),
        variant: Variant::new("Physical"),
    }
}

fn product(id: &str, price: i64, variant: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("Libro {id}"),
        price: Price::new(price),
        image: String::new(),
        variant: Variant::new(variant),
    }
}

fn expected_total(store: &CartStore) -> Price {
    store
        .cart()
        .items()
        .iter()
        .map(|item| item.price.times(item.qty))
        .sum()
}

#[test]
fn worked_example_add_twice_then_remove_by_quantity() {
    let mut store = CartStore::open(Arc::new(MemorySlotStore::new()), CART_SLOT_KEY);

    store.add_item(atlas());
    store.add_item(atlas());

    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.cart().items()[0].qty, 2);
    assert_eq!(store.cart().total(), Price::new(2000));

    let change = store.change_quantity(&LineKey::new("B1", "Physical"), -2);

    assert_eq!(change, QuantityChange::Removed);
    assert!(store.cart().is_empty());
    assert_eq!(store.cart().total(), Price::ZERO);
}

#[test]
fn operation_sequence_keeps_invariants() {
    let mut store = CartStore::open(Arc::new(MemorySlotStore::new()), CART_SLOT_KEY);
    let keys = [
        LineKey::new("A", "Libro Físico"),
        LineKey::new("A", "E-book"),
        LineKey::new("B", "Libro Físico"),
    ];

    store.add_item(product("A", 1500, "Libro Físico"));
    store.add_item(product("A", 900, "E-book"));
    store.add_item(product("B", 12_000, "Libro Físico"));
    store.add_item(product("A", 1500, "Libro Físico"));
    store.change_quantity(&keys[1], 4);
    store.change_quantity(&keys[2], -1);
    store.remove_item(&LineKey::new("Z", "Libro Físico"));
    store.change_quantity(&keys[0], -1);

    for item in store.cart() {
        assert!(item.qty >= 1, "{} stored with qty {}", item.id, item.qty);
    }
    let unique: std::collections::HashSet<_> = store.cart().items().iter().map(|i| i.key()).collect();
    assert_eq!(unique.len(), store.cart().len());
    assert_eq!(store.cart().total(), expected_total(&store));
    assert_eq!(store.cart().total(), Price::new(1500 + 900 * 5));
}

#[test]
fn distinct_variants_are_distinct_lines() {
    let mut store = CartStore::open(Arc::new(MemorySlotStore::new()), CART_SLOT_KEY);

    store.add_item(product("A", 1500, "Libro Físico"));
    store.add_item(product("A", 900, "E-book"));

    assert_eq!(store.cart().len(), 2);
    assert_eq!(store.cart().item_count(), 2);
}

#[test]
fn remove_absent_key_leaves_cart_unchanged() {
    let mut store = CartStore::open(Arc::new(MemorySlotStore::new()), CART_SLOT_KEY);
    store.add_item(atlas());
    let before = store.cart().clone();

    assert!(!store.remove_item(&LineKey::new("B1", "E-book")));
    assert_eq!(store.cart(), &before);
}

#[test]
fn file_slot_round_trip_preserves_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let slots = Arc::new(FileSlotStore::new(dir.path()));

    let mut store = CartStore::open(slots.clone(), CART_SLOT_KEY);
    store.add_item(product("C", 300, "Libro Físico"));
    store.add_item(atlas());
    store.add_item(product("C", 300, "Libro Físico"));
    let saved = store.cart().clone();

    let reopened = CartStore::open(slots, CART_SLOT_KEY);

    assert_eq!(reopened.cart(), &saved);
    assert_eq!(reopened.cart().items()[0].id.as_str(), "C");
    assert_eq!(reopened.cart().items()[0].qty, 2);
}

#[test]
fn slot_file_uses_browser_compatible_layout() {
    let dir = tempfile::tempdir().unwrap();
    let slots = Arc::new(FileSlotStore::new(dir.path()));
    let mut store = CartStore::open(slots.clone(), CART_SLOT_KEY);

    store.add_item(atlas());

    let raw = fs::read_to_string(slots.slot_path(CART_SLOT_KEY)).unwrap();
    assert_eq!(
        raw,
        r#"[{"id":"B1","name":"Atlas","price":1000,"image":"/img/atlas.jpg","variant":"Physical","qty":1}]"#
    );
}

#[test]
fn corrupt_slot_loads_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let slots = Arc::new(FileSlotStore::new(dir.path()));
    slots.write(CART_SLOT_KEY, "{not json").unwrap();

    let mut store = CartStore::open(slots.clone(), CART_SLOT_KEY);
    assert!(store.cart().is_empty());

    store.add_item(atlas());
    let reopened = CartStore::open(slots, CART_SLOT_KEY);
    assert_eq!(reopened.cart().item_count(), 1);
}

#[test]
fn absent_slot_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let slots = FileSlotStore::new(dir.path().join("never-created"));

    assert!(CartStore::load(&slots, CART_SLOT_KEY).is_none());
}

#[test]
fn hand_edited_rows_are_normalized_on_load() {
    let slots = MemorySlotStore::with_slot(
        CART_SLOT_KEY,
        r#"[
            {"id":"A","name":"A","price":100,"image":"","variant":"X","qty":0},
            {"id":"B","name":"B","price":200,"image":"","variant":"X","qty":-3},
            {"id":"C","name":"C","price":300,"image":"","variant":"X","qty":2}
        ]"#,
    );

    let cart = CartStore::load(&slots, CART_SLOT_KEY).unwrap();

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.items()[0].id.as_str(), "C");
    assert_eq!(cart.total(), Price::new(600));
}

#[test]
fn view_reflects_store_after_mutations() {
    let mut store = CartStore::open(Arc::new(MemorySlotStore::new()), CART_SLOT_KEY);
    store.add_item(atlas());
    store.add_item(product("B", 1_250_000, "E-book"));

    let view = CartView::from(store.cart());

    assert_eq!(view.items.len(), 2);
    assert_eq!(view.items[1].price, "$ 1.250.000");
    assert_eq!(view.total, "$ 1.251.000");
    assert_eq!(view.shipping, "A calcular");
    assert_eq!(view.item_count, 2);
}
