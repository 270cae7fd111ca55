//! Cart storage round-trip on the in-memory engine.
//! Run: cargo test -p store-server --test cart_persistence

use rust_decimal::Decimal;

use shared::cart::CartItem;
use store_server::db::DbService;
use store_server::db::repository::CartRepository;

fn item(id: &str, quantity: u32) -> CartItem {
    CartItem {
        id: id.to_string(),
        name: format!("Product {id}"),
        price: Decimal::new(4999, 2),
        image: format!("/media/{id}.jpg"),
        quantity,
        color: Some("#FF0000".to_string()),
        size: Some("m".to_string()),
        max_quantity: Some(10),
    }
}

#[tokio::test]
async fn saved_cart_comes_back_identical() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = CartRepository::new(db.db.clone());

    let items = vec![item("p1", 2), item("p2", 1)];
    repo.upsert("user-1", items.clone()).await.unwrap();

    let stored = repo.find_by_user("user-1").await.unwrap().unwrap();
    assert_eq!(stored.user, "user-1");
    assert_eq!(stored.items, items);
}

#[tokio::test]
async fn missing_cart_is_none() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = CartRepository::new(db.db.clone());

    assert!(repo.find_by_user("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn second_save_replaces_items_wholesale() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = CartRepository::new(db.db.clone());

    repo.upsert("user-1", vec![item("p1", 2), item("p2", 1)])
        .await
        .unwrap();
    repo.upsert("user-1", vec![item("p3", 5)]).await.unwrap();

    let stored = repo.find_by_user("user-1").await.unwrap().unwrap();
    assert_eq!(stored.items.len(), 1);
    assert_eq!(stored.items[0].id, "p3");
    assert_eq!(stored.items[0].quantity, 5);
}

#[tokio::test]
async fn empty_save_leaves_the_stored_cart_alone() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = CartRepository::new(db.db.clone());

    repo.upsert("user-1", vec![item("p1", 2)]).await.unwrap();
    repo.upsert("user-1", vec![]).await.unwrap();

    let stored = repo.find_by_user("user-1").await.unwrap().unwrap();
    assert_eq!(stored.items.len(), 1);

    // And an empty save for an unknown user creates nothing
    repo.upsert("user-2", vec![]).await.unwrap();
    assert!(repo.find_by_user("user-2").await.unwrap().is_none());
}

#[tokio::test]
async fn carts_are_isolated_per_user() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = CartRepository::new(db.db.clone());

    repo.upsert("alice", vec![item("p1", 1)]).await.unwrap();
    repo.upsert("bob", vec![item("p2", 3)]).await.unwrap();

    assert_eq!(
        repo.find_by_user("alice").await.unwrap().unwrap().items[0].id,
        "p1"
    );
    assert_eq!(
        repo.find_by_user("bob").await.unwrap().unwrap().items[0].id,
        "p2"
    );
}
