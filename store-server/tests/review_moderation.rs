//! Review submission and the approval gate.
//! Run: cargo test -p store-server --test review_moderation

use std::time::Duration;

use chrono::Utc;

use store_server::db::DbService;
use store_server::db::models::Review;
use store_server::db::repository::ReviewRepository;

fn review(product: &str, title: &str, approved: bool) -> Review {
    Review {
        id: None,
        product: product.to_string(),
        order: Some("ORD-1700000000000".to_string()),
        email: "asha@example.com".to_string(),
        rating: 4,
        title: title.to_string(),
        content: "Holds up well after a month of use.".to_string(),
        verified_purchase: true,
        images: vec![],
        approved,
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn unapproved_reviews_stay_hidden() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = ReviewRepository::new(db.db.clone());

    let created = repo
        .create(review("product:tee", "Pending review", false))
        .await
        .unwrap();
    assert!(!created.approved);

    let listed = repo
        .find_approved_by_product("product:tee")
        .await
        .unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn approved_reviews_list_newest_first_per_product() {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = ReviewRepository::new(db.db.clone());

    // Enough reviews that an unsorted scan cannot come back in creation
    // order by luck
    let mut titles = Vec::new();
    for i in 0..8 {
        let title = format!("Review {i}");
        repo.create(review("product:tee", &title, true))
            .await
            .unwrap();
        titles.push(title);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    repo.create(review("product:mug", "Other product", true))
        .await
        .unwrap();

    let listed = repo
        .find_approved_by_product("product:tee")
        .await
        .unwrap();
    let listed_titles: Vec<String> = listed.into_iter().map(|r| r.title).collect();
    titles.reverse();
    assert_eq!(listed_titles, titles, "listing is not newest-first");
}
