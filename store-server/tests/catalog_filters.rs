//! Catalog listing filters and sorts across all pricing shapes.
//! Run: cargo test -p store-server --test catalog_filters

use rust_decimal::Decimal;

use shared::models::product::{
    ColorOption, CombinationKey, CombinationOption, Inventory, Pricing, ProductOptions, Ribbon,
    SizeOption,
};
use store_server::db::DbService;
use store_server::db::repository::{
    ProductQuery, ProductRepository, ProductSort, RepoError,
};
use store_server::db::models::ProductCreate;

fn dec(s: &str) -> Decimal {
    Decimal::from_str_exact(s).unwrap()
}

fn base_pricing(price: &str) -> Option<Pricing> {
    Some(Pricing {
        price: Some(dec(price)),
        on_sale: false,
        discount: None,
        discounted_price: None,
    })
}

fn base_product(name: &str, price: &str, categories: &[&str], ribbon: Option<Ribbon>) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        description: None,
        images: vec![],
        categories: categories.iter().map(|c| c.to_string()).collect(),
        ribbon,
        pricing: base_pricing(price),
        inventory: Some(Inventory {
            track_inventory: false,
            quantity: None,
        }),
        options: ProductOptions::default(),
    }
}

async fn seeded_repo() -> ProductRepository {
    let db = DbService::new_in_memory().await.unwrap();
    let repo = ProductRepository::new(db.db.clone());

    repo.create(base_product("Plain Mug", "12.50", &["kitchen"], None))
        .await
        .unwrap();
    repo.create(base_product(
        "Steel Kettle",
        "89.00",
        &["kitchen"],
        Some(Ribbon::Featured),
    ))
    .await
    .unwrap();

    // On sale: 200 - 25% -> display price 150.00
    repo.create(ProductCreate {
        pricing: Some(Pricing {
            price: Some(dec("200")),
            on_sale: true,
            discount: Some(dec("25")),
            discounted_price: None,
        }),
        ..base_product("Wool Rug", "0", &["home"], Some(Ribbon::Sale))
    })
    .await
    .unwrap();

    // Colors-only: display price comes from the first color entry
    repo.create(ProductCreate {
        pricing: None,
        options: ProductOptions {
            colors: vec![
                ColorOption {
                    color: "#FF0000".into(),
                    pricing: base_pricing("35.00"),
                    track_inventory: true,
                    quantity: Some(4),
                },
                ColorOption {
                    color: "#0000FF".into(),
                    pricing: base_pricing("40.00"),
                    track_inventory: false,
                    quantity: None,
                },
            ],
            ..ProductOptions::default()
        },
        ..base_product("Canvas Tote", "0", &["accessories"], None)
    })
    .await
    .unwrap();

    // Combination-priced: display price from the first combination
    repo.create(ProductCreate {
        pricing: None,
        options: ProductOptions {
            colors: vec![],
            sizes: vec![SizeOption {
                value: "m".into(),
                pricing: None,
                track_inventory: false,
                quantity: None,
            }],
            combinations: vec![CombinationOption {
                combination: CombinationKey {
                    color: "#00FF00".into(),
                    color_label: Some("Green".into()),
                    size: "m".into(),
                },
                pricing: base_pricing("60.00"),
                track_inventory: true,
                quantity: Some(2),
            }],
        },
        ..base_product("Knit Sweater", "0", &["clothing"], None)
    })
    .await
    .unwrap();

    repo
}

#[tokio::test]
async fn price_sort_uses_the_derived_display_price() {
    let repo = seeded_repo().await;

    let products = repo
        .find_with_filters(&ProductQuery {
            sort: ProductSort::PriceAsc,
            ..ProductQuery::default()
        })
        .await
        .unwrap();

    let slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
    // 12.50 mug, 35 tote (first color), 60 sweater (combination),
    // 89 kettle, 150 rug (sale price, not the 200 list price)
    assert_eq!(
        slugs,
        vec![
            "plain-mug",
            "canvas-tote",
            "knit-sweater",
            "steel-kettle",
            "wool-rug"
        ]
    );
}

#[tokio::test]
async fn price_range_filters_on_sale_prices() {
    let repo = seeded_repo().await;

    let products = repo
        .find_with_filters(&ProductQuery {
            min_price: Some(dec("100")),
            ..ProductQuery::default()
        })
        .await
        .unwrap();

    // Only the rug's discounted 150 clears the bar; its 200 list price is
    // not what the filter sees
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].slug, "wool-rug");

    let none = repo
        .find_with_filters(&ProductQuery {
            min_price: Some(dec("151")),
            max_price: Some(dec("199")),
            ..ProductQuery::default()
        })
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn category_ribbon_and_search_filters() {
    let repo = seeded_repo().await;

    let kitchen = repo
        .find_with_filters(&ProductQuery {
            category: Some("kitchen".into()),
            ..ProductQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(kitchen.len(), 2);

    let sale = repo
        .find_with_filters(&ProductQuery {
            ribbon: Some(Ribbon::Sale),
            ..ProductQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(sale.len(), 1);
    assert_eq!(sale[0].slug, "wool-rug");

    let search = repo
        .find_with_filters(&ProductQuery {
            search: Some("Rug".into()),
            ..ProductQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].slug, "wool-rug");
}

#[tokio::test]
async fn limit_truncates_the_listing() {
    let repo = seeded_repo().await;

    let products = repo
        .find_with_filters(&ProductQuery {
            limit: Some(2),
            sort: ProductSort::PriceAsc,
            ..ProductQuery::default()
        })
        .await
        .unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].slug, "plain-mug");
}

#[tokio::test]
async fn slug_lookup_and_duplicate_rejection() {
    let repo = seeded_repo().await;

    let product = repo.find_by_slug("knit-sweater").await.unwrap().unwrap();
    assert_eq!(product.name, "Knit Sweater");
    assert_eq!(product.display_price(), dec("60.00"));

    let dup = repo
        .create(base_product("Knit Sweater", "10", &[], None))
        .await;
    assert!(matches!(dup, Err(RepoError::Duplicate(_))));
}
