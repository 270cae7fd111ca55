//! Product repository
//!
//! Category, ribbon and search filters run in SurrealQL; the price-range
//! filter and price sorts run in Rust over the resolver's display price so
//! the listing and the detail page share one price derivation regardless of
//! pricing shape.

use rust_decimal::Decimal;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::product::Ribbon;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Product, ProductCreate};

const TABLE: &str = "product";

/// Default page size for catalog listings.
pub const DEFAULT_LIMIT: usize = 9;

/// Listing sort orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    PriceAsc,
    PriceDesc,
    #[default]
    DateNew,
    DateOld,
}

/// Catalog query filters.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Category slug, equality
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub ribbon: Option<Ribbon>,
    /// Substring match on the slug
    pub search: Option<String>,
    pub sort: ProductSort,
    pub limit: Option<usize>,
}

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Catalog listing with filters and sort applied.
    pub async fn find_with_filters(&self, query: &ProductQuery) -> RepoResult<Vec<Product>> {
        let mut sql = String::from("SELECT * FROM product WHERE true");
        if query.category.is_some() {
            sql.push_str(" AND $cat IN categories");
        }
        if query.ribbon.is_some() {
            sql.push_str(" AND ribbon = $ribbon");
        }
        if query.search.is_some() {
            sql.push_str(" AND string::contains(slug, $search)");
        }
        match query.sort {
            ProductSort::DateNew => sql.push_str(" ORDER BY created_at DESC"),
            ProductSort::DateOld => sql.push_str(" ORDER BY created_at ASC"),
            // Price sorts happen in Rust over the derived display price
            ProductSort::PriceAsc | ProductSort::PriceDesc => {}
        }

        let mut db_query = self.base.db().query(sql);
        if let Some(cat) = &query.category {
            db_query = db_query.bind(("cat", cat.clone()));
        }
        if let Some(ribbon) = &query.ribbon {
            db_query = db_query.bind(("ribbon", *ribbon));
        }
        if let Some(search) = &query.search {
            db_query = db_query.bind(("search", search.to_lowercase()));
        }

        let mut products: Vec<Product> = db_query.await?.take(0)?;

        if query.min_price.is_some() || query.max_price.is_some() {
            products.retain(|p| {
                let price = p.display_price();
                query.min_price.is_none_or(|min| price >= min)
                    && query.max_price.is_none_or(|max| price <= max)
            });
        }

        match query.sort {
            ProductSort::PriceAsc => {
                products.sort_by_key(|p| p.display_price());
            }
            ProductSort::PriceDesc => {
                products.sort_by_key(|p| std::cmp::Reverse(p.display_price()));
            }
            _ => {}
        }

        products.truncate(query.limit.unwrap_or(DEFAULT_LIMIT));
        Ok(products)
    }

    pub async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Product>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE slug = $slug LIMIT 1")
            .bind(("slug", slug.to_string()))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Product>> {
        let record_id: surrealdb::RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid product id: {id}")))?;
        let product: Option<Product> = self.base.db().select(record_id).await?;
        Ok(product)
    }

    /// Create a product. The slug must stay unique; name collisions surface
    /// as duplicates.
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        let product = data.into_product();
        if self.find_by_slug(&product.slug).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Product '{}' already exists",
                product.slug
            )));
        }

        let created: Option<Product> = self.base.db().create(TABLE).content(product).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }
}
