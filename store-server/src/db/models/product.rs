//! Product entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::product::{
    Inventory, Pricing, ProductImage, ProductOptions, Ribbon, slugify,
};
use shared::pricing::VariantResolver;

use super::serde_helpers;

pub type ProductId = RecordId;

/// Product entity matching the catalog schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ProductId>,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Category slugs the product belongs to
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub ribbon: Option<Ribbon>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub inventory: Option<Inventory>,
    #[serde(default)]
    pub options: ProductOptions,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn resolver(&self) -> VariantResolver<'_> {
        VariantResolver::new(&self.options, self.pricing.as_ref(), self.inventory.as_ref())
    }

    /// Price shown on listing cards; covers every pricing shape.
    pub fn display_price(&self) -> Decimal {
        self.resolver().display_price()
    }

    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Create payload. The slug is derived from the name; stored discounted
/// prices are recomputed before persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub ribbon: Option<Ribbon>,
    #[serde(default)]
    pub pricing: Option<Pricing>,
    #[serde(default)]
    pub inventory: Option<Inventory>,
    #[serde(default)]
    pub options: ProductOptions,
}

impl ProductCreate {
    /// Build the entity: slug from name, derived prices refreshed, creation
    /// time stamped.
    pub fn into_product(self) -> Product {
        let mut pricing = self.pricing;
        if let Some(p) = pricing.as_mut() {
            p.normalize();
        }
        let mut options = self.options;
        for c in options.colors.iter_mut() {
            if let Some(p) = c.pricing.as_mut() {
                p.normalize();
            }
        }
        for s in options.sizes.iter_mut() {
            if let Some(p) = s.pricing.as_mut() {
                p.normalize();
            }
        }
        for c in options.combinations.iter_mut() {
            if let Some(p) = c.pricing.as_mut() {
                p.normalize();
            }
        }

        Product {
            id: None,
            slug: slugify(&self.name),
            name: self.name,
            description: self.description,
            images: self.images,
            categories: self.categories,
            ribbon: self.ribbon,
            pricing,
            inventory: self.inventory,
            options,
            created_at: Utc::now(),
        }
    }
}
