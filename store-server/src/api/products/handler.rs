//! Product API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::models::product::Ribbon;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Product, ProductCreate};
use crate::db::repository::{ProductQuery, ProductRepository, ProductSort};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Catalog listing query string.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Category slug
    pub cat: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub ribbon: Option<Ribbon>,
    /// Substring match on the slug
    pub search: Option<String>,
    #[serde(default)]
    pub sort: ProductSort,
    pub limit: Option<usize>,
}

/// Listing row: the product plus the price derived for the card, so
/// clients never re-implement the pricing-shape fallback.
#[derive(Serialize)]
pub struct ProductListItem {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "displayPrice")]
    pub display_price: Decimal,
}

/// GET /api/products - filtered catalog listing
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<ProductListItem>>> {
    let query = ProductQuery {
        category: params.cat,
        min_price: params.min_price,
        max_price: params.max_price,
        ribbon: params.ribbon,
        search: params.search,
        sort: params.sort,
        limit: params.limit,
    };

    let repo = ProductRepository::new(state.db.clone());
    let products = repo.find_with_filters(&query).await?;
    let items = products
        .into_iter()
        .map(|product| ProductListItem {
            display_price: product.display_price(),
            product,
        })
        .collect();
    Ok(Json(items))
}

/// GET /api/products/{slug} - single product
pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Product>> {
    let repo = ProductRepository::new(state.db.clone());
    let product = repo
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Product '{}' not found", slug)))?;
    Ok(Json(product))
}

fn validate_payload(payload: &ProductCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_TEXT_LEN)?;
    for image in &payload.images {
        validate_required_text(&image.image, "image", MAX_URL_LEN)?;
        validate_optional_text(&image.alt_text, "altText", MAX_NAME_LEN)?;
    }
    Ok(())
}

/// POST /api/products - create a product (admin only)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ProductCreate>,
) -> AppResult<Json<Product>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }
    validate_payload(&payload)?;

    let repo = ProductRepository::new(state.db.clone());
    let product = repo.create(payload).await?;
    Ok(Json(product))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::product::ProductImage;

    fn payload() -> ProductCreate {
        ProductCreate {
            name: "Linen Tee".into(),
            description: Some("Lightweight summer tee.".into()),
            images: vec![ProductImage {
                image: "/media/abc123.webp".into(),
                alt_text: Some("Front view".into()),
            }],
            categories: vec![],
            ribbon: None,
            pricing: None,
            inventory: None,
            options: Default::default(),
        }
    }

    #[test]
    fn well_formed_payload_passes() {
        assert!(validate_payload(&payload()).is_ok());
    }

    #[test]
    fn oversized_description_is_rejected() {
        let mut p = payload();
        p.description = Some("x".repeat(MAX_TEXT_LEN + 1));
        assert!(validate_payload(&p).is_err());
    }

    #[test]
    fn oversized_image_url_is_rejected() {
        let mut p = payload();
        p.images[0].image = format!("/media/{}.webp", "a".repeat(MAX_URL_LEN));
        assert!(validate_payload(&p).is_err());
    }
}
