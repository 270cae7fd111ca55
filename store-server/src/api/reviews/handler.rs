//! Review API handlers
//!
//! Submissions arrive as multipart (text fields plus up to five images).
//! New reviews are created unapproved; the public listing only ever shows
//! approved ones.

use axum::{
    Json,
    extract::{Multipart, Query, State},
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::core::ServerState;
use crate::db::models::{Media, Review};
use crate::db::repository::{MediaRepository, ReviewRepository};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Upload cap per review.
pub const MAX_IMAGES: usize = 5;

#[derive(Default)]
struct ReviewForm {
    product: Option<String>,
    order: Option<String>,
    email: Option<String>,
    rating: Option<u8>,
    title: Option<String>,
    content: Option<String>,
    verified_purchase: bool,
    images: Vec<(String, Vec<u8>)>,
}

impl ReviewForm {
    fn require(field: Option<String>, name: &str) -> AppResult<String> {
        field.ok_or_else(|| AppError::validation(format!("{name} is required")))
    }
}

#[derive(Serialize)]
pub struct CreateReviewResponse {
    pub success: bool,
    pub review: Review,
}

/// POST /api/reviews - submit a review with optional images
pub async fn create(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<CreateReviewResponse>> {
    let mut form = ReviewForm::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name.starts_with("images-") {
            if form.images.len() >= MAX_IMAGES {
                return Err(AppError::validation(format!(
                    "At most {MAX_IMAGES} images per review"
                )));
            }
            let filename = field
                .file_name()
                .map(str::to_string)
                .ok_or_else(|| AppError::validation("Image field is missing a filename"))?;
            let bytes = field.bytes().await?.to_vec();
            form.images.push((filename, bytes));
            continue;
        }

        let value = field.text().await?;
        match name.as_str() {
            "product" => form.product = Some(value),
            "order" => form.order = Some(value),
            "email" => form.email = Some(value),
            "rating" => {
                form.rating = Some(
                    value
                        .parse()
                        .map_err(|_| AppError::validation("rating must be a number"))?,
                )
            }
            "title" => form.title = Some(value),
            "content" => form.content = Some(value),
            "verifiedPurchase" => form.verified_purchase = value == "true",
            // Unknown fields are ignored
            _ => {}
        }
    }

    let product = ReviewForm::require(form.product, "product")?;
    let email = ReviewForm::require(form.email, "email")?;
    let rating = form
        .rating
        .ok_or_else(|| AppError::validation("rating is required"))?;
    let title = ReviewForm::require(form.title, "title")?;
    let content = ReviewForm::require(form.content, "content")?;

    if !(1..=5).contains(&rating) {
        return Err(AppError::validation("rating must be between 1 and 5"));
    }
    if !email.validate_email() || email.len() > MAX_EMAIL_LEN {
        return Err(AppError::validation("A valid email address is required"));
    }
    validate_required_text(&title, "title", MAX_NAME_LEN)?;
    validate_required_text(&content, "content", MAX_TEXT_LEN)?;

    // Store images first so the review only ever references files that
    // made it to disk.
    let media_repo = MediaRepository::new(state.db.clone());
    let mut image_urls = Vec::with_capacity(form.images.len());
    for (filename, bytes) in &form.images {
        let stored = state.media.save(filename, bytes).await?;
        media_repo
            .create(Media {
                id: None,
                filename: stored.filename.clone(),
                url: stored.url.clone(),
                alt: Some(title.clone()),
                mime_type: stored.mime_type.clone(),
                size: stored.size,
                created_at: Utc::now(),
            })
            .await?;
        image_urls.push(stored.url);
    }

    let review = ReviewRepository::new(state.db.clone())
        .create(Review {
            id: None,
            product,
            order: form.order,
            email,
            rating,
            title,
            content,
            verified_purchase: form.verified_purchase,
            images: image_urls,
            approved: false,
            created_at: Utc::now(),
        })
        .await?;

    Ok(Json(CreateReviewResponse {
        success: true,
        review,
    }))
}

#[derive(Deserialize)]
pub struct ListParams {
    #[serde(rename = "productId", alias = "product_id")]
    pub product_id: String,
}

/// GET /api/reviews?productId={id} - approved reviews, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Review>>> {
    let repo = ReviewRepository::new(state.db.clone());
    let reviews = repo.find_approved_by_product(&params.product_id).await?;
    Ok(Json(reviews))
}
