//! Order API handlers
//!
//! Creation re-derives the total server-side and always starts at
//! `pending`. A transition to `delivered` fires the review-request email.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

use shared::checkout::{self, OrderRequest};
use shared::models::order::{Customer, OrderStatus};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::Order;
use crate::db::repository::OrderRepository;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Deserialize)]
pub struct OrderParams {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// Shipping form checks: the domain-level field/email validation plus the
/// storage length caps.
fn validate_shipping(customer: &Customer) -> AppResult<()> {
    checkout::validate_customer(customer).map_err(|e| AppError::validation(e.to_string()))?;
    validate_required_text(&customer.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&customer.address, "address", MAX_ADDRESS_LEN)?;
    validate_required_text(&customer.city, "city", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&customer.state, "state", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&customer.zip, "zip", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&customer.country, "country", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// POST /api/orders?userId={id} - place an order
pub async fn create(
    State(state): State<ServerState>,
    Query(params): Query<OrderParams>,
    Json(request): Json<OrderRequest>,
) -> AppResult<Json<Order>> {
    if request.items.is_empty() {
        return Err(AppError::validation("Cannot place an order with no items"));
    }
    validate_shipping(&request.customer)?;

    // The client's total is advisory; the server trusts only its own sum
    // over the line items.
    let derived = request.recomputed_total();
    if derived != request.total_price {
        return Err(AppError::validation(format!(
            "Order total mismatch: expected {derived}, got {}",
            request.total_price
        )));
    }

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create(request, params.user_id).await?;

    tracing::info!(order_id = %order.order_id, total = %order.total_price, "Order placed");
    Ok(Json(order))
}

/// GET /api/orders?userId={id} - order history, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<OrderParams>,
) -> AppResult<Json<Vec<Order>>> {
    let user_id = params
        .user_id
        .ok_or_else(|| AppError::validation("userId query parameter is required"))?;

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_by_user(&user_id).await?;
    Ok(Json(orders))
}

#[derive(Deserialize)]
pub struct StatusUpdateRequest {
    pub status: OrderStatus,
}

#[derive(Serialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub order: Order,
}

/// PATCH /api/orders/{order_id}/status - move an order through its
/// lifecycle (admin only)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    user: CurrentUser,
    Json(req): Json<StatusUpdateRequest>,
) -> AppResult<Json<StatusUpdateResponse>> {
    if !user.is_admin() {
        return Err(AppError::forbidden("Admin access required"));
    }

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update_status(&order_id, req.status).await?;

    if order.status == OrderStatus::Delivered {
        // Review request failure must not roll back the status change.
        if let Err(e) = state.email.send_review_request(&order).await {
            tracing::warn!(order_id = %order.order_id, error = %e, "Failed to send review request email");
        }
    }

    Ok(Json(StatusUpdateResponse {
        success: true,
        order,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        Customer {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            address: "12 Hill Road".into(),
            city: "Mumbai".into(),
            state: "MH".into(),
            zip: "400050".into(),
            country: "India".into(),
        }
    }

    #[test]
    fn shipping_form_passes_with_sane_fields() {
        assert!(validate_shipping(&customer()).is_ok());
    }

    #[test]
    fn oversized_address_is_rejected() {
        let mut c = customer();
        c.address = "x".repeat(MAX_ADDRESS_LEN + 1);
        assert!(validate_shipping(&c).is_err());
    }

    #[test]
    fn oversized_zip_is_rejected() {
        let mut c = customer();
        c.zip = "9".repeat(MAX_SHORT_TEXT_LEN + 1);
        assert!(validate_shipping(&c).is_err());
    }

    #[test]
    fn domain_validation_still_runs_first() {
        let mut c = customer();
        c.email = "not-an-email".into();
        assert!(validate_shipping(&c).is_err());
    }
}
