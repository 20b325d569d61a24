//! # Product Update Service
//!
//! Handler for `PUT /api/products/{product_id}`. The identifier is checked
//! syntactically before the database is touched; the payload may carry any
//! subset of the mutable fields, and each provided field is validated against
//! the entity invariants (non-blank `name`/`image`, `price > 0`) before being
//! applied. On success the full updated record, with a refreshed `updatedAt`,
//! is returned in the envelope so the client can swap its cached copy for the
//! authoritative one.

use actix_web::{web, HttpResponse, Responder};
use common::error::ProductError;
use common::model::product::Product;
use common::requests::ProductInput;
use common::responses::ApiResponse;
use log::{error, info};

use crate::repository::Db;

pub async fn process(
    db: web::Data<Db>,
    product_id: web::Path<String>,
    payload: web::Json<ProductInput>,
) -> impl Responder {
    info!(
        "Received request to update product with ID: {} Data: {:?}",
        product_id, payload
    );
    match update_product(&db, &product_id, &payload) {
        Ok(product) => HttpResponse::Ok().json(ApiResponse::success(product)),
        Err(e) => {
            if let ProductError::Server(detail) = &e {
                error!("Error updating product: {}", detail);
            }
            super::error_response(e)
        }
    }
}

fn update_product(db: &Db, id: &str, input: &ProductInput) -> Result<Product, ProductError> {
    super::check_id(id)?;
    validate_fields(input)?;

    let updated = db
        .update(id, input)
        .map_err(|e| ProductError::Server(format!("Server error: {}", e)))?;

    updated.ok_or_else(|| ProductError::NotFound("Product not found".to_string()))
}

/// Checks only the fields the payload actually carries; an absent field keeps
/// its persisted value and needs no check.
fn validate_fields(input: &ProductInput) -> Result<(), ProductError> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(ProductError::Validation(
                "Product name must not be empty".to_string(),
            ));
        }
    }
    if let Some(price) = input.price {
        if price <= 0.0 {
            return Err(ProductError::Validation(
                "Product price must be greater than zero".to_string(),
            ));
        }
    }
    if let Some(image) = &input.image {
        if image.trim().is_empty() {
            return Err(ProductError::Validation(
                "Product image must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}
