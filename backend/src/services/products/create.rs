use actix_web::{web, HttpResponse, Responder};
use common::error::ProductError;
use common::model::product::Product;
use common::requests::ProductInput;
use common::responses::ApiResponse;
use log::{error, info, warn};

use crate::repository::Db;

pub async fn process(db: web::Data<Db>, payload: web::Json<ProductInput>) -> impl Responder {
    info!("Received product data: {:?}", payload);
    match create_product(&db, &payload) {
        Ok(product) => HttpResponse::Created().json(ApiResponse::success(product)),
        Err(e) => {
            match &e {
                ProductError::Validation(detail) => warn!("Rejected product: {}", detail),
                _ => error!("Error saving product: {}", e),
            }
            super::error_response(e)
        }
    }
}

/// Validates the payload against the entity invariants and persists a new
/// record. The store assigns the id and both timestamps.
fn create_product(db: &Db, input: &ProductInput) -> Result<Product, ProductError> {
    let name = input.name.as_deref().map(str::trim).unwrap_or_default();
    let image = input.image.as_deref().map(str::trim).unwrap_or_default();
    let price = input.price.unwrap_or_default();

    if name.is_empty() || image.is_empty() || price <= 0.0 {
        return Err(ProductError::Validation(
            "All fields are required".to_string(),
        ));
    }

    db.insert(name, price, image)
        .map_err(|e| ProductError::Server(format!("Server error: {}", e)))
}
