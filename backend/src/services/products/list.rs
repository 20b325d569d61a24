use actix_web::{web, HttpResponse, Responder};
use common::error::ProductError;
use common::model::product::Product;
use common::responses::ApiResponse;
use log::error;

use crate::repository::Db;

pub async fn process(db: web::Data<Db>) -> impl Responder {
    match list_products(&db) {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::success(products)),
        Err(e) => {
            error!("Error fetching products: {}", e);
            super::error_response(e)
        }
    }
}

/// Fetches the whole collection; an empty store yields an empty array, not an
/// error.
fn list_products(db: &Db) -> Result<Vec<Product>, ProductError> {
    db.list()
        .map_err(|e| ProductError::Server(format!("Server error: {}", e)))
}
