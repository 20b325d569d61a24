use actix_web::{web, HttpResponse, Responder};
use common::error::ProductError;
use common::model::product::Product;
use common::responses::ApiResponse;
use log::{error, info};

use crate::repository::Db;

pub async fn process(db: web::Data<Db>, product_id: web::Path<String>) -> impl Responder {
    info!("Received request to delete product with ID: {}", product_id);
    match delete_product(&db, &product_id) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<Product>::success_message(
            "Product deleted successfully",
        )),
        Err(e) => {
            if let ProductError::Server(detail) = &e {
                error!("Error deleting product: {}", detail);
            }
            super::error_response(e)
        }
    }
}

/// Removes the matching record if present. Whether a record existed is not
/// surfaced: deleting an already-deleted id reports success as well.
fn delete_product(db: &Db, id: &str) -> Result<(), ProductError> {
    super::check_id(id)?;
    db.delete(id)
        .map(|_| ())
        .map_err(|e| ProductError::Server(format!("Server error: {}", e)))
}
