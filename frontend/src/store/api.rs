//! HTTP access to the product service.
//!
//! One function per server operation, all same-origin under `/api/products`.
//! Nothing here throws past the caller: a transport failure becomes
//! `ProductError::Network`, and a non-success envelope is decoded back into
//! the matching error kind from the response status and message. Create
//! additionally mirrors the server-side validation and short-circuits on bad
//! input before any request is made.

use common::error::ProductError;
use common::model::product::Product;
use common::requests::ProductInput;
use common::responses::ApiResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

const API_PATH: &str = "/api/products";

/// Fetches the whole collection in server order.
pub async fn fetch_products() -> Result<Vec<Product>, ProductError> {
    let response = Request::get(API_PATH).send().await.map_err(network)?;
    read_data(response).await
}

/// Validates locally, then persists a new product and hands back the server's
/// record — the authoritative id and timestamps come from there, never from
/// the input.
pub async fn create_product(input: &ProductInput) -> Result<Product, ProductError> {
    if !super::valid_input(input) {
        return Err(ProductError::Validation("Invalid product data".to_string()));
    }

    let request = Request::post(API_PATH)
        .json(input)
        .map_err(|e| ProductError::Network(e.to_string()))?;
    let response = request.send().await.map_err(network)?;
    read_data(response).await
}

/// Applies the given fields to one record and returns the updated record.
pub async fn update_product(id: &str, input: &ProductInput) -> Result<Product, ProductError> {
    let request = Request::put(&format!("{}/{}", API_PATH, id))
        .json(input)
        .map_err(|e| ProductError::Network(e.to_string()))?;
    let response = request.send().await.map_err(network)?;
    read_data(response).await
}

/// Deletes one record by id; resolves to the server's confirmation message.
pub async fn delete_product(id: &str) -> Result<String, ProductError> {
    let response = Request::delete(&format!("{}/{}", API_PATH, id))
        .send()
        .await
        .map_err(network)?;

    let status = response.status();
    let envelope: ApiResponse<Product> = response.json().await.map_err(undecodable)?;
    if envelope.success {
        Ok(envelope
            .message
            .unwrap_or_else(|| "Product deleted successfully".to_string()))
    } else {
        Err(classify(status, envelope.message))
    }
}

async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T, ProductError> {
    let status = response.status();
    let envelope: ApiResponse<T> = response.json().await.map_err(undecodable)?;
    match envelope {
        ApiResponse {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { success: true, .. } => {
            Err(ProductError::Server("Response carried no data".to_string()))
        }
        ApiResponse { message, .. } => Err(classify(status, message)),
    }
}

fn network(error: gloo_net::Error) -> ProductError {
    ProductError::Network(error.to_string())
}

fn undecodable(error: gloo_net::Error) -> ProductError {
    ProductError::Server(format!("Unreadable server response: {}", error))
}

/// Recovers the error kind from a failed response. The envelope only carries
/// `success` and `message`, so a 400 is reported as a validation failure; the
/// client never sends hand-typed ids, which keeps `InvalidId` a server-side
/// distinction.
fn classify(status: u16, message: Option<String>) -> ProductError {
    let message =
        message.unwrap_or_else(|| format!("Request failed with status {}", status));
    match status {
        400 => ProductError::Validation(message),
        404 => ProductError::NotFound(message),
        _ => ProductError::Server(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_status_codes_to_error_kinds() {
        assert_eq!(
            classify(400, Some("All fields are required".to_string())),
            ProductError::Validation("All fields are required".to_string())
        );
        assert_eq!(
            classify(404, Some("Product not found".to_string())),
            ProductError::NotFound("Product not found".to_string())
        );
        assert_eq!(
            classify(500, None),
            ProductError::Server("Request failed with status 500".to_string())
        );
    }
}
