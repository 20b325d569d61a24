//! # Product Service Module
//!
//! This module aggregates all API endpoints related to the management of
//! products. It acts as a router, directing incoming HTTP requests under the
//! `/api/products` path to the appropriate handler logic defined in its
//! sub-modules.
//!
//! Every handler answers with the uniform envelope
//! `{success, data?, message?}`; failures are classified by
//! `common::error::ProductError` and mapped to one status code per kind
//! (validation and malformed ids to 400, unknown ids to 404, persistence
//! failures to 500).
//!
//! ## Sub-modules:
//! - `create`: Validates and persists a new product record.
//! - `list`: Returns the whole collection in insertion order.
//! - `update`: Applies a partial payload to one record and returns it.
//! - `delete`: Removes one record; deleting an absent id still succeeds.

mod create;
mod delete;
mod list;
mod update;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use common::error::ProductError;
use common::model::product::Product;
use common::responses::ApiResponse;

/// The base path for all product-related API endpoints.
const API_PATH: &str = "/api/products";

/// Configures and returns the Actix `Scope` for all product-related routes.
///
/// # Registered Routes:
///
/// *   **`POST /api/products`** — `create::process`: persists a new record
///     from a `{name, price, image}` payload, all fields required.
/// *   **`GET /api/products`** — `list::process`: returns every record.
/// *   **`PUT /api/products/{product_id}`** — `update::process`: applies the
///     provided fields to one record and returns the updated record.
/// *   **`DELETE /api/products/{product_id}`** — `delete::process`: removes
///     one record by id.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("", get().to(list::process))
        .route("/{product_id}", put().to(update::process))
        .route("/{product_id}", delete().to(delete::process))
}

/// Maps an error kind to its HTTP status and wraps it in the envelope.
///
/// `Network` never originates on the server; it is covered so the mapping
/// stays exhaustive over the shared error enumeration.
fn error_response(error: ProductError) -> HttpResponse {
    let body = ApiResponse::<Product>::failure(error.to_string());
    match error {
        ProductError::Validation(_) | ProductError::InvalidId(_) => {
            HttpResponse::BadRequest().json(body)
        }
        ProductError::NotFound(_) => HttpResponse::NotFound().json(body),
        ProductError::Server(_) | ProductError::Network(_) => {
            HttpResponse::InternalServerError().json(body)
        }
    }
}

/// Rejects identifiers that do not parse as the store's native id format.
fn check_id(raw: &str) -> Result<(), ProductError> {
    uuid::Uuid::parse_str(raw)
        .map(|_| ())
        .map_err(|_| ProductError::InvalidId("Invalid product ID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Db;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use tempfile::TempDir;

    macro_rules! spawn_app {
        ($db:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($db))
                    .service(configure_routes()),
            )
            .await
        };
    }

    fn temp_db() -> (TempDir, Db) {
        let dir = TempDir::new().unwrap();
        let db = Db::new(dir.path().join("products.sqlite"));
        (dir, db)
    }

    #[actix_web::test]
    async fn create_returns_201_with_the_persisted_record() {
        let (_dir, db) = temp_db();
        let app = spawn_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": 1.5, "image": "http://x/pen.png"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"]["name"], json!("Pen"));
        assert_eq!(body["data"]["price"], json!(1.5));
        assert!(body["data"]["id"].is_string());
        assert!(body["data"]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn create_rejects_blank_or_missing_fields_without_persisting() {
        let (_dir, db) = temp_db();
        let app = spawn_app!(db.clone());

        for payload in [
            json!({"name": "", "price": 1.5, "image": "http://x"}),
            json!({"price": 1.5, "image": "http://x"}),
            json!({"name": "Pen", "price": 0, "image": "http://x"}),
            json!({"name": "Pen", "price": -2, "image": "http://x"}),
            json!({"name": "Pen", "price": 1.5}),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/products")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], json!(false));
        }

        assert!(db.list().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn list_on_an_empty_store_returns_an_empty_array() {
        let (_dir, db) = temp_db();
        let app = spawn_app!(db);

        let req = test::TestRequest::get().uri("/api/products").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["data"], json!([]));
    }

    #[actix_web::test]
    async fn created_records_round_trip_through_list() {
        let (_dir, db) = temp_db();
        let app = spawn_app!(db);

        let req = test::TestRequest::post()
            .uri("/api/products")
            .set_json(json!({"name": "Pen", "price": 1.5, "image": "http://x/pen.png"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/products").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["name"], json!("Pen"));
        assert_eq!(body["data"][0]["image"], json!("http://x/pen.png"));
    }

    #[actix_web::test]
    async fn update_replaces_fields_and_returns_the_record() {
        let (_dir, db) = temp_db();
        let created = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let app = spawn_app!(db);

        let req = test::TestRequest::put()
            .uri(&format!("/api/products/{}", created.id))
            .set_json(json!({"name": "Pencil", "price": 2.5}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], json!("Pencil"));
        assert_eq!(body["data"]["price"], json!(2.5));
        assert_eq!(body["data"]["image"], json!("http://x/pen.png"));
        assert_eq!(body["data"]["id"], json!(created.id));
    }

    #[actix_web::test]
    async fn update_distinguishes_malformed_and_unknown_ids() {
        let (_dir, db) = temp_db();
        let created = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let app = spawn_app!(db.clone());

        let req = test::TestRequest::put()
            .uri("/api/products/not-a-valid-id")
            .set_json(json!({"name": "Pencil"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let missing = uuid::Uuid::new_v4();
        let req = test::TestRequest::put()
            .uri(&format!("/api/products/{}", missing))
            .set_json(json!({"name": "Pencil"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // The collection is unchanged in both cases.
        assert_eq!(db.list().unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn update_rejects_invariant_violations() {
        let (_dir, db) = temp_db();
        let created = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let app = spawn_app!(db.clone());

        for payload in [
            json!({"name": "  "}),
            json!({"price": 0}),
            json!({"image": ""}),
        ] {
            let req = test::TestRequest::put()
                .uri(&format!("/api/products/{}", created.id))
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(db.list().unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn delete_succeeds_for_absent_ids_and_rejects_malformed_ones() {
        let (_dir, db) = temp_db();
        let keep = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let app = spawn_app!(db.clone());

        let absent = uuid::Uuid::new_v4();
        let req = test::TestRequest::delete()
            .uri(&format!("/api/products/{}", absent))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], json!(true));

        let req = test::TestRequest::delete()
            .uri("/api/products/not-a-valid-id")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(db.list().unwrap(), vec![keep]);
    }

    #[actix_web::test]
    async fn delete_removes_exactly_the_matching_record() {
        let (_dir, db) = temp_db();
        let keep = db.insert("Pen", 1.5, "http://x/pen.png").unwrap();
        let gone = db.insert("Mug", 7.0, "http://x/mug.png").unwrap();
        let app = spawn_app!(db.clone());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/products/{}", gone.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        assert_eq!(db.list().unwrap(), vec![keep]);
    }
}
