//! Client-side product state.
//!
//! `ProductStore` is the single container for the products the UI displays.
//! It is owned by the page root component and handed down through props, so
//! there is no ambient global state: the store is created when the page
//! component is created and dropped with it.
//!
//! The store itself is synchronous and holds a possibly-stale mirror of the
//! server's collection; it is never the source of truth. Network traffic
//! lives in the [`api`] submodule, and every transition applied here uses the
//! record the server answered with, not the user's input.

pub mod api;

use common::error::ProductError;
use common::model::product::Product;
use common::requests::ProductInput;

/// Ordered mirror of the server-side product collection. Order is the
/// server's return order: list order on fetch, append order for creates.
#[derive(Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Wholesale replacement with the server's listing (fetch success).
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Appends the record the server returned for a create.
    pub fn push(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Swaps the record with the matching id for the server's authoritative
    /// copy, keeping its position. A non-matching id changes nothing.
    pub fn replace(&mut self, product: Product) {
        if let Some(existing) = self.products.iter_mut().find(|p| p.id == product.id) {
            *existing = product;
        }
    }

    /// Removes the record with the matching id, if present.
    pub fn remove(&mut self, id: &str) {
        self.products.retain(|p| p.id != id);
    }
}

/// Pre-submission check mirroring the server-side invariants: name non-blank
/// after trimming, price strictly positive, image present.
pub fn valid_input(input: &ProductInput) -> bool {
    let name_ok = input
        .name
        .as_deref()
        .is_some_and(|name| !name.trim().is_empty());
    let price_ok = input.price.is_some_and(|price| price > 0.0);
    let image_ok = input
        .image
        .as_deref()
        .is_some_and(|image| !image.trim().is_empty());
    name_ok && price_ok && image_ok
}

/// Outcome of one store action, handed to the caller for display. Actions
/// never panic or propagate a rejection; every failure ends up here.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionResult {
    pub success: bool,
    pub message: String,
}

impl ActionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Turns an error kind into user-facing feedback. The match is exhaustive
    /// over the closed enumeration so a new kind cannot slip through
    /// unrendered.
    pub fn failure(error: &ProductError) -> Self {
        let message = match error {
            ProductError::Validation(detail)
            | ProductError::InvalidId(detail)
            | ProductError::NotFound(detail)
            | ProductError::Server(detail) => detail.clone(),
            ProductError::Network(_) => error.to_string(),
        };
        Self {
            success: false,
            message,
        }
    }
}
