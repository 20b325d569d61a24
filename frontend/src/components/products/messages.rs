use common::error::ProductError;
use common::model::product::Product;

pub enum Msg {
    // Create form edits.
    NameInput(String),
    PriceInput(String),
    ImageInput(String),
    Submit,
    // Card controls.
    StartEdit(String),
    CancelEdit,
    EditNameInput(String),
    EditPriceInput(String),
    EditImageInput(String),
    SaveEdit,
    Delete(String),
    // Async action outcomes.
    Fetched(Result<Vec<Product>, ProductError>),
    Created(Result<Product, ProductError>),
    Updated(Result<Product, ProductError>),
    Deleted(String, Result<String, ProductError>),
}
