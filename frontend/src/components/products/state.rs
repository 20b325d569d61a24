//! Component state for the products page.

use common::model::product::Product;
use common::requests::ProductInput;

use crate::store::{ActionResult, ProductStore};

/// Main state container for the products page.
///
/// Owns the [`ProductStore`] (the page is the composition root for client
/// state), the create-form fields, the in-progress edit if any, and the last
/// action's feedback. Fields are `pub` because they are accessed by the
/// `view` and `update` modules.
pub struct ProductsComponent {
    /// The client-side mirror of the product collection.
    pub store: ProductStore,

    /// Contents of the create form.
    pub form: ProductForm,

    /// The card currently being edited, if any.
    pub editing: Option<EditForm>,

    /// Outcome of the last action, rendered as a banner until the next one.
    pub feedback: Option<ActionResult>,

    /// Guard to avoid running the first-render fetch more than once.
    pub loaded: bool,
}

impl ProductsComponent {
    pub fn new() -> Self {
        Self {
            store: ProductStore::new(),
            form: ProductForm::default(),
            editing: None,
            feedback: None,
            loaded: false,
        }
    }
}

/// Raw text of the product form inputs. The price stays a string until
/// submission so the user can type freely; parsing happens in `to_input`.
#[derive(Clone, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub image: String,
}

impl ProductForm {
    /// Converts the raw fields into a request payload. Blank fields and an
    /// unparsable price come out as `None`, which the store-side validation
    /// then rejects for creates.
    pub fn to_input(&self) -> ProductInput {
        let name = self.name.trim();
        let image = self.image.trim();
        ProductInput {
            name: (!name.is_empty()).then(|| name.to_string()),
            price: self.price.trim().parse().ok(),
            image: (!image.is_empty()).then(|| image.to_string()),
        }
    }

    /// Pre-fills the form from a card's current values for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// An edit in progress: which record, and the form bound to it.
pub struct EditForm {
    pub id: String,
    pub fields: ProductForm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_input_trims_and_parses() {
        let form = ProductForm {
            name: "  Pen  ".to_string(),
            price: " 1.5 ".to_string(),
            image: "http://x/pen.png".to_string(),
        };
        let input = form.to_input();
        assert_eq!(input.name.as_deref(), Some("Pen"));
        assert_eq!(input.price, Some(1.5));
        assert_eq!(input.image.as_deref(), Some("http://x/pen.png"));
    }

    #[test]
    fn to_input_drops_blank_and_unparsable_fields() {
        let form = ProductForm {
            name: "   ".to_string(),
            price: "free".to_string(),
            image: String::new(),
        };
        let input = form.to_input();
        assert_eq!(input.name, None);
        assert_eq!(input.price, None);
        assert_eq!(input.image, None);
    }
}
