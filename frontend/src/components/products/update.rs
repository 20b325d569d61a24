//! Update logic for the products page.
//!
//! Synchronous messages mutate the component state directly. Messages that
//! need the server spawn the request through `store::api` and come back as an
//! outcome message carrying a `Result`; only a success outcome touches the
//! store, so a failed call leaves the local collection exactly as it was.

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::store::{api, ActionResult};

use super::messages::Msg;
use super::state::{EditForm, ProductForm, ProductsComponent};

pub fn update(component: &mut ProductsComponent, ctx: &Context<ProductsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::NameInput(value) => {
            component.form.name = value;
            true
        }
        Msg::PriceInput(value) => {
            component.form.price = value;
            true
        }
        Msg::ImageInput(value) => {
            component.form.image = value;
            true
        }

        Msg::Submit => {
            let input = component.form.to_input();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Created(api::create_product(&input).await));
            });
            false
        }
        Msg::Created(Ok(product)) => {
            component.store.push(product);
            component.form.clear();
            component.feedback = Some(ActionResult::success("New product added"));
            true
        }
        Msg::Created(Err(e)) => {
            error!(format!("Error creating product: {}", e));
            component.feedback = Some(ActionResult::failure(&e));
            true
        }

        Msg::Fetched(Ok(products)) => {
            component.store.set_products(products);
            true
        }
        Msg::Fetched(Err(e)) => {
            error!(format!("Error fetching products: {}", e));
            component.feedback = Some(ActionResult::failure(&e));
            true
        }

        Msg::StartEdit(id) => {
            let current = component.store.products().iter().find(|p| p.id == id);
            component.editing = current.map(|product| EditForm {
                id: product.id.clone(),
                fields: ProductForm::from_product(product),
            });
            true
        }
        Msg::CancelEdit => {
            component.editing = None;
            true
        }
        Msg::EditNameInput(value) => {
            if let Some(edit) = component.editing.as_mut() {
                edit.fields.name = value;
            }
            true
        }
        Msg::EditPriceInput(value) => {
            if let Some(edit) = component.editing.as_mut() {
                edit.fields.price = value;
            }
            true
        }
        Msg::EditImageInput(value) => {
            if let Some(edit) = component.editing.as_mut() {
                edit.fields.image = value;
            }
            true
        }
        Msg::SaveEdit => {
            if let Some(edit) = &component.editing {
                let id = edit.id.clone();
                let input = edit.fields.to_input();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Updated(api::update_product(&id, &input).await));
                });
            }
            false
        }
        Msg::Updated(Ok(product)) => {
            // The server's record replaces the cached one in place.
            component.store.replace(product);
            component.editing = None;
            component.feedback = Some(ActionResult::success("Product updated"));
            true
        }
        Msg::Updated(Err(e)) => {
            error!(format!("Error updating product: {}", e));
            component.feedback = Some(ActionResult::failure(&e));
            true
        }

        Msg::Delete(id) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api::delete_product(&id).await;
                link.send_message(Msg::Deleted(id, result));
            });
            false
        }
        Msg::Deleted(id, Ok(message)) => {
            component.store.remove(&id);
            component.feedback = Some(ActionResult::success(message));
            true
        }
        Msg::Deleted(_, Err(e)) => {
            error!(format!("Error deleting product: {}", e));
            component.feedback = Some(ActionResult::failure(&e));
            true
        }
    }
}
