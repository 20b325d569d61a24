//! View rendering for the products page: a feedback banner, the create form,
//! and the product list as cards with inline editing.
//!
//! Styling is limited to class hooks and a few inline rules; the page is
//! functional without a stylesheet.

use common::model::product::Product;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{ProductForm, ProductsComponent};

pub fn view(component: &ProductsComponent, ctx: &Context<ProductsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="products-root">
            <h1>{ "Products" }</h1>
            { build_feedback(component) }
            { build_create_form(component, link) }
            { build_product_list(component, link) }
        </div>
    }
}

/// Renders the last action's outcome, if any, as a transient banner.
fn build_feedback(component: &ProductsComponent) -> Html {
    match &component.feedback {
        Some(result) => {
            let class = if result.success {
                "feedback feedback-ok"
            } else {
                "feedback feedback-error"
            };
            html! { <p class={class}>{ result.message.clone() }</p> }
        }
        None => html! {},
    }
}

/// The create form: three inputs and a submit button. Validation happens in
/// the store, so the button is always enabled.
fn build_create_form(component: &ProductsComponent, link: &Scope<ProductsComponent>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="create-form" {onsubmit}>
            { text_input("Name", &component.form.name, link.callback(|v| Msg::NameInput(v))) }
            { text_input("Price", &component.form.price, link.callback(|v| Msg::PriceInput(v))) }
            { text_input("Image URL", &component.form.image, link.callback(|v| Msg::ImageInput(v))) }
            <button type="submit">{ "Add product" }</button>
        </form>
    }
}

fn build_product_list(component: &ProductsComponent, link: &Scope<ProductsComponent>) -> Html {
    if component.store.products().is_empty() {
        return html! { <p class="empty">{ "No products yet." }</p> };
    }

    html! {
        <div class="product-list">
            { for component.store.products().iter().map(|product| {
                let editing = component
                    .editing
                    .as_ref()
                    .filter(|edit| edit.id == product.id)
                    .map(|edit| &edit.fields);
                build_product_card(product, editing, link)
            }) }
        </div>
    }
}

/// One card per record: image, name, price and the edit/delete controls, or
/// the inline edit form while this card is being edited.
fn build_product_card(
    product: &Product,
    editing: Option<&ProductForm>,
    link: &Scope<ProductsComponent>,
) -> Html {
    let body = match editing {
        Some(fields) => build_edit_form(fields, link),
        None => {
            let edit_id = product.id.clone();
            let delete_id = product.id.clone();
            html! {
                <>
                    <span class="product-name">{ product.name.clone() }</span>
                    <span class="product-price">{ format!("${:.2}", product.price) }</span>
                    <button onclick={link.callback(move |_| Msg::StartEdit(edit_id.clone()))}>
                        { "Edit" }
                    </button>
                    <button onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                        { "Delete" }
                    </button>
                </>
            }
        }
    };

    html! {
        <div class="product-card" key={product.id.clone()}>
            <img src={product.image.clone()} alt={product.name.clone()} />
            { body }
        </div>
    }
}

fn build_edit_form(fields: &ProductForm, link: &Scope<ProductsComponent>) -> Html {
    html! {
        <div class="edit-form">
            { text_input("Name", &fields.name, link.callback(|v| Msg::EditNameInput(v))) }
            { text_input("Price", &fields.price, link.callback(|v| Msg::EditPriceInput(v))) }
            { text_input("Image URL", &fields.image, link.callback(|v| Msg::EditImageInput(v))) }
            <button onclick={link.callback(|_| Msg::SaveEdit)}>{ "Save" }</button>
            <button onclick={link.callback(|_| Msg::CancelEdit)}>{ "Cancel" }</button>
        </div>
    }
}

fn text_input(placeholder: &'static str, value: &str, on_value: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        on_value.emit(input.value());
    });

    html! {
        <input
            type="text"
            {placeholder}
            value={value.to_string()}
            {oninput}
        />
    }
}
