//! Products page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, and view rendering.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ProductsComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, fetch the product collection from the server; on
//!   success the whole local sequence is replaced with the server's.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ProductsComponent;

use crate::store::api;

impl Component for ProductsComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ProductsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Fetched(api::fetch_products().await));
            });
        }
    }
}
