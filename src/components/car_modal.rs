//! Car Detail Modal
//!
//! Display-only view of one record. Closes on the close button or a click on
//! the backdrop.

use catalog_core::DetailView;
use leptos::prelude::*;

use crate::context::use_catalog;
use crate::store::UiStateStoreFields;

#[component]
pub fn CarModal() -> impl IntoView {
    let ctx = use_catalog();
    let store = ctx.store;

    // Field accessor for the current detail; "-" before anything was opened
    let field = move |get: fn(&DetailView) -> String| {
        move || {
            store
                .detail()
                .with(|detail| detail.as_ref().map(get).unwrap_or_else(|| "-".to_string()))
        }
    };

    let on_backdrop = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            ctx.close_details();
        }
    };

    view! {
        <div
            id="car-modal"
            class="modal"
            class:open=move || store.modal_open().get()
            style:display=move || if store.modal_visible().get() { "flex" } else { "none" }
            on:click=on_backdrop
        >
            <div class="modal-content">
                <button id="close-modal-btn" class="close-modal" on:click=move |_| ctx.close_details()>
                    <i class="bx bx-x"></i>
                </button>

                <img id="m-img" src=field(|d| d.image.clone()) alt="" />

                <div class="modal-info">
                    <h2 id="m-brand">{field(|d| d.make.clone())}</h2>
                    <h3 id="m-model">{field(|d| d.model.clone())}</h3>

                    <div class="modal-specs">
                        <p>"Year: "<span id="m-year">{field(|d| d.year.clone())}</span></p>
                        <p>"Engine: "<span id="m-engine">{field(|d| d.engine.clone())}</span></p>
                        <p>"Transmission: "<span id="m-trans">{field(|d| d.transmission.clone())}</span></p>
                        <p>"Drive: "<span id="m-drive">{field(|d| d.drive.clone())}</span></p>
                        <p>"City MPG: "<span id="m-mpg">{field(|d| d.city_mpg.clone())}</span></p>
                        <p>"Fuel: "<span id="m-fuel">{field(|d| d.fuel.clone())}</span></p>
                    </div>

                    <span id="m-price" class="price">{field(|d| d.price.clone())}</span>
                </div>
            </div>
        </div>
    }
}
