//! Car Card Component

use catalog_core::CardView;
use leptos::prelude::*;

use crate::context::use_catalog;

/// One catalog card. `index` is the card's position on the current page.
#[component]
pub fn CarCard(card: CardView, index: usize) -> impl IntoView {
    let ctx = use_catalog();
    let (image_failed, set_image_failed) = signal(false);

    let CardView {
        image,
        fallback_image,
        category,
        make,
        model,
        year,
        engine,
        transmission,
        price,
    } = card;
    let alt = model.clone();

    // Broken images switch to the placeholder once
    let src = move || {
        if image_failed.get() {
            fallback_image.clone()
        } else {
            image.clone()
        }
    };

    view! {
        <div class="box">
            <div class="box-img-wrapper">
                <img
                    src=src
                    alt=alt
                    loading="lazy"
                    on:error=move |_| set_image_failed.set(true)
                />
                <span class="category-tag">{category}</span>
            </div>

            <div class="box-content">
                <div>
                    <h2>{make}</h2>
                    <h3>{model}</h3>

                    <div class="specs-grid">
                        <div class="spec-item" title="Year">
                            <i class="bx bxs-calendar"></i>" "{year}
                        </div>
                        <div class="spec-item" title="Engine">
                            <i class="bx bxs-car-mechanic"></i>" "{engine}
                        </div>
                        <div class="spec-item" title="Transmission">
                            <i class="bx bx-cog"></i>" "{transmission}
                        </div>
                    </div>
                </div>

                <div class="price-row">
                    <span class="price">{price}</span>
                    <button class="details-btn" on:click=move |_| ctx.open_details(index)>
                        "Details "<i class="bx bx-right-arrow-alt"></i>
                    </button>
                </div>
            </div>
        </div>
    }
}
