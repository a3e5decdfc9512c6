//! Pagination Nav Component
//!
//! Previous/next buttons around a "Page N of M" label.

use catalog_core::ViewStatus;
use leptos::prelude::*;

use crate::context::use_catalog;
use crate::store::UiStateStoreFields;

#[component]
pub fn PaginationNav() -> impl IntoView {
    let ctx = use_catalog();
    let store = ctx.store;

    // No navigation until a catalog exists
    let visible = move || {
        !store.loading().get()
            && store.frame().with(|frame| frame.status != ViewStatus::MissingCatalog)
    };
    let label = move || store.frame().with(|frame| frame.label());

    view! {
        <Show when=visible>
            <div id="pagination-nav">
                <button
                    id="btn-prev"
                    title="Previous page"
                    disabled=move || store.frame().with(|frame| !frame.has_prev())
                    on:click=move |_| ctx.prev_page()
                >
                    <i class="bx bx-chevron-left"></i>
                </button>

                <span id="page-info">{label}</span>

                <button
                    id="btn-next"
                    title="Next page"
                    disabled=move || store.frame().with(|frame| !frame.has_next())
                    on:click=move |_| ctx.next_page()
                >
                    <i class="bx bx-chevron-right"></i>
                </button>
            </div>
        </Show>
    }
}
