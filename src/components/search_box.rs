//! Search Box Component
//!
//! Text input feeding the filter on every keystroke.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_catalog;

/// Search input; the desktop and mobile variants differ only in id/class
#[component]
pub fn SearchBox(
    #[prop(into)] input_id: String,
    #[prop(into)] wrapper_class: String,
    #[prop(optional)] input_ref: NodeRef<Input>,
) -> impl IntoView {
    let ctx = use_catalog();

    view! {
        <div class=wrapper_class>
            <input
                type="search"
                id=input_id
                placeholder="Search make or model..."
                autocomplete="off"
                node_ref=input_ref
                on:input=move |ev| ctx.search(&event_target_value(&ev))
            />
            <i class="bx bx-search"></i>
        </div>
    }
}
