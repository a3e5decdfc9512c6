//! Car Grid Component
//!
//! Cards for the current page, or the empty-state message.

use catalog_core::{CardView, ViewStatus};
use leptos::prelude::*;

use crate::components::CarCard;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn CarGrid() -> impl IntoView {
    let store = use_ui_store();

    let content = move || {
        let frame = store.frame().get();
        let config = store.config().get();

        match frame.status {
            ViewStatus::MissingCatalog => view! {
                <p class="empty-state">{config.missing_catalog_message}</p>
            }
            .into_any(),
            ViewStatus::NoResults => view! {
                <p class="empty-state">{config.no_results_message}</p>
            }
            .into_any(),
            ViewStatus::Ready => frame
                .items
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    let card = CardView::new(record, &config);
                    view! { <CarCard card=card index=index /> }
                })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div id="cars-container" class="cars-container">
            {content}
        </div>
    }
}
