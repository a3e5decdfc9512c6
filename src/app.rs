//! Car Catalog App
//!
//! Root component: loads and hydrates the catalog once, then hands it to the
//! browser that drives every render.

use catalog_core::{Catalog, CatalogBrowser, CatalogError, ImageHydrator, DEFAULT_PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::bindings::{self, JsImageHydrator};
use crate::components::{CarGrid, CarModal, Navbar, PaginationNav};
use crate::context::CatalogContext;
use crate::store::{StorePresenter, UiState, UiStateStoreFields, CARS_SECTION_ID};

#[component]
pub fn App() -> impl IntoView {
    let config = bindings::load_config();
    let store = Store::new(UiState::new(config.clone()));
    let browser = match CatalogBrowser::new(&config, StorePresenter::new(store)) {
        Ok(browser) => browser,
        Err(e) => {
            log::error!("[App] {}; using {} cards per page", e, DEFAULT_PAGE_SIZE);
            CatalogBrowser::with_page_size(DEFAULT_PAGE_SIZE, StorePresenter::new(store))
        }
    };
    let browser = StoredValue::new(browser);

    provide_context(store);
    provide_context(CatalogContext::new(store, browser));

    // Startup: hydrate images once, then render page 1
    spawn_local(async move {
        let mut catalog = match bindings::load_car_database() {
            Ok(catalog) => catalog,
            Err(CatalogError::MissingCatalog) => Catalog::default(),
            Err(e) => {
                log::error!("[App] could not read car database: {}", e);
                Catalog::default()
            }
        };

        let hydrator = JsImageHydrator::from_window();
        let outcome = catalog
            .hydrate(hydrator.as_ref().map(|h| h as &dyn ImageHydrator))
            .await;
        if outcome.is_degraded() {
            log::warn!("[App] rendering with the original image URLs");
        } else {
            log::debug!("[App] hydration outcome: {:?}", outcome);
        }

        browser.update_value(|browser| browser.load(catalog));
        store.loading().set(false);
    });

    view! {
        <Navbar />

        <section class="cars" id=CARS_SECTION_ID>
            <Show when=move || store.loading().get()>
                <div id="loading" class="loading">"Loading..."</div>
            </Show>

            <CarGrid />
            <PaginationNav />
        </section>

        <CarModal />
    }
}
