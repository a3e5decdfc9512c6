//! Page Bindings
//!
//! Access to the globals the host page installs before the app starts:
//! - `window.carDatabase`: array of vehicle records
//! - `window.hydrateCarImages(records)`: optional async image resolver
//! - `window.catalogConfig`: optional display overrides

use async_trait::async_trait;
use catalog_core::{Catalog, CatalogConfig, CatalogError, ImageHydrator, VehicleRecord};
use js_sys::{Function, Promise, Reflect, JSON};
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

const CAR_DATABASE: &str = "carDatabase";
const HYDRATE_HOOK: &str = "hydrateCarImages";
const CATALOG_CONFIG: &str = "catalogConfig";

fn window_global(name: &str) -> Result<JsValue, String> {
    Reflect::get(window().as_ref(), &JsValue::from_str(name)).map_err(|e| format!("{:?}", e))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

// ========================
// Car Database
// ========================

/// Read `window.carDatabase`.
///
/// A missing, non-array or empty value is [`CatalogError::MissingCatalog`].
pub fn load_car_database() -> catalog_core::Result<Catalog> {
    let value = window_global(CAR_DATABASE).map_err(|_| CatalogError::MissingCatalog)?;
    if !js_sys::Array::is_array(&value) {
        return Err(CatalogError::MissingCatalog);
    }
    let json: String = JSON::stringify(&value)
        .map_err(|_| CatalogError::MissingCatalog)?
        .into();
    Catalog::from_json(&json)
}

// ========================
// Config
// ========================

/// Read `window.catalogConfig`, falling back to defaults when absent or invalid.
pub fn load_config() -> CatalogConfig {
    let value = match window_global(CATALOG_CONFIG) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return CatalogConfig::default(),
    };

    let parsed = serde_wasm_bindgen::from_value::<CatalogConfig>(value)
        .map_err(|e| e.to_string())
        .and_then(|config| config.validate().map(|_| config).map_err(|e| e.to_string()));

    match parsed {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[Config] ignoring window.catalogConfig: {}", e);
            CatalogConfig::default()
        }
    }
}

// ========================
// Image Hydration Hook
// ========================

/// `window.hydrateCarImages` wrapped as an [`ImageHydrator`].
///
/// The hook is handed a deep copy of the page's own `window.carDatabase`
/// array, every field it carries included, never the live objects.
pub struct JsImageHydrator {
    hook: Function,
    database: JsValue,
}

impl JsImageHydrator {
    /// Returns `None` when the page did not install the hook or has no
    /// car database to hydrate.
    pub fn from_window() -> Option<Self> {
        let hook = window_global(HYDRATE_HOOK).ok()?.dyn_into::<Function>().ok()?;
        let database = window_global(CAR_DATABASE).ok()?;
        if !js_sys::Array::is_array(&database) {
            return None;
        }
        Some(Self { hook, database })
    }

    async fn call(&self) -> Result<Vec<VehicleRecord>, String> {
        let source: String = JSON::stringify(&self.database)
            .map_err(|e| js_error_message(&e))?
            .into();
        let copy = JSON::parse(&source).map_err(|e| js_error_message(&e))?;

        let returned = self
            .hook
            .call1(window().as_ref(), &copy)
            .map_err(|e| js_error_message(&e))?;

        if let Some(promise) = returned.dyn_ref::<Promise>() {
            JsFuture::from(promise.clone())
                .await
                .map_err(|e| js_error_message(&e))?;
        }

        // The hook mutates the array it was given in place
        let hydrated: String = JSON::stringify(&copy)
            .map_err(|e| js_error_message(&e))?
            .into();
        catalog_core::parse_records(&hydrated).map_err(|e| e.to_string())
    }
}

#[async_trait(?Send)]
impl ImageHydrator for JsImageHydrator {
    async fn hydrate(&self, records: &mut Vec<VehicleRecord>) -> catalog_core::Result<()> {
        *records = self.call().await.map_err(CatalogError::Hydration)?;
        Ok(())
    }
}

// ========================
// DOM Helpers
// ========================

/// Smooth-scroll so the element with `id` sits `offset` pixels below the top.
pub fn scroll_to_section(id: &str, offset: i32) {
    let Some(section) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        return;
    };

    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(section.offset_top() - offset));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Lock or release page scrolling behind the modal.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().body() {
        let overflow = if locked { "hidden" } else { "auto" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            log::debug!("[DOM] could not set body overflow: {:?}", e);
        }
    }
}
