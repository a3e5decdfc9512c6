//! Navbar Component
//!
//! Header with desktop search, hamburger menu and the collapsible mobile search.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::SearchBox;
use crate::context::use_catalog;
use crate::store::UiStateStoreFields;

/// Delay before focusing the mobile input, so the slide-in has started
const MOBILE_FOCUS_DELAY_MS: u32 = 100;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_catalog();
    let store = ctx.store;
    let mobile_input: NodeRef<Input> = NodeRef::new();

    // Any scroll folds both the menu and the mobile search away
    let scroll_listener = window_event_listener(ev::scroll, move |_| ctx.close_menus());
    on_cleanup(move || scroll_listener.remove());

    let on_search_icon = move |_| {
        if ctx.toggle_mobile_search() {
            spawn_local(async move {
                TimeoutFuture::new(MOBILE_FOCUS_DELAY_MS).await;
                if let Some(input) = mobile_input.get_untracked() {
                    if let Err(e) = input.focus() {
                        log::debug!("[Navbar] could not focus mobile search: {:?}", e);
                    }
                }
            });
        }
    };

    view! {
        <header class="header">
            <a href="#" class="logo">"Car"<span>"Catalog"</span></a>

            <nav class="navbar" class:active=move || store.menu_open().get()>
                <a href="#home">"Home"</a>
                <a href=format!("#{}", crate::store::CARS_SECTION_ID)>"Cars"</a>
                <a href="#about">"About"</a>
            </nav>

            <SearchBox input_id="search-input" wrapper_class="search-box" />

            <div class="header-icons">
                <i class="bx bx-search" id="search-icon-mobile" on:click=on_search_icon></i>
                <i class="bx bx-menu" id="menu-icon" on:click=move |_| ctx.toggle_menu()></i>
            </div>

            <div class="search-box-mobile" class:active=move || store.mobile_search_open().get()>
                <SearchBox input_id="search-input-mobile" wrapper_class="search-box" input_ref=mobile_input />
            </div>
        </header>
    }
}
