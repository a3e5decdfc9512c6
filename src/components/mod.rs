//! UI Components
//!
//! Leptos components for the catalog page.

mod car_card;
mod car_grid;
mod car_modal;
mod navbar;
mod pagination_nav;
mod search_box;

pub use car_card::CarCard;
pub use car_grid::CarGrid;
pub use car_modal::CarModal;
pub use navbar::Navbar;
pub use pagination_nav::PaginationNav;
pub use search_box::SearchBox;
