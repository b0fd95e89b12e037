//! View controllers: own fetch timing and view state, call into the catalog.
//!
//! Actions take `&mut self`, so a view never has two of its own requests in
//! flight at once.

pub mod add_product;
pub mod dashboard;
pub mod login;
pub mod shop;

pub use add_product::AddProductView;
pub use dashboard::DashboardView;
pub use login::{login, login_notice, logout};
pub use shop::ShopView;

use boutique_catalog::Product;

use crate::directory::ProductDirectory;

/// Where the products on screen came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Fetched from the product directory.
    Live,
    /// The directory failed; showing the built-in sample catalog.
    Sample,
}

/// Fetch the product list, falling back to `fallback()` on any failure.
pub(crate) async fn fetch_or_fallback(
    directory: &dyn ProductDirectory,
    fallback: fn() -> Vec<Product>,
) -> (Vec<Product>, DataSource) {
    match directory.list_products().await {
        Ok(products) => (products, DataSource::Live),
        Err(e) => {
            tracing::warn!(error = %e, "product list unavailable; showing sample catalog");
            (fallback(), DataSource::Sample)
        }
    }
}
