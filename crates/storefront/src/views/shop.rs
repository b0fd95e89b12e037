use std::sync::Arc;

use boutique_catalog::{Facet, FilterSelection, Product, filter, result_label, shop_sample};

use crate::directory::ProductDirectory;
use crate::views::{DataSource, fetch_or_fallback};

/// Public shop: product grid with category/audience filters.
pub struct ShopView {
    directory: Arc<dyn ProductDirectory>,
    products: Vec<Product>,
    selection: FilterSelection,
    source: Option<DataSource>,
}

impl ShopView {
    pub fn new(directory: Arc<dyn ProductDirectory>) -> Self {
        Self {
            directory,
            products: Vec::new(),
            selection: FilterSelection::all(),
            source: None,
        }
    }

    /// Fetch a fresh product list, replacing whatever was shown.
    pub async fn load(&mut self) -> DataSource {
        let (products, source) = fetch_or_fallback(self.directory.as_ref(), shop_sample).await;
        tracing::info!(count = products.len(), ?source, "shop loaded");
        self.products = products;
        self.source = Some(source);
        source
    }

    pub fn is_loading(&self) -> bool {
        self.source.is_none()
    }

    pub fn source(&self) -> Option<DataSource> {
        self.source
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn select_category(&mut self, category: Facet) {
        self.selection.category = category;
    }

    pub fn select_audience(&mut self, audience: Facet) {
        self.selection.audience = audience;
    }

    pub fn clear_filters(&mut self) {
        self.selection.clear();
    }

    /// Products passing the current selection.
    pub fn visible(&self) -> Vec<&Product> {
        filter(&self.products, &self.selection)
    }

    pub fn result_label(&self) -> String {
        result_label(self.visible().len())
    }
}
