use std::sync::Arc;

use boutique_catalog::{InventoryStats, Product, aggregate, dashboard_sample};
use boutique_core::{Entity, ProductId};

use crate::directory::ProductDirectory;
use crate::error::ViewError;
use crate::session::SessionHandle;
use crate::views::{DataSource, fetch_or_fallback};

/// Admin dashboard: inventory table, summary stats, deletes.
pub struct DashboardView {
    directory: Arc<dyn ProductDirectory>,
    products: Vec<Product>,
    source: DataSource,
}

impl DashboardView {
    /// Open the dashboard; requires an authenticated session.
    pub async fn open(
        directory: Arc<dyn ProductDirectory>,
        session: &SessionHandle,
    ) -> Result<Self, ViewError> {
        if !session.is_authenticated() {
            return Err(ViewError::LoginRequired);
        }

        let (products, source) = fetch_or_fallback(directory.as_ref(), dashboard_sample).await;
        tracing::info!(count = products.len(), ?source, "dashboard loaded");

        Ok(Self {
            directory,
            products,
            source,
        })
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn stats(&self) -> InventoryStats {
        aggregate(&self.products)
    }

    /// Delete a product remotely, then drop it from the table.
    ///
    /// The table is left untouched when the directory rejects the delete.
    pub async fn delete(&mut self, id: ProductId) -> Result<Option<Product>, ViewError> {
        if let Err(e) = self.directory.delete_product(id).await {
            tracing::error!(product_id = %id, error = %e, "delete failed");
            return Err(e.into());
        }

        let removed = self
            .products
            .iter()
            .position(|p| *p.id() == id)
            .map(|index| self.products.remove(index));
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::session::{AuthToken, Session};
    use crate::views::fake::{FakeDirectory, product};

    fn signed_in() -> (crate::session::SessionWriter, SessionHandle) {
        let (writer, handle) = Session::in_memory();
        writer.login(AuthToken::parse("t").unwrap()).unwrap();
        (writer, handle)
    }

    fn inventory() -> Vec<Product> {
        vec![
            product(1, "Saree", "Clothes", "Women", 100.0),
            product(2, "Necklace", "Jewelry", "Women", 200.0),
            product(3, "KidsDress", "Clothes", "Kids 1-10yrs", 50.0),
        ]
    }

    #[tokio::test]
    async fn requires_session() {
        let (_writer, anonymous) = Session::in_memory();
        let directory = Arc::new(FakeDirectory::with_products(inventory()));
        let err = DashboardView::open(directory, &anonymous).await.err().unwrap();
        assert!(matches!(err, ViewError::LoginRequired));
    }

    #[tokio::test]
    async fn stats_follow_the_table() {
        let (_writer, session) = signed_in();
        let directory = Arc::new(FakeDirectory::with_products(inventory()));
        let mut view = DashboardView::open(directory.clone(), &session).await.unwrap();
        assert_eq!(view.source(), DataSource::Live);

        let stats = view.stats();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.total_value, 350.0);
        assert_eq!(stats.distinct_categories, 2);
        assert_eq!(stats.distinct_audiences, 2);

        let removed = view.delete(ProductId::new(2)).await.unwrap();
        assert_eq!(removed.map(|p| p.name().to_string()), Some("Necklace".to_string()));
        assert_eq!(directory.deleted.lock().unwrap().as_slice(), [ProductId::new(2)]);

        let stats = view.stats();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_value, 150.0);
        assert_eq!(stats.distinct_categories, 1);
    }

    #[tokio::test]
    async fn failed_delete_keeps_the_row() {
        let (_writer, session) = signed_in();
        let directory = Arc::new(FakeDirectory {
            reject_deletes: true,
            ..FakeDirectory::with_products(inventory())
        });
        let mut view = DashboardView::open(directory, &session).await.unwrap();

        let err = view.delete(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, ViewError::Directory(DirectoryError::Api { status: 500, .. })));
        assert_eq!(err.notice("delete product"), "Failed to delete product. Please try again.");
        assert_eq!(view.products().len(), 3);
    }

    #[tokio::test]
    async fn offline_dashboard_shows_sample_inventory() {
        let (_writer, session) = signed_in();
        let view = DashboardView::open(Arc::new(FakeDirectory::offline()), &session)
            .await
            .unwrap();
        assert_eq!(view.source(), DataSource::Sample);
        assert_eq!(view.stats().count, 3);
        assert_eq!(view.stats().total_value, 12999.0 + 25999.0 + 8999.0);
    }

    #[tokio::test]
    async fn deleting_unknown_row_is_a_no_op_locally() {
        let (_writer, session) = signed_in();
        let directory = Arc::new(FakeDirectory::with_products(inventory()));
        let mut view = DashboardView::open(directory, &session).await.unwrap();
        assert_eq!(view.delete(ProductId::new(99)).await.unwrap(), None);
        assert_eq!(view.products().len(), 3);
    }
}
