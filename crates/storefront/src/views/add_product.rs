use std::sync::Arc;

use boutique_catalog::{Product, ProductDraft, check_image_count};

use crate::directory::{ImageUpload, ProductDirectory};
use crate::error::ViewError;
use crate::session::SessionHandle;

/// Admin form for creating a product.
pub struct AddProductView {
    directory: Arc<dyn ProductDirectory>,
    session: SessionHandle,
}

impl AddProductView {
    /// Open the form; requires an authenticated session.
    pub fn open(
        directory: Arc<dyn ProductDirectory>,
        session: SessionHandle,
    ) -> Result<Self, ViewError> {
        if !session.is_authenticated() {
            return Err(ViewError::LoginRequired);
        }
        Ok(Self { directory, session })
    }

    /// Validate and submit. Nothing is sent unless both the images and the
    /// form fields are valid.
    pub async fn submit(
        &mut self,
        draft: &ProductDraft,
        images: Vec<ImageUpload>,
    ) -> Result<Product, ViewError> {
        if !self.session.is_authenticated() {
            return Err(ViewError::LoginRequired);
        }

        check_image_count(images.len())?;
        let product = draft.validate()?;

        let created = self.directory.add_product(&product, images).await?;
        tracing::info!(product_id = %created.id_typed(), "product created from admin form");
        Ok(created)
    }
}
