//! The product directory seam (remote REST API).

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use boutique_catalog::{NewProduct, Product};
use boutique_core::ProductId;

use crate::error::DirectoryError;
use crate::session::AuthToken;

/// An image file to upload with a new product.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read an image from disk, guessing its content type from the extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self::new(file_name, guess_content_type(path), bytes))
    }
}

impl core::fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "avif" => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Admin login form.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl core::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Remote catalog operations used by the views.
#[async_trait]
pub trait ProductDirectory: Send + Sync {
    /// Full product list.
    async fn list_products(&self) -> Result<Vec<Product>, DirectoryError>;

    /// Create a product with 1–5 images; returns the stored product.
    async fn add_product(
        &self,
        product: &NewProduct,
        images: Vec<ImageUpload>,
    ) -> Result<Product, DirectoryError>;

    async fn delete_product(&self, id: ProductId) -> Result<(), DirectoryError>;

    /// Exchange credentials for a bearer token.
    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, DirectoryError>;
}
