//! HTTP client for the product directory.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use boutique_catalog::{NewProduct, Product, ProductRecord, check_image_count};
use boutique_core::ProductId;

use crate::config::StorefrontConfig;
use crate::directory::{Credentials, ImageUpload, ProductDirectory};
use crate::error::DirectoryError;
use crate::session::{AuthToken, SessionHandle};

#[derive(Debug, Deserialize)]
struct AuthResponse {
    token: String,
}

/// reqwest-backed [`ProductDirectory`].
///
/// Attaches the session's bearer token (when present) to every request and
/// fails any request that exceeds the configured timeout. No retries.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    api_url: String,
    client: reqwest::Client,
    session: SessionHandle,
}

impl HttpDirectory {
    pub fn new(config: &StorefrontConfig, session: SessionHandle) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DirectoryError::Request(e.to_string()))?;

        Ok(Self {
            api_url: config.api_url.clone(),
            client,
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.bearer_token() {
            Some(token) => req.bearer_auth(token.as_str()),
            None => req,
        }
    }

    async fn send(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, DirectoryError> {
        let resp = self.authorize(req).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(DirectoryError::api(status, body));
        }

        Ok(resp)
    }
}

#[async_trait]
impl ProductDirectory for HttpDirectory {
    async fn list_products(&self) -> Result<Vec<Product>, DirectoryError> {
        let resp = self.send(self.client.get(self.url("/products/all"))).await?;
        let records: Vec<ProductRecord> = resp.json().await?;

        let products = records
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = products.len(), "fetched product list");
        Ok(products)
    }

    async fn add_product(
        &self,
        product: &NewProduct,
        images: Vec<ImageUpload>,
    ) -> Result<Product, DirectoryError> {
        check_image_count(images.len())?;

        let product_data = serde_json::to_string(&product.to_record())
            .map_err(|e| DirectoryError::Request(e.to_string()))?;

        let mut form = Form::new().text("productData", product_data);
        for image in images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)
                .map_err(|e| DirectoryError::Request(e.to_string()))?;
            form = form.part("images", part);
        }

        let resp = self
            .send(self.client.post(self.url("/products/add")).multipart(form))
            .await?;
        let record: ProductRecord = resp.json().await?;
        let created = Product::try_from(record)?;

        tracing::info!(product_id = %created.id_typed(), name = created.name(), "product added");
        Ok(created)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), DirectoryError> {
        self.send(self.client.delete(self.url(&format!("/products/{id}"))))
            .await?;
        tracing::info!(product_id = %id, "product deleted");
        Ok(())
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthToken, DirectoryError> {
        let resp = self
            .send(self.client.post(self.url("/auth/login")).json(credentials))
            .await?;
        let auth: AuthResponse = resp.json().await?;

        AuthToken::parse(auth.token).ok_or_else(|| {
            DirectoryError::Parse("login response carried an empty token".to_string())
        })
    }
}
