use serde::{Deserialize, Serialize};

use boutique_core::{DomainError, Entity, Price, ProductId};

use crate::vocabulary::{CLOTHES, JEWELRY};

/// Product line.
///
/// Only clothing carries sizes; a jewelry product cannot be built with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductKind {
    Clothing { sizes: Vec<String> },
    Jewelry,
    /// A category outside the known vocabulary, kept as-is.
    Other,
}

impl ProductKind {
    /// Derive the product line from a category label (case-insensitive).
    ///
    /// `sizes` are kept only for clothing.
    pub fn from_category(category: &str, sizes: Vec<String>) -> Self {
        let category = category.trim().to_lowercase();
        if category == CLOTHES.to_lowercase() {
            ProductKind::Clothing { sizes }
        } else if category == JEWELRY.to_lowercase() {
            ProductKind::Jewelry
        } else {
            ProductKind::Other
        }
    }

    pub fn sizes(&self) -> &[String] {
        match self {
            ProductKind::Clothing { sizes } => sizes,
            ProductKind::Jewelry | ProductKind::Other => &[],
        }
    }

    /// Sizes as sent on the wire: present only for clothing that has some.
    pub fn wire_sizes(&self) -> Option<Vec<String>> {
        match self {
            ProductKind::Clothing { sizes } if !sizes.is_empty() => Some(sizes.clone()),
            _ => None,
        }
    }
}

/// Immutable product snapshot as returned by the product directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    category: String,
    sub_category: String,
    target_audience: String,
    image_urls: Vec<String>,
    kind: ProductKind,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        target_audience: impl Into<String>,
        price: Price,
    ) -> Self {
        let category = category.into();
        let kind = ProductKind::from_category(&category, Vec::new());
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            category,
            sub_category: String::new(),
            target_audience: target_audience.into(),
            image_urls: Vec::new(),
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = sub_category.into();
        self
    }

    pub fn with_image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }

    /// Attach sizes; ignored unless the product is clothing.
    pub fn with_sizes(mut self, sizes: Vec<String>) -> Self {
        if let ProductKind::Clothing { sizes: current } = &mut self.kind {
            *current = sizes;
        }
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    /// Category label exactly as received.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    /// Audience label exactly as received.
    pub fn target_audience(&self) -> &str {
        &self.target_audience
    }

    pub fn image_urls(&self) -> &[String] {
        &self.image_urls
    }

    /// First image, used as the thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    pub fn sizes(&self) -> &[String] {
        self.kind.sizes()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wire shape of a product (camelCase JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub sub_category: String,
    pub target_audience: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let price = Price::new(record.price).map_err(|e| {
            DomainError::validation(format!("product {}: {}", record.id, e.message()))
        })?;
        let kind = ProductKind::from_category(&record.category, record.sizes.unwrap_or_default());

        Ok(Self {
            id: ProductId::new(record.id),
            name: record.name,
            description: record.description,
            price,
            category: record.category,
            sub_category: record.sub_category,
            target_audience: record.target_audience,
            image_urls: record.image_urls,
            kind,
        })
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        let sizes = product.kind.wire_sizes();
        Self {
            id: product.id.get(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.amount(),
            category: product.category.clone(),
            sub_category: product.sub_category.clone(),
            target_audience: product.target_audience.clone(),
            image_urls: product.image_urls.clone(),
            sizes,
        }
    }
}
