//! New-product drafts from the admin form.

use serde::Serialize;

use boutique_core::{DomainError, DomainResult, Price};

use crate::product::ProductKind;
use crate::vocabulary::{AUDIENCES, CATEGORIES, canonical, sub_categories};

/// Upper bound on images uploaded with one product.
pub const MAX_IMAGES: usize = 5;

/// Raw form fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: String,
    pub sub_category: String,
    pub target_audience: String,
    /// Comma-separated size labels; only used for clothing.
    pub sizes: String,
}

impl ProductDraft {
    /// Change the category; the previously picked sub-category no longer applies.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.sub_category.clear();
    }

    pub fn validate(&self) -> DomainResult<NewProduct> {
        let name = required(&self.name, "name")?;
        let description = required(&self.description, "description")?;
        let price: Price = self.price.parse()?;

        let category = canonical(&CATEGORIES, &self.category).ok_or_else(|| {
            DomainError::validation(format!(
                "category must be one of: {}",
                CATEGORIES.join(", ")
            ))
        })?;

        let allowed = sub_categories(category);
        let sub_category = canonical(allowed, &self.sub_category).ok_or_else(|| {
            DomainError::validation(format!(
                "sub-category for {category} must be one of: {}",
                allowed.join(", ")
            ))
        })?;

        let target_audience = canonical(&AUDIENCES, &self.target_audience).ok_or_else(|| {
            DomainError::validation(format!(
                "audience must be one of: {}",
                AUDIENCES.join(", ")
            ))
        })?;

        let kind = ProductKind::from_category(category, parse_sizes(&self.sizes));

        Ok(NewProduct {
            name,
            description,
            price,
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            target_audience: target_audience.to_string(),
            kind,
        })
    }
}

fn required(value: &str, field: &str) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

fn parse_sizes(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Enforce the 1..=5 image rule for a new product.
pub fn check_image_count(count: usize) -> DomainResult<()> {
    if count == 0 {
        return Err(DomainError::validation("Please add at least one image"));
    }
    if count > MAX_IMAGES {
        return Err(DomainError::validation(format!(
            "Maximum {MAX_IMAGES} images allowed"
        )));
    }
    Ok(())
}

/// A validated product ready to be submitted to the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    description: String,
    price: Price,
    category: String,
    sub_category: String,
    target_audience: String,
    kind: ProductKind,
}

impl NewProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }

    pub fn target_audience(&self) -> &str {
        &self.target_audience
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// JSON body of the `productData` multipart field.
    pub fn to_record(&self) -> NewProductRecord {
        NewProductRecord {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.amount(),
            category: self.category.clone(),
            sub_category: self.sub_category.clone(),
            target_audience: self.target_audience.clone(),
            sizes: self.kind.wire_sizes(),
        }
    }
}

/// Wire shape of a new product (no id, no image URLs).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRecord {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sub_category: String,
    pub target_audience: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<String>>,
}
