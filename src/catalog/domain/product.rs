use crate::shared::error::CatalogError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// Product value object as read from a catalog snapshot
///
/// Products are read-only inputs to the query engine: every service
/// returns new collections and never mutates a product in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", rename_all = "camelCase")]
pub struct Product {
    id: String,
    name: String,
    description: String,
    price: f64,
    stock: u32,
    category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    category_slug: Option<String>,
    #[serde(rename = "vendor", skip_serializing_if = "Option::is_none")]
    vendor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vendor_id: Option<String>,
    tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
}

impl Product {
    /// Creates a product with the required fields; optional fields are
    /// filled in with the `with_*` builders.
    ///
    /// # Errors
    /// - Empty identifier
    /// - Negative or non-finite price
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CatalogError::validation("Product id cannot be empty").into());
        }
        validate_price(&id, price)?;

        Ok(Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
            stock: 0,
            category: String::new(),
            category_slug: None,
            vendor_name: None,
            vendor_id: None,
            tags: Vec::new(),
            condition: None,
            rating: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_category_slug(mut self, slug: impl Into<String>) -> Self {
        self.category_slug = non_empty(slug.into());
        self
    }

    /// Sets the vendor identifier and its display name
    pub fn with_vendor(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.vendor_id = non_empty(id.into());
        self.vendor_name = Some(name.into());
        self
    }

    pub fn with_vendor_id(mut self, id: impl Into<String>) -> Self {
        self.vendor_id = non_empty(id.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = non_empty(condition.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating).filter(|r| r.is_finite());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Human-readable category name
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Precomputed category slug, if the catalog supplied one
    pub fn category_slug(&self) -> Option<&str> {
        self.category_slug.as_deref()
    }

    pub fn vendor_id(&self) -> Option<&str> {
        self.vendor_id.as_deref()
    }

    /// Vendor display name
    pub fn vendor_name(&self) -> Option<&str> {
        self.vendor_name.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn rating(&self) -> Option<f64> {
        self.rating
    }
}

fn validate_price(id: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::validation(format!(
            "Product '{}' has an invalid price: {} (must be a non-negative number)",
            id, price
        ))
        .into());
    }
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    Some(value).filter(|v| !v.is_empty())
}

/// Raw catalog record, validated into a [`Product`] on deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    #[serde(default)]
    description: Option<String>,
    price: f64,
    #[serde(default)]
    stock: i64,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    category_slug: Option<String>,
    /// The storefront API sends either a display name or a nested vendor
    /// object here; only the string form carries a usable name.
    #[serde(default)]
    vendor: Option<serde_json::Value>,
    #[serde(default)]
    vendor_id: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
    #[serde(default)]
    condition: Option<String>,
    #[serde(default)]
    rating: Option<f64>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = anyhow::Error;

    fn try_from(record: ProductRecord) -> Result<Self> {
        let stock = u32::try_from(record.stock).map_err(|_| {
            CatalogError::validation(format!(
                "Product '{}' has an invalid stock count: {} (must be between 0 and {})",
                record.id,
                record.stock,
                u32::MAX
            ))
        })?;

        let mut product = Product::new(record.id, record.name, record.price)?
            .with_description(record.description.unwrap_or_default())
            .with_stock(stock)
            .with_category(record.category.unwrap_or_default())
            .with_tags(record.tags.unwrap_or_default());

        product.category_slug = record.category_slug.and_then(non_empty);
        product.vendor_id = record.vendor_id.and_then(non_empty);
        product.vendor_name = record
            .vendor
            .and_then(|v| v.as_str().map(str::to_string));
        product.condition = record.condition.and_then(non_empty);
        product.rating = record.rating.filter(|r| r.is_finite());

        Ok(product)
    }
}
