// Product model and request DTOs
//
// A product row is owned by the store. `available` is the soft-delete flag:
// rows are never physically removed, only marked unavailable.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

use crate::core::{AppError, Result};

/// Maximum length accepted for a product name, in characters
pub const MAX_NAME_LENGTH: usize = 255;

/// Decimal places stored for a price (`DECIMAL(12, 2)`)
pub const MAX_PRICE_SCALE: u32 = 2;

/// Largest price the `price` column can hold
pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);

/// A catalog product as stored in the `products` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    /// Store-generated identifier
    pub id: i64,

    pub name: String,

    pub price: Decimal,

    /// `false` means logically deleted
    pub available: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
}

impl CreateProductRequest {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Validate request shape before it reaches the service
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Partial update payload
///
/// Every key of the raw body is kept track of: known fields distinguish
/// "absent" (`None`) from "sent as null" (`Some(None)`), and unrecognised
/// keys land in `other`. `id` is accepted but always stripped before the
/// update reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProductRequest {
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<Option<i64>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<Option<String>>,

    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Option<Decimal>>,

    /// Keys this layer does not update; counted, never applied
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

/// Marks a key as present even when its value is `null`
fn present<'de, T, D>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateProductRequest {
    pub fn set_id(mut self, id: i64) -> Self {
        self.id = Some(Some(id));
        self
    }

    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    pub fn set_price(mut self, price: Decimal) -> Self {
        self.price = Some(Some(price));
        self
    }

    /// Number of keys in the raw payload, `id` and unknown keys included
    pub fn key_count(&self) -> usize {
        [self.id.is_some(), self.name.is_some(), self.price.is_some()]
            .iter()
            .filter(|present| **present)
            .count()
            + self.other.len()
    }

    /// True when the raw payload carries no keys at all
    pub fn is_empty(&self) -> bool {
        self.key_count() == 0
    }

    /// Drop the identifier, nulls and unknown keys; keep the columns to change
    pub fn into_changes(self) -> ProductChanges {
        ProductChanges {
            name: self.name.flatten(),
            price: self.price.flatten(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(Some(name)) = &self.name {
            validate_name(name)?;
        }
        if let Some(Some(price)) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

/// Column changes applied by an update, never including the primary key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<Decimal>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }

    /// Apply the changes to an in-memory copy of a row
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
    }
}

/// Request body for batch validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateProductsRequest {
    pub ids: Vec<i64>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Product name cannot be empty"));
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "Product name cannot exceed {} characters",
            MAX_NAME_LENGTH
        )));
    }

    Ok(())
}

fn validate_price(price: Decimal) -> Result<()> {
    if price < Decimal::ZERO {
        return Err(AppError::validation("Product price cannot be negative"));
    }

    // Trailing zeros do not count: 1.500 is stored exactly as 1.50
    if price.normalize().scale() > MAX_PRICE_SCALE {
        return Err(AppError::validation(format!(
            "Product price cannot have more than {} decimal places",
            MAX_PRICE_SCALE
        )));
    }

    if price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "Product price cannot exceed {}",
            MAX_PRICE
        )));
    }

    Ok(())
}
