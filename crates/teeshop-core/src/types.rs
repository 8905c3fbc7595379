//! Product identity types shared by the cart and the catalog

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};
use crate::money::Money;

/// Stable product identifier; the unique key of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A product that can be placed in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Money,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}

/// Raw data carried by an "add to cart" control.
///
/// Every field is optional text, exactly as a catalog author wrote it; nothing
/// is trusted until [`ProductTag::to_product`] has checked it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl ProductTag {
    pub fn new(id: &str, name: &str, price: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            price: Some(price.to_string()),
        }
    }

    /// Validate the tag into a [`Product`].
    ///
    /// # Errors
    ///
    /// `MissingField` when id, name or price is absent or blank;
    /// `InvalidPrice` when the price is not a non-negative decimal.
    pub fn to_product(&self) -> ShopResult<Product> {
        let id = non_blank(&self.id).ok_or(ShopError::MissingField("id"))?;
        let name = non_blank(&self.name).ok_or(ShopError::MissingField("name"))?;
        let price = non_blank(&self.price).ok_or(ShopError::MissingField("price"))?;
        Ok(Product::new(id, name, Money::parse(price)?))
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::from("shirt-1");
        assert_eq!(format!("{}", id), "shirt-1");
        assert_eq!(id.as_str(), "shirt-1");
    }

    #[test]
    fn test_tag_to_product() {
        let tag = ProductTag::new("shirt-1", "Classic Tee", "250");
        let product = tag.to_product().unwrap();
        assert_eq!(product.id, ProductId::from("shirt-1"));
        assert_eq!(product.name, "Classic Tee");
        assert_eq!(product.unit_price, Money::from_pesos(250));
    }

    #[test]
    fn test_tag_trims_fields() {
        let tag = ProductTag::new("  shirt-1 ", " Classic Tee ", " 250 ");
        let product = tag.to_product().unwrap();
        assert_eq!(product.id.as_str(), "shirt-1");
        assert_eq!(product.name, "Classic Tee");
    }

    #[test]
    fn test_tag_missing_fields() {
        let mut tag = ProductTag::new("shirt-1", "Classic Tee", "250");
        tag.price = None;
        assert!(matches!(tag.to_product(), Err(ShopError::MissingField("price"))));

        tag = ProductTag::new("   ", "Classic Tee", "250");
        assert!(matches!(tag.to_product(), Err(ShopError::MissingField("id"))));

        tag = ProductTag::default();
        assert!(matches!(tag.to_product(), Err(ShopError::MissingField("id"))));
    }

    #[test]
    fn test_tag_invalid_price() {
        let tag = ProductTag::new("shirt-1", "Classic Tee", "doscientos");
        assert!(matches!(tag.to_product(), Err(ShopError::InvalidPrice(_))));
    }
}
