//! Domain identifier types with validation
//!
//! Newtype wrappers for platform identifiers. Each type keeps product,
//! price list and party identifiers from being mixed up at call sites.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Product identifier newtype wrapper
///
/// Platform product ids look like `PRD-620-226-877`. Only the prefix is
/// checked; the numeric groups are owned by the platform.
///
/// # Examples
///
/// ```
/// use margin_report::domain::ids::ProductId;
///
/// let product = ProductId::new("PRD-620-226-877").unwrap();
/// assert_eq!(product.item_global_id("0001"), "PRD-620-226-877-0001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new ProductId from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(ProductId)` if the ID is valid, `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Product ID cannot be empty".to_string());
        }
        if !trimmed.starts_with("PRD-") || trimmed.len() == 4 {
            return Err(format!(
                "Invalid product ID '{trimmed}'. Expected format: PRD-XXX-XXX-XXX"
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the product ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Global id of one of this product's items
    ///
    /// Item ids are the product id followed by a dash and the SKU suffix.
    pub fn item_global_id(&self, sku_suffix: &str) -> String {
        format!("{}-{}", self.0, sku_suffix)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

/// Price list version identifier newtype wrapper
///
/// Format: `PLV-XXX-XXX-XXX-XXXX`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PriceListVersionId(String);

impl PriceListVersionId {
    /// Creates a new PriceListVersionId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err("Price list version ID cannot be empty".to_string());
        }
        if !trimmed.starts_with("PLV-") || trimmed.len() == 4 {
            return Err(format!(
                "Invalid price list version ID '{trimmed}'. Expected format: PLV-XXX-XXX-XXX-XXXX"
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the price list version ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PriceListVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PriceListVersionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PriceListVersionId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceListVersionId> for String {
    fn from(id: PriceListVersionId) -> Self {
        id.0
    }
}

/// Identifiers read back from remote records.
///
/// These carry whatever the platform returned, so they are not validated
/// beyond being strings.
macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Returns the ID as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes self and returns the inner String
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Subscription (asset) identifier, e.g. `AS-1234-5678-9012`
    SubscriptionId
);

record_id!(
    /// Customer tier account identifier, e.g. `TA-1234-5678-9012`
    CustomerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_valid() {
        let id = ProductId::new("PRD-620-226-877").unwrap();
        assert_eq!(id.as_str(), "PRD-620-226-877");
        assert_eq!(id.to_string(), "PRD-620-226-877");
    }

    #[test]
    fn test_product_id_trims_whitespace() {
        let id = ProductId::new("  PRD-1  ").unwrap();
        assert_eq!(id.as_str(), "PRD-1");
    }

    #[test]
    fn test_product_id_invalid() {
        assert!(ProductId::new("").is_err());
        assert!(ProductId::new("   ").is_err());
        assert!(ProductId::new("PRD-").is_err());
        assert!(ProductId::new("PLV-620-226-877").is_err());
    }

    #[test]
    fn test_item_global_id() {
        let id = ProductId::from_str("PRD-620-226-877").unwrap();
        assert_eq!(id.item_global_id("0001"), "PRD-620-226-877-0001");
    }

    #[test]
    fn test_price_list_version_id() {
        let id = PriceListVersionId::new("PLV-762-354-876-0001").unwrap();
        assert_eq!(id.as_str(), "PLV-762-354-876-0001");
        assert!(PriceListVersionId::new("PRD-620-226-877").is_err());
        assert!(PriceListVersionId::new("").is_err());
    }

    #[test]
    fn test_product_id_serde_validates() {
        let id: ProductId = serde_json::from_str("\"PRD-620-226-877\"").unwrap();
        assert_eq!(id.as_str(), "PRD-620-226-877");

        let bad = serde_json::from_str::<ProductId>("\"nope\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_record_ids() {
        let sub = SubscriptionId::from("AS-1");
        let cus = CustomerId::from("TA-1".to_string());
        assert_eq!(sub.as_str(), "AS-1");
        assert_eq!(cus.into_inner(), "TA-1");
    }
}
