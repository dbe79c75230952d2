//! Product records and facet value parsing.

use serde::{Deserialize, Serialize};

/// Position of a product in the catalog's backing vector.
///
/// Posting lists and result sets carry these handles instead of owned
/// copies; they are resolved against the [`Catalog`](crate::Catalog) at
/// read time.
pub type ProductId = usize;

/// A single catalog entry, immutable after load.
///
/// Every field keeps the raw string the ingestion source provided. Numeric
/// facets are parsed lazily through the accessor methods and default to
/// zero when absent or unparsable. Serialized field names match the wire
/// names the serving layer exposes (`imageUrl`, `reviewCount`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: String,
    pub price: String,
    pub image_url: String,
    pub product_url: String,
    pub brand: String,
    pub review_count: String,
    pub rating: String,
    pub stock_status: String,
    pub description: String,

    // Optional facets; present only in the wider ingestion schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_life: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waterproof_rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toothbrush_type: Option<String>,
}

impl Product {
    /// Numeric price for sorting.
    ///
    /// Every character that is not an ASCII digit or a dot is stripped
    /// before parsing, so "$19.99", "19,99 USD" and "19.99" all compare.
    /// Unparsable prices sort as 0.0.
    pub fn price_value(&self) -> f64 {
        let digits: String = self
            .price
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        digits.parse().unwrap_or(0.0)
    }

    /// Battery life as a whole number; 0 when absent or unparsable.
    pub fn battery_value(&self) -> i64 {
        self.battery_life
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Waterproof rating mapped onto a comparable ordinal.
    ///
    /// "IPX8" outranks "IPX7", which outranks any other "IP" marking;
    /// everything else is 0. Matching is case-insensitive.
    pub fn waterproof_rank(&self) -> u8 {
        let Some(raw) = self.waterproof_rating.as_deref() else {
            return 0;
        };
        let lowered = raw.to_lowercase();
        if lowered.contains("ipx8") {
            3
        } else if lowered.contains("ipx7") {
            2
        } else if lowered.contains("ip") {
            1
        } else {
            0
        }
    }
}
