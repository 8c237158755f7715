use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which backend produced a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    /// Contract-specific negotiated rates.
    Negotiated,
    /// Public retail list prices.
    Retail,
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negotiated => f.write_str("negotiated"),
            Self::Retail => f.write_str("retail"),
        }
    }
}

/// Hourly price of one SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub hourly: f64,
    pub currency: String,
    pub source: PriceSource,
}

/// Prices for one region, keyed by SKU name (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionPrices {
    prices: HashMap<String, Price>,
}

impl RegionPrices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sku: &str, price: Price) {
        self.prices.insert(sku.to_ascii_lowercase(), price);
    }

    pub fn get(&self, sku: &str) -> Option<&Price> {
        self.prices.get(&sku.to_ascii_lowercase())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<(String, Price)> for RegionPrices {
    fn from_iter<I: IntoIterator<Item = (String, Price)>>(iter: I) -> Self {
        let mut prices = Self::new();
        for (sku, price) in iter {
            prices.insert(&sku, price);
        }
        prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        let mut prices = RegionPrices::new();
        prices.insert(
            "Standard_D4s_v5",
            Price {
                hourly: 0.192,
                currency: "USD".into(),
                source: PriceSource::Retail,
            },
        );
        assert!(prices.get("standard_d4s_v5").is_some());
        assert!(prices.get("STANDARD_D4S_V5").is_some());
        assert!(prices.get("Standard_D8s_v5").is_none());
    }
}
