use serde::{Deserialize, Serialize};

/// Query parameters for the list view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    /// Price bounds, each side optional
    pub price: PriceRange,
    /// Tag text, matched as a case-insensitive substring
    pub tag: Option<String>,
}

impl SearchParams {
    /// Build parameters from raw user input.
    pub fn from_inputs(min_price: &str, max_price: &str, tag: &str) -> Self {
        Self {
            price: PriceRange::parse(min_price, max_price),
            tag: (!tag.is_empty()).then(|| tag.to_string()),
        }
    }
}

/// Inclusive price bounds. A missing side is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Non-finite bounds are dropped, leaving that side unbounded.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|value| value.is_finite()),
            max: max.filter(|value| value.is_finite()),
        }
    }

    /// Parse raw bound text. Blank, non-numeric and non-finite input leave
    /// that side unbounded.
    pub fn parse(min: &str, max: &str) -> Self {
        Self::new(parse_bound(min), parse_bound(max))
    }

    /// True when both bounds are present and no price can satisfy them.
    pub fn is_contradictory(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min.map_or(true, |min| min <= price) && self.max.map_or(true, |max| price <= max)
    }
}

fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
