use serde::{Deserialize, Serialize};

/// Lower bound of the canonical default price range
pub const DEFAULT_MIN_PRICE: f64 = 0.0;

/// Upper bound of the canonical default price range
pub const DEFAULT_MAX_PRICE: f64 = 10_000.0;

/// Inclusive price interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range that admits every valid price
    pub fn unbounded() -> Self {
        Self::new(DEFAULT_MIN_PRICE, f64::MAX)
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }

    /// True when the range is tighter than the canonical `[0, 10000]` default
    pub fn is_narrowed(&self) -> bool {
        self.min > DEFAULT_MIN_PRICE || self.max < DEFAULT_MAX_PRICE
    }

    pub fn is_unbounded_above(&self) -> bool {
        self.max >= f64::MAX
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRICE, DEFAULT_MAX_PRICE)
    }
}

/// Outcome of normalizing user-supplied price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRangeValidation {
    pub min: f64,
    pub max: f64,
    /// At least one bound was explicitly supplied
    pub valid: bool,
}

impl PriceRangeValidation {
    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.min, self.max)
    }
}
