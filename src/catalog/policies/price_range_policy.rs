use crate::catalog::domain::{PriceRangeValidation, DEFAULT_MIN_PRICE};

/// PriceRangePolicy normalizes user-supplied price bounds
///
/// Rules:
/// 1. A missing minimum becomes 0, a missing maximum becomes `f64::MAX`
/// 2. Negative bounds are clamped to 0
/// 3. Inverted bounds are swapped, but only when a maximum was supplied
/// 4. The result is `valid` when at least one bound was supplied
///
/// Invalid input is normalized rather than rejected.
pub struct PriceRangePolicy;

impl PriceRangePolicy {
    pub fn validate_price_range(min: Option<f64>, max: Option<f64>) -> PriceRangeValidation {
        let min = min.filter(|v| !v.is_nan());
        let max = max.filter(|v| !v.is_nan());

        let mut valid_min = min.unwrap_or(DEFAULT_MIN_PRICE).max(0.0);
        let mut valid_max = max.unwrap_or(f64::MAX).max(0.0);

        if valid_min > valid_max && max.is_some() {
            std::mem::swap(&mut valid_min, &mut valid_max);
        }

        PriceRangeValidation {
            min: valid_min,
            max: valid_max,
            valid: min.is_some() || max.is_some(),
        }
    }
}
