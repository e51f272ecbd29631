//! Static unit catalog and conversion formulas.
//!
//! Every [`Category`] groups units that can be converted into each other.
//! Two conversion strategies exist:
//!
//! | Kind            | Scale per unit                 | Formula                              |
//! |-----------------|--------------------------------|--------------------------------------|
//! | `Linear`        | factor relative to base unit   | `value * factor(from) / factor(to)`  |
//! | `AffinePivot`   | `to_pivot` / `from_pivot` fns  | `from_pivot(to_pivot(value))`        |
//!
//! Temperature is the only affine category; its pivot is Celsius.
//!
//! ```
//! use converter::{CATEGORIES, convert};
//!
//! let length = CATEGORIES.iter().find(|c| c.id == "length").unwrap();
//! let km = length.unit("km").unwrap();
//! let m = length.unit("m").unwrap();
//! assert_eq!(convert(1.0, km, m), Some(1000.0));
//! ```

mod temperature;
mod unit;
mod units;

pub use temperature::TempUnit;
pub use unit::{Category, ConversionKind, Pivot, Scale, Unit};
pub use units::CATEGORIES;

/// Convert `value` from one unit to another.
///
/// Returns `None` when the two units use different conversion kinds
/// (a linear unit can never be converted into an affine one).
pub fn convert(value: f64, from: &Unit, to: &Unit) -> Option<f64> {
    match (from.scale, to.scale) {
        (Scale::Linear(f), Scale::Linear(t)) => Some((value * f) / t),
        (Scale::AffinePivot(f), Scale::AffinePivot(t)) => {
            Some((t.from_pivot)((f.to_pivot)(value)))
        }
        _ => None,
    }
}
