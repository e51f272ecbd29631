//! Temperature formulas, pivoting through degrees Celsius.

use crate::unit::Pivot;

/// Temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TempUnit {
    /// Degrees Celsius (pivot)
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl TempUnit {
    /// This unit → °C
    pub fn to_celsius(self, t: f64) -> f64 {
        match self {
            TempUnit::Celsius    => t,
            TempUnit::Fahrenheit => (t - 32.0) * 5.0 / 9.0,
            TempUnit::Kelvin     => t - 273.15,
        }
    }

    /// °C → this unit
    pub fn from_celsius(self, c: f64) -> f64 {
        match self {
            TempUnit::Celsius    => c,
            TempUnit::Fahrenheit => c * 9.0 / 5.0 + 32.0,
            TempUnit::Kelvin     => c + 273.15,
        }
    }

    /// Pivot formulas usable in a static [`Unit`](crate::Unit) table.
    pub const fn pivot(self) -> Pivot {
        match self {
            TempUnit::Celsius => Pivot { to_pivot: c_to_c, from_pivot: c_to_c },
            TempUnit::Fahrenheit => Pivot { to_pivot: f_to_c, from_pivot: c_to_f },
            TempUnit::Kelvin => Pivot { to_pivot: k_to_c, from_pivot: c_to_k },
        }
    }
}

fn c_to_c(t: f64) -> f64 { TempUnit::Celsius.to_celsius(t) }
fn f_to_c(t: f64) -> f64 { TempUnit::Fahrenheit.to_celsius(t) }
fn k_to_c(t: f64) -> f64 { TempUnit::Kelvin.to_celsius(t) }
fn c_to_f(c: f64) -> f64 { TempUnit::Fahrenheit.from_celsius(c) }
fn c_to_k(c: f64) -> f64 { TempUnit::Kelvin.from_celsius(c) }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boiling_point_of_water() {
        assert_eq!(TempUnit::Fahrenheit.from_celsius(100.0), 212.0);
        assert_eq!(TempUnit::Kelvin.from_celsius(100.0), 373.15);
    }

    #[test]
    fn fahrenheit_and_celsius_meet_at_minus_forty() {
        assert_eq!(TempUnit::Fahrenheit.to_celsius(-40.0), -40.0);
        assert_eq!(TempUnit::Fahrenheit.from_celsius(-40.0), -40.0);
    }

    #[test]
    fn pivot_matches_methods() {
        for unit in [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin] {
            let p = unit.pivot();
            assert_eq!((p.to_pivot)(50.0), unit.to_celsius(50.0));
            assert_eq!((p.from_pivot)(50.0), unit.from_celsius(50.0));
        }
    }
}
