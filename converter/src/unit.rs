// ────────────────────────────────────────────────────────────────────
//  Conversion kinds
// ────────────────────────────────────────────────────────────────────

/// How values move between the units of one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    /// Scale-factor based (length, weight, …)
    Linear,
    /// Routed through a pivot unit with per-unit formulas (temperature)
    AffinePivot,
}

/// Formulas moving a value into and out of the pivot unit.
#[derive(Debug, Clone, Copy)]
pub struct Pivot {
    pub to_pivot: fn(f64) -> f64,
    pub from_pivot: fn(f64) -> f64,
}

/// Conversion data carried by a single unit.
#[derive(Debug, Clone, Copy)]
pub enum Scale {
    /// How many base units one of this unit equals.
    Linear(f64),
    AffinePivot(Pivot),
}

impl Scale {
    pub fn kind(&self) -> ConversionKind {
        match self {
            Scale::Linear(_) => ConversionKind::Linear,
            Scale::AffinePivot(_) => ConversionKind::AffinePivot,
        }
    }

    /// Scale factor for linear units, `None` for affine ones.
    pub fn factor(&self) -> Option<f64> {
        match self {
            Scale::Linear(f) => Some(*f),
            Scale::AffinePivot(_) => None,
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Unit / Category
// ────────────────────────────────────────────────────────────────────

/// A unit inside a category, e.g. `km` ("Chilometri").
#[derive(Debug, Clone, Copy)]
pub struct Unit {
    pub id: &'static str,
    pub name: &'static str,
    pub scale: Scale,
}

impl Unit {
    pub const fn linear(id: &'static str, name: &'static str, factor: f64) -> Self {
        Self { id, name, scale: Scale::Linear(factor) }
    }

    pub const fn affine(id: &'static str, name: &'static str, pivot: Pivot) -> Self {
        Self { id, name, scale: Scale::AffinePivot(pivot) }
    }

    pub fn factor(&self) -> Option<f64> {
        self.scale.factor()
    }
}

/// A measurement domain: an ordered list of mutually convertible units.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ConversionKind,
    pub units: &'static [Unit],
}

impl Category {
    /// Look up one of this category's units by identifier.
    pub fn unit(&self, id: &str) -> Option<&'static Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    /// The unit with factor 1 (linear categories only).
    pub fn base_unit(&self) -> Option<&'static Unit> {
        self.units.iter().find(|u| u.factor() == Some(1.0))
    }

    /// First and second listed units, the defaults after selecting this
    /// category.
    pub fn default_pair(&self) -> Option<(&'static Unit, &'static Unit)> {
        match self.units {
            [first, second, ..] => Some((first, second)),
            _ => None,
        }
    }
}
