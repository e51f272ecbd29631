use std::collections::HashSet;

use converter::{CATEGORIES, Category, ConversionKind, Scale, Unit};
use tracing::info;

use crate::error::{ConvertError, Result};

/// Validated, read‑only view over a static category table.
///
/// Invariants are checked once in [`Catalog::new`]; lookups afterwards
/// only have to deal with unknown identifiers.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    categories: &'static [Category],
}

impl Catalog {
    /// The built‑in catalog: length, weight, temperature, volume, time,
    /// digital storage.
    pub fn standard() -> Result<Self> {
        Self::new(CATEGORIES)
    }

    /// Validate `categories` and wrap them.
    pub fn new(categories: &'static [Category]) -> Result<Self> {
        if categories.is_empty() {
            return Err(ConvertError::InvalidCatalog("no categories defined".to_string()));
        }

        let mut seen = HashSet::new();
        for category in categories {
            if !seen.insert(category.id) {
                return Err(ConvertError::InvalidCatalog(format!(
                    "duplicate category '{}'",
                    category.id
                )));
            }
            validate_category(category)?;
        }

        info!(categories = categories.len(), "unit catalog loaded");
        Ok(Self { categories })
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All categories, in presentation order.
    pub fn list_categories(&self) -> &'static [Category] {
        self.categories
    }

    pub fn category(&self, category_id: &str) -> Result<&'static Category> {
        self.categories
            .iter()
            .find(|c| c.id == category_id)
            .ok_or_else(|| ConvertError::UnknownCategory(category_id.to_string()))
    }

    /// Ordered units of a category.
    pub fn units_of(&self, category_id: &str) -> Result<&'static [Unit]> {
        Ok(self.category(category_id)?.units)
    }

    pub fn unit_info(&self, category_id: &str, unit_id: &str) -> Result<&'static Unit> {
        self.category(category_id)?
            .unit(unit_id)
            .ok_or_else(|| ConvertError::UnknownUnit {
                category: category_id.to_string(),
                unit: unit_id.to_string(),
            })
    }

    /// First listed category, selected when a session starts.
    pub fn first(&self) -> &'static Category {
        // `new` rejects empty tables.
        &self.categories[0]
    }
}

fn validate_category(category: &Category) -> Result<()> {
    let invalid = |msg: String| -> Result<()> {
        Err(ConvertError::InvalidCatalog(format!("{}: {msg}", category.id)))
    };

    if category.units.len() < 2 {
        return invalid("needs at least two units".to_string());
    }

    let mut ids = HashSet::new();
    for unit in category.units {
        if !ids.insert(unit.id) {
            return invalid(format!("duplicate unit '{}'", unit.id));
        }
        if unit.scale.kind() != category.kind {
            return invalid(format!(
                "unit '{}' is {:?} but the category is {:?}",
                unit.id,
                unit.scale.kind(),
                category.kind
            ));
        }
        if let Scale::Linear(factor) = unit.scale {
            if !factor.is_finite() || factor <= 0.0 {
                return invalid(format!("unit '{}' has factor {factor}", unit.id));
            }
        }
    }

    if category.kind == ConversionKind::Linear {
        let bases = category.units.iter().filter(|u| u.factor() == Some(1.0)).count();
        if bases != 1 {
            return invalid(format!("expected exactly one base unit, found {bases}"));
        }
    }

    Ok(())
}
