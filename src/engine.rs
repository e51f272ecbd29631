use std::fmt;

use chrono::{DateTime, Local};
use converter::{Category, Unit};
use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::Catalog;
use crate::config::{Config, InputMode};
use crate::error::{ConvertError, Result};
use crate::history::HistoryEntry;

/// Digits after the decimal point in every formatted result.
pub const DECIMALS: usize = 6;

// ── Request / result ────────────────────────────────────────────────

/// One conversion to perform. Unit identifiers must belong to the
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionRequest<'a> {
    pub category: &'a str,
    pub from: &'a str,
    pub to: &'a str,
    /// Raw input as typed, e.g. `"1.5"`
    pub input: &'a str,
}

impl<'a> ConversionRequest<'a> {
    pub fn new(category: &'a str, from: &'a str, to: &'a str, input: &'a str) -> Self {
        Self { category, from, to, input }
    }
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub value: f64,
    /// `value` with exactly [`DECIMALS`] digits after the point
    pub formatted: String,
    /// Parsed input, before conversion
    pub input: f64,
    pub category_id: &'static str,
    pub category_name: &'static str,
    pub from_id: &'static str,
    pub from_name: &'static str,
    pub to_id: &'static str,
    pub to_name: &'static str,
}

impl ConversionResult {
    /// `"<input> <source unit name>"`
    pub fn source_description(&self) -> String {
        format!("{} {}", format_input(self.input), self.from_name)
    }

    /// `"<formatted result> <destination unit name>"`
    pub fn target_description(&self) -> String {
        format!("{} {}", self.formatted, self.to_name)
    }

    /// History record stamped with the current local time.
    pub fn history_entry(&self) -> HistoryEntry {
        self.history_entry_at(Local::now())
    }

    pub fn history_entry_at(&self, created_at: DateTime<Local>) -> HistoryEntry {
        HistoryEntry {
            from: self.source_description(),
            to: self.target_description(),
            category: self.category_name.to_string(),
            created_at,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.source_description(), self.target_description())
    }
}

// ── Formatting / parsing ────────────────────────────────────────────

/// Fixed‑point rendering with [`DECIMALS`] digits, never scientific.
///
/// ```
/// assert_eq!(unitconv::format_value(1000.0), "1000.000000");
/// assert_eq!(unitconv::format_value(-0.0), "0.000000");
/// ```
pub fn format_value(value: f64) -> String {
    // -0.0 == 0.0, so this also drops the sign of negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", DECIMALS, value)
}

/// Shortest rendering of the parsed input (`1` rather than `1.0`).
fn format_input(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

/// Parse raw input into a finite number.
///
/// Leading and trailing whitespace is ignored. Empty input, text that
/// is not a number, and `inf`/`NaN` are rejected.
pub fn parse_input(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::InvalidInput("empty input".to_string()));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConvertError::InvalidInput(format!("'{trimmed}' is not a finite number"))),
    }
}

// ── Engine ──────────────────────────────────────────────────────────

/// Stateless conversion engine over a validated [`Catalog`].
///
/// ```
/// use unitconv::Engine;
///
/// let engine = Engine::new()?;
/// let r = engine.convert("length", "km", "m", "1")?.unwrap();
/// assert_eq!(r.formatted, "1000.000000");
/// # Ok::<(), unitconv::ConvertError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Engine {
    catalog: Catalog,
    mode: InputMode,
}

impl Engine {
    /// Built‑in catalog, lenient input.
    pub fn new() -> Result<Self> {
        Self::with_mode(InputMode::Lenient)
    }

    pub fn with_mode(mode: InputMode) -> Result<Self> {
        Ok(Self::with_catalog(Catalog::standard()?, mode))
    }

    pub fn with_catalog(catalog: Catalog, mode: InputMode) -> Self {
        Self { catalog, mode }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::with_mode(config.input_mode)
    }

    pub fn catalog(&self) -> &Catalog { &self.catalog }
    pub fn mode(&self) -> InputMode { self.mode }

    // ── Catalog queries ─────────────────────────────────────────────

    pub fn list_categories(&self) -> &'static [Category] {
        self.catalog.list_categories()
    }

    pub fn units_of(&self, category_id: &str) -> Result<&'static [Unit]> {
        self.catalog.units_of(category_id)
    }

    pub fn unit_info(&self, category_id: &str, unit_id: &str) -> Result<&'static Unit> {
        self.catalog.unit_info(category_id, unit_id)
    }

    // ── Conversion ──────────────────────────────────────────────────

    /// Convert raw input according to the engine's [`InputMode`].
    ///
    /// Unknown categories and unknown (non‑empty) unit identifiers are
    /// always errors. In lenient mode an empty unit identifier, or input
    /// that is empty or not a finite number, gives `Ok(None)`.
    pub fn convert(
        &self,
        category_id: &str,
        from: &str,
        to: &str,
        raw_input: &str,
    ) -> Result<Option<ConversionResult>> {
        self.run(&ConversionRequest::new(category_id, from, to, raw_input))
    }

    pub fn run(&self, req: &ConversionRequest<'_>) -> Result<Option<ConversionResult>> {
        match self.mode {
            InputMode::Strict => self.run_strict(req).map(Some),
            InputMode::Lenient => self.run_lenient(req),
        }
    }

    /// Strict conversion regardless of the configured mode.
    pub fn try_convert(
        &self,
        category_id: &str,
        from: &str,
        to: &str,
        raw_input: &str,
    ) -> Result<ConversionResult> {
        self.run_strict(&ConversionRequest::new(category_id, from, to, raw_input))
    }

    /// Convert a value that is already numeric.
    pub fn convert_value(
        &self,
        category_id: &str,
        from: &str,
        to: &str,
        value: f64,
    ) -> Result<ConversionResult> {
        if !value.is_finite() {
            return Err(ConvertError::InvalidInput(format!("{value} is not a finite number")));
        }
        let category = self.catalog.category(category_id)?;
        let from = self.catalog.unit_info(category_id, from)?;
        let to = self.catalog.unit_info(category_id, to)?;
        compute(category, from, to, value)
    }

    fn run_strict(&self, req: &ConversionRequest<'_>) -> Result<ConversionResult> {
        let category = self.catalog.category(req.category)?;
        let from = self.catalog.unit_info(req.category, req.from)?;
        let to = self.catalog.unit_info(req.category, req.to)?;
        let value = parse_input(req.input)?;
        compute(category, from, to, value)
    }

    fn run_lenient(&self, req: &ConversionRequest<'_>) -> Result<Option<ConversionResult>> {
        let category = self.catalog.category(req.category)?;
        if req.from.is_empty() || req.to.is_empty() {
            trace!(category = req.category, "skipping conversion: unit not selected");
            return Ok(None);
        }
        let from = self.catalog.unit_info(req.category, req.from)?;
        let to = self.catalog.unit_info(req.category, req.to)?;

        let value = match parse_input(req.input) {
            Ok(v) => v,
            Err(e) => {
                trace!(input = req.input, error = %e, "skipping conversion");
                return Ok(None);
            }
        };

        match compute(category, from, to, value) {
            Ok(result) => Ok(Some(result)),
            Err(ConvertError::InvalidInput(msg)) => {
                trace!(input = req.input, error = %msg, "skipping conversion");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn compute(
    category: &'static Category,
    from: &'static Unit,
    to: &'static Unit,
    value: f64,
) -> Result<ConversionResult> {
    let converted = converter::convert(value, from, to).ok_or_else(|| {
        ConvertError::InvalidCatalog(format!(
            "{}: units '{}' and '{}' use different conversion kinds",
            category.id, from.id, to.id
        ))
    })?;
    if !converted.is_finite() {
        return Err(ConvertError::InvalidInput(format!(
            "{value} {} is out of range in {}",
            from.id, to.id
        )));
    }

    debug!(
        category = category.id,
        from = from.id,
        to = to.id,
        value,
        result = converted,
        "converted"
    );

    Ok(ConversionResult {
        value: converted,
        formatted: format_value(converted),
        input: value,
        category_id: category.id,
        category_name: category.name,
        from_id: from.id,
        from_name: from.name,
        to_id: to.id,
        to_name: to.name,
    })
}
