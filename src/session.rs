use converter::{Category, Unit};
use tracing::debug;

use crate::config::Config;
use crate::engine::{ConversionRequest, ConversionResult, Engine};
use crate::error::{ConvertError, Result};
use crate::history::History;

/// Per‑user conversion state: selected category and units, raw input,
/// current result and a bounded history.
///
/// Every change to the input or to a unit re‑runs the conversion;
/// changing the category first resets the units to the category's first
/// two units. Setting a value equal to the current one does nothing.
///
/// ```
/// use unitconv::{Engine, Session};
///
/// let mut s = Session::new(Engine::new()?)?;
/// s.select_category("temperature")?;
/// s.set_input("100")?;
/// assert_eq!(s.result_text(), Some("212.000000"));
/// # Ok::<(), unitconv::ConvertError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    category: &'static Category,
    from: &'static Unit,
    to: &'static Unit,
    input: String,
    result: Option<ConversionResult>,
    history: History,
}

impl Session {
    /// Start on the catalog's first category with default history
    /// capacity.
    pub fn new(engine: Engine) -> Result<Self> {
        Self::with_history(engine, History::new())
    }

    pub fn with_config(config: &Config) -> Result<Self> {
        let engine = Engine::from_config(config)?;
        Self::with_history(engine, History::with_capacity(config.history_cap))
    }

    pub fn with_history(engine: Engine, history: History) -> Result<Self> {
        let category = engine.catalog().first();
        let (from, to) = default_units(category)?;
        Ok(Self {
            engine,
            category,
            from,
            to,
            input: String::new(),
            result: None,
            history,
        })
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn engine(&self) -> &Engine { &self.engine }
    pub fn category(&self) -> &'static Category { self.category }
    pub fn from_unit(&self) -> &'static Unit { self.from }
    pub fn to_unit(&self) -> &'static Unit { self.to }
    pub fn input(&self) -> &str { &self.input }
    pub fn result(&self) -> Option<&ConversionResult> { self.result.as_ref() }
    pub fn history(&self) -> &History { &self.history }

    /// Formatted result, i.e. what a "copy" action puts on the clipboard.
    pub fn result_text(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.formatted.as_str())
    }

    // ── State changes ───────────────────────────────────────────────

    /// Switch category and reset source/destination to its first two
    /// units.
    pub fn select_category(&mut self, category_id: &str) -> Result<()> {
        if self.category.id == category_id {
            return Ok(());
        }
        let category = self.engine.catalog().category(category_id)?;
        let (from, to) = default_units(category)?;
        debug!(category = category.id, from = from.id, to = to.id, "category selected");
        self.category = category;
        self.from = from;
        self.to = to;
        self.reconvert()
    }

    pub fn set_input(&mut self, raw: impl Into<String>) -> Result<()> {
        let raw = raw.into();
        if raw == self.input {
            return Ok(());
        }
        self.input = raw;
        self.reconvert()
    }

    pub fn set_from_unit(&mut self, unit_id: &str) -> Result<()> {
        let unit = self.lookup(unit_id)?;
        if unit.id == self.from.id {
            return Ok(());
        }
        self.from = unit;
        self.reconvert()
    }

    pub fn set_to_unit(&mut self, unit_id: &str) -> Result<()> {
        let unit = self.lookup(unit_id)?;
        if unit.id == self.to.id {
            return Ok(());
        }
        self.to = unit;
        self.reconvert()
    }

    /// Exchange source and destination units.
    pub fn swap_units(&mut self) -> Result<()> {
        if self.from.id == self.to.id {
            return Ok(());
        }
        std::mem::swap(&mut self.from, &mut self.to);
        self.reconvert()
    }

    /// Clear input and result. History is kept.
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn lookup(&self, unit_id: &str) -> Result<&'static Unit> {
        self.engine.catalog().unit_info(self.category.id, unit_id)
    }

    /// Re‑run the conversion for the current state. A successful result
    /// is recorded in the history; no result clears the previous one.
    /// Blank input is never an error, even in strict mode, so selecting a
    /// category or unit before typing a value always succeeds.
    fn reconvert(&mut self) -> Result<()> {
        // Nothing typed yet: no result in either input mode.
        if self.input.trim().is_empty() {
            self.result = None;
            return Ok(());
        }
        let req = ConversionRequest::new(self.category.id, self.from.id, self.to.id, &self.input);
        let outcome = self.engine.run(&req);
        match outcome {
            Ok(Some(result)) => {
                self.history.push(result.history_entry());
                self.result = Some(result);
                Ok(())
            }
            Ok(None) => {
                self.result = None;
                Ok(())
            }
            Err(e) => {
                self.result = None;
                Err(e)
            }
        }
    }
}

fn default_units(category: &'static Category) -> Result<(&'static Unit, &'static Unit)> {
    category.default_pair().ok_or_else(|| {
        ConvertError::InvalidCatalog(format!("{}: needs at least two units", category.id))
    })
}
