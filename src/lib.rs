//! # unitconv
//!
//! Convert values between units of one measurement category and keep
//! a short rolling history of past conversions.
//!
//! ## Highlights
//!
//! * **Six categories** — length, weight, temperature, volume, time,
//!   digital storage
//! * **Linear and affine conversions** — scale factors, or Celsius‑pivot
//!   formulas for temperature
//! * **Fixed formatting** — every result has exactly 6 decimals
//! * **Lenient or strict input** — skip half‑typed input quietly, or
//!   reject it with [`ConvertError::InvalidInput`]
//! * **Sessions** — category/unit selection with a bounded history
//!
//! ## Quick example
//!
//! ```
//! use unitconv::Engine;
//!
//! let engine = Engine::new()?;
//!
//! let r = engine.convert("temperature", "c", "f", "100")?.unwrap();
//! assert_eq!(r.formatted, "212.000000");
//!
//! let r = engine.convert("digital", "mb", "kb", "1")?.unwrap();
//! assert_eq!(r.to_string(), "1 Megabytes = 1024.000000 Kilobytes");
//!
//! // Empty input is not an error in the default (lenient) mode
//! assert!(engine.convert("length", "km", "m", "")?.is_none());
//! # Ok::<(), unitconv::ConvertError>(())
//! ```
//!
//! ## Sessions
//!
//! ```
//! use unitconv::{Config, Session};
//!
//! let mut session = Session::with_config(&Config::new().history_cap(3))?;
//! session.set_input("2")?;                   // length: km → m
//! session.select_category("time")?;          // units reset to s → min
//! assert_eq!(session.from_unit().id, "s");
//! assert_eq!(session.result_text(), Some("0.033333"));
//! assert_eq!(session.history().len(), 2);
//! # Ok::<(), unitconv::ConvertError>(())
//! ```

// ── Internal modules ─────────────────────────────────────────────────
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod session;

// ── Public re-exports ────────────────────────────────────────────────
pub use catalog::Catalog;
pub use config::{Config, InputMode};
pub use engine::{
    ConversionRequest, ConversionResult, DECIMALS, Engine, format_value, parse_input,
};
pub use error::{ConvertError, Result};
pub use history::{DEFAULT_HISTORY_CAP, History, HistoryEntry};
pub use session::Session;

pub use converter::{Category, ConversionKind, Pivot, Scale, TempUnit, Unit};
