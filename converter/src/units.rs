//! Built-in categories, in the order they are presented.

use crate::temperature::TempUnit;
use crate::unit::{Category, ConversionKind, Unit};

pub static CATEGORIES: &[Category] = &[
    // ── Length (base: metre) ────────────────────────────────────────
    Category {
        id: "length",
        name: "Lunghezza",
        kind: ConversionKind::Linear,
        units: &[
            Unit::linear("km", "Chilometri", 1000.0),
            Unit::linear("m",  "Metri",      1.0),
            Unit::linear("cm", "Centimetri", 0.01),
            Unit::linear("mm", "Millimetri", 0.001),
            Unit::linear("mi", "Miglia",     1609.344),
            Unit::linear("yd", "Iarde",      0.9144),
            Unit::linear("ft", "Piedi",      0.3048),
            Unit::linear("in", "Pollici",    0.0254),
        ],
    },
    // ── Weight (base: kilogram) ─────────────────────────────────────
    Category {
        id: "weight",
        name: "Peso",
        kind: ConversionKind::Linear,
        units: &[
            Unit::linear("t",  "Tonnellate",  1000.0),
            Unit::linear("kg", "Chilogrammi", 1.0),
            Unit::linear("g",  "Grammi",      0.001),
            Unit::linear("mg", "Milligrammi", 0.000_001),
            Unit::linear("lb", "Libbre",      0.453_592_37),
            Unit::linear("oz", "Once",        0.028_349_523_125),
        ],
    },
    // ── Temperature (pivot: °C) ─────────────────────────────────────
    Category {
        id: "temperature",
        name: "Temperatura",
        kind: ConversionKind::AffinePivot,
        units: &[
            Unit::affine("c", "Celsius",    TempUnit::Celsius.pivot()),
            Unit::affine("f", "Fahrenheit", TempUnit::Fahrenheit.pivot()),
            Unit::affine("k", "Kelvin",     TempUnit::Kelvin.pivot()),
        ],
    },
    // ── Volume (base: litre) ────────────────────────────────────────
    Category {
        id: "volume",
        name: "Volume",
        kind: ConversionKind::Linear,
        units: &[
            Unit::linear("l",   "Litri",        1.0),
            Unit::linear("ml",  "Millilitri",   0.001),
            Unit::linear("m3",  "Metri cubi",   1000.0),
            Unit::linear("gal", "Galloni (US)", 3.785_41),
            Unit::linear("qt",  "Quarti (US)",  0.946_353),
            Unit::linear("pt",  "Pinte (US)",   0.473_176),
            Unit::linear("cup", "Tazze (US)",   0.236_588),
        ],
    },
    // ── Time (base: second) ─────────────────────────────────────────
    Category {
        id: "time",
        name: "Tempo",
        kind: ConversionKind::Linear,
        units: &[
            Unit::linear("s",   "Secondi",    1.0),
            Unit::linear("min", "Minuti",     60.0),
            Unit::linear("h",   "Ore",        3_600.0),
            Unit::linear("d",   "Giorni",     86_400.0),
            Unit::linear("w",   "Settimane",  604_800.0),
            Unit::linear("mo",  "Mesi (30g)", 2_592_000.0),
            Unit::linear("y",   "Anni",       31_536_000.0),
        ],
    },
    // ── Digital storage (base: byte, binary multiples) ──────────────
    Category {
        id: "digital",
        name: "Dati",
        kind: ConversionKind::Linear,
        units: &[
            Unit::linear("b",  "Bytes",     1.0),
            Unit::linear("kb", "Kilobytes", 1_024.0),
            Unit::linear("mb", "Megabytes", 1_048_576.0),
            Unit::linear("gb", "Gigabytes", 1_073_741_824.0),
            Unit::linear("tb", "Terabytes", 1_099_511_627_776.0),
        ],
    },
];
