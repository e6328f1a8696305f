use serde::{Deserialize, Serialize};

use super::range::PriceRange;

/// Mapping mode used by the price scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PriceScaleMode {
    /// Uniform spacing in raw price units.
    #[default]
    Normal,
    /// Uniform spacing in log-domain price units.
    Logarithmic,
    /// Uniform spacing in percentage delta from the first visible value.
    Percentage,
    /// Uniform spacing in indexed-to-100 units from the first visible value.
    IndexedTo100,
}

/// Parameters of the log-domain mapping.
///
/// Re-derived from the raw (de-logged) range whenever a small-magnitude span
/// would otherwise lose precision in log space; compared field-wise before
/// swapping so an equivalent formula never invalidates the cached range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogFormula {
    pub(crate) logical_offset: f64,
    pub(crate) coord_offset: f64,
}

impl Default for LogFormula {
    fn default() -> Self {
        Self {
            logical_offset: 4.0,
            coord_offset: 0.0001,
        }
    }
}

/// Per-mode conversion strategy resolved at the call site.
///
/// The price scale builds one of these per transform instead of carrying
/// per-mode function objects. For `PriceScaleMode::Logarithmic` the price to
/// logical step is the identity (`Normal`): the log mapping is applied
/// against the stored log-domain range inside the logical/coordinate step,
/// while range conversions during auto-scale use the `Log` variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModeTransform {
    Normal,
    Log(LogFormula),
    Percentage { base: f64 },
    IndexedTo100 { base: f64 },
}

impl ModeTransform {
    /// Maps a raw price into the mode's logical domain.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Normal => value,
            Self::Log(formula) => to_log(value, formula),
            Self::Percentage { base } => to_percent(value, base),
            Self::IndexedTo100 { base } => to_indexed_to_100(value, base),
        }
    }

    /// Maps a logical value back into the raw price domain.
    #[must_use]
    pub fn invert(self, value: f64) -> f64 {
        match self {
            Self::Normal => value,
            Self::Log(formula) => from_log(value, formula),
            Self::Percentage { base } => from_percent(value, base),
            Self::IndexedTo100 { base } => from_indexed_to_100(value, base),
        }
    }

    #[must_use]
    pub fn apply_range(self, range: PriceRange) -> PriceRange {
        PriceRange::new(self.apply(range.min()), self.apply(range.max()))
    }

    #[must_use]
    pub fn invert_range(self, range: PriceRange) -> PriceRange {
        PriceRange::new(self.invert(range.min()), self.invert(range.max()))
    }
}

pub(crate) fn to_percent(value: f64, base_value: f64) -> f64 {
    let result = 100.0 * (value - base_value) / base_value;
    if base_value < 0.0 { -result } else { result }
}

pub(crate) fn from_percent(value: f64, base_value: f64) -> f64 {
    let value = if base_value < 0.0 { -value } else { value };
    (value / 100.0) * base_value + base_value
}

pub(crate) fn to_indexed_to_100(value: f64, base_value: f64) -> f64 {
    to_percent(value, base_value) + 100.0
}

pub(crate) fn from_indexed_to_100(value: f64, base_value: f64) -> f64 {
    from_percent(value - 100.0, base_value)
}

pub(crate) fn to_log(price: f64, formula: LogFormula) -> f64 {
    let magnitude = price.abs();
    if magnitude < 1e-15 {
        return 0.0;
    }
    let value = (magnitude + formula.coord_offset).log10() + formula.logical_offset;
    if price < 0.0 { -value } else { value }
}

pub(crate) fn from_log(logical: f64, formula: LogFormula) -> f64 {
    let magnitude = logical.abs();
    if magnitude < 1e-15 {
        return 0.0;
    }
    let value = 10f64.powf(magnitude - formula.logical_offset) - formula.coord_offset;
    if logical < 0.0 { -value } else { value }
}

pub(crate) fn convert_range_to_log(range: PriceRange, formula: LogFormula) -> PriceRange {
    PriceRange::new(to_log(range.min(), formula), to_log(range.max(), formula))
}

pub(crate) fn convert_range_from_log(range: PriceRange, formula: LogFormula) -> PriceRange {
    PriceRange::new(from_log(range.min(), formula), from_log(range.max(), formula))
}

pub(crate) fn range_survives_log_round_trip(range: PriceRange, formula: LogFormula) -> bool {
    let converted = convert_range_to_log(range, formula);
    converted.min().is_finite() && converted.max().is_finite() && !converted.is_empty()
}

pub(crate) fn can_convert_range_from_log(range: PriceRange, formula: LogFormula) -> bool {
    let converted = convert_range_from_log(range, formula);
    converted.min().is_finite() && converted.max().is_finite() && !converted.is_empty()
}

/// Derives the log formula from a raw (de-logged) range.
///
/// Sub-unit spans shift the logical offset so the mapping keeps enough
/// digits; everything else uses the default formula.
pub(crate) fn log_formula_for_range(range: Option<PriceRange>) -> LogFormula {
    let default = LogFormula::default();
    let Some(range) = range else {
        return default;
    };
    let diff = (range.max() - range.min()).abs();
    if !(1e-15..1.0).contains(&diff) {
        return default;
    }
    let digits = diff.log10().abs().ceil();
    let logical_offset = default.logical_offset + digits;
    let coord_offset = 1.0 / 10f64.powf(logical_offset);
    LogFormula {
        logical_offset,
        coord_offset,
    }
}

pub(crate) fn log_formulas_match(left: LogFormula, right: LogFormula) -> bool {
    (left.logical_offset - right.logical_offset).abs() <= f64::EPSILON
        && (left.coord_offset - right.coord_offset).abs() <= f64::EPSILON
}
