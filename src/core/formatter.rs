const MAX_PRECISION: u32 = 8;

/// Fixed-point formatter for axis labels and crosshair readouts.
///
/// The display base is the inverse of the primary source's minimal price
/// move (`round(1 / min_move)`); it decides both the label precision and the
/// step granularity the tick-span calculators round to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceFormatter {
    base: f64,
    precision: u32,
    percent_suffix: bool,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::with_base(100.0)
    }
}

impl PriceFormatter {
    #[must_use]
    pub fn with_base(base: f64) -> Self {
        let base = if base.is_finite() && base >= 1.0 {
            base.round()
        } else {
            100.0
        };
        Self {
            base,
            precision: decimal_digits(base),
            percent_suffix: false,
        }
    }

    #[must_use]
    pub fn from_min_move(min_move: f64) -> Self {
        if min_move.is_finite() && min_move > 0.0 {
            Self::with_base((1.0 / min_move).round())
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn percentage() -> Self {
        Self {
            base: 100.0,
            precision: 2,
            percent_suffix: true,
        }
    }

    #[must_use]
    pub fn indexed_to_100() -> Self {
        Self {
            base: 100.0,
            precision: 2,
            percent_suffix: false,
        }
    }

    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return "∅".to_owned();
        }
        let precision = self.precision as usize;
        if self.percent_suffix {
            format!("{value:.precision$}%")
        } else {
            format!("{value:.precision$}")
        }
    }
}

fn decimal_digits(base: f64) -> u32 {
    if base <= 1.0 {
        return 0;
    }
    (base.log10().ceil() as u32).min(MAX_PRECISION)
}
