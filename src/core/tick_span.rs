const TICK_SPAN_EPSILON: f64 = 1e-14;

/// Chooses a "nice" rounded tick step for one divider cycle over a display
/// base.
///
/// Starting from the decade covering the full span, the step is divided
/// through the repeating integral cycle while it stays above the target
/// span, the base's minimal movement, and one unit; a fractional cycle
/// derived from the base then refines steps below one unit where the base
/// allows sub-unit granularity.
#[derive(Debug, Clone)]
pub struct TickSpanCalculator {
    base: f64,
    integral_dividers: [f64; 3],
    fractional_dividers: Vec<f64>,
}

impl TickSpanCalculator {
    #[must_use]
    pub fn new(base: f64, integral_dividers: [f64; 3]) -> Self {
        Self {
            base,
            integral_dividers,
            fractional_dividers: fractional_dividers(base),
        }
    }

    #[must_use]
    pub fn tick_span(&self, high: f64, low: f64, max_tick_span: f64) -> f64 {
        let min_movement = if self.base == 0.0 { 0.0 } else { 1.0 / self.base };
        if !high.is_finite() || !low.is_finite() || high < low {
            return min_movement.max(1.0);
        }

        let mut result = 10f64.powf((high - low).log10().ceil().max(0.0));
        let mut index = 0usize;
        let mut c = self.integral_dividers[0];
        loop {
            let larger_than_min_movement = greater_or_equal(result, min_movement)
                && result > min_movement + TICK_SPAN_EPSILON;
            let larger_than_max_span = greater_or_equal(result, max_tick_span * c);
            let larger_than_one = greater_or_equal(result, 1.0);
            if !(larger_than_min_movement && larger_than_max_span && larger_than_one) {
                break;
            }
            result /= c;
            index += 1;
            c = self.integral_dividers[index % self.integral_dividers.len()];
        }

        if result <= min_movement + TICK_SPAN_EPSILON {
            result = min_movement;
        }
        result = result.max(1.0);

        if !self.fractional_dividers.is_empty() && (result - 1.0).abs() <= TICK_SPAN_EPSILON {
            index = 0;
            c = self.fractional_dividers[0];
            while greater_or_equal(result, max_tick_span * c)
                && result > min_movement + TICK_SPAN_EPSILON
            {
                result /= c;
                index += 1;
                c = self.fractional_dividers[index % self.fractional_dividers.len()];
            }
        }

        result
    }
}

/// Smallest nice step across the three phase-shifted divider cycles.
///
/// A single cycle produces visually unstable spacing as the visible span
/// crosses certain magnitudes; the minimum over the three phases does not.
#[must_use]
pub fn min_tick_span(high: f64, low: f64, max_tick_span: f64, base: f64) -> f64 {
    let cycles: [[f64; 3]; 3] = [[2.0, 2.5, 2.0], [2.0, 2.0, 2.5], [2.5, 2.0, 2.0]];
    cycles
        .iter()
        .map(|dividers| TickSpanCalculator::new(base, *dividers).tick_span(high, low, max_tick_span))
        .fold(f64::INFINITY, f64::min)
}

fn greater_or_equal(left: f64, right: f64) -> bool {
    right - left <= TICK_SPAN_EPSILON
}

fn is_base_decimal(base: f64) -> bool {
    if base < 0.0 {
        return false;
    }
    let mut int_part = base;
    while int_part > 1.0 {
        if int_part % 10.0 != 0.0 {
            return false;
        }
        int_part /= 10.0;
    }
    true
}

fn fractional_dividers(base: f64) -> Vec<f64> {
    if is_base_decimal(base) {
        return vec![2.0, 2.5, 2.0];
    }
    let mut dividers = Vec::new();
    if !base.is_finite() || base < 1.0 {
        return dividers;
    }
    let mut rest = base.round() as i64;
    while rest > 1 {
        if rest % 2 == 0 {
            dividers.push(2.0);
            rest /= 2;
        } else if rest % 5 == 0 {
            dividers.push(2.0);
            dividers.push(2.5);
            rest /= 5;
        } else {
            // Base is not 2/5-smooth; no sub-unit refinement is possible.
            dividers.clear();
            break;
        }
        if dividers.len() > 100 {
            dividers.clear();
            break;
        }
    }
    dividers
}
