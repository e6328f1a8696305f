use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::error::ScaleResult;

use super::price_scale::PriceScale;
use super::tick_span::min_tick_span;

const TICK_DENSITY: f64 = 2.5;

/// One generated axis mark: pixel coordinate plus rendered label.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTickMark {
    pub coord: f64,
    pub label: String,
}

/// Rebuilds the axis mark set from the scale's current coordinate space.
///
/// The mark vector is reused across rebuilds (overwritten by index, then
/// truncated) so per-frame rebuilds do not reallocate.
#[derive(Debug, Default)]
pub struct TickMarkBuilder {
    marks: Vec<PriceTickMark>,
}

impl TickMarkBuilder {
    #[must_use]
    pub fn marks(&self) -> &[PriceTickMark] {
        &self.marks
    }

    pub(crate) fn rebuild(&mut self, scale: &mut PriceScale) {
        if scale.first_value().is_none() {
            self.marks.clear();
            return;
        }
        if self.rebuild_impl(scale).is_err() {
            self.marks.clear();
        }
    }

    fn rebuild_impl(&mut self, scale: &mut PriceScale) -> ScaleResult<()> {
        let height = scale.height();
        let mark_height = tick_mark_height(scale.font_height());
        let bottom = scale.coordinate_to_logical(height - 1.0)?;
        let top = scale.coordinate_to_logical(0.0)?;

        let extra_margin = if scale.options().entire_text_only {
            scale.font_height() / 2.0
        } else {
            0.0
        };
        let min_coord = extra_margin;
        let max_coord = height - 1.0 - extra_margin;

        let high = bottom.max(top);
        let low = bottom.min(top);
        if high == low || !high.is_finite() || !low.is_finite() {
            self.marks.clear();
            return Ok(());
        }

        let base = scale.formatter().base();
        let mut span = tick_span(scale, high, low, base, mark_height);
        let mut remainder = high % span;
        if remainder < 0.0 {
            remainder += span;
        }

        let mut prev_coord: Option<f64> = None;
        let mut emitted = 0usize;
        let mut logical = high - remainder;
        while logical > low {
            let coord = scale.logical_to_coordinate(logical)?;
            let collides = prev_coord.is_some_and(|prev| (coord - prev).abs() < mark_height);
            let inside = coord >= min_coord && coord <= max_coord;
            if !collides && inside {
                let label = scale.format_logical(logical);
                self.write_mark(emitted, coord, label);
                emitted += 1;
                prev_coord = Some(coord);
                if scale.is_log() {
                    // Span is not linear in log space; re-derive it from the
                    // current position.
                    span = tick_span(scale, logical, low, base, mark_height);
                }
            }
            logical -= span;
        }
        self.marks.truncate(emitted);

        if scale.has_visible_edge_marks() {
            self.extend_with_edge_marks(scale, span)?;
        }
        Ok(())
    }

    /// Adds one boundary mark per edge, snapped to the tick step, replacing
    /// an existing mark that would sit closer than the edge padding.
    fn extend_with_edge_marks(&mut self, scale: &mut PriceScale, span: f64) -> ScaleResult<()> {
        let padding = scale.edge_marks_padding();
        let height = scale.height();
        let edges: SmallVec<[f64; 2]> = SmallVec::from_slice(&[padding, height - 1.0 - padding]);

        for edge_coord in edges {
            let logical = scale.coordinate_to_logical(edge_coord)?;
            let snapped = (logical / span).round() * span;
            let coord = scale.logical_to_coordinate(snapped)?;
            if coord < 0.0 || coord > height - 1.0 {
                continue;
            }
            let label = scale.format_logical(snapped);
            let nearest = self
                .marks
                .iter()
                .enumerate()
                .map(|(index, mark)| (OrderedFloat((mark.coord - coord).abs()), index))
                .min();
            match nearest {
                Some((distance, index)) if distance.into_inner() < padding => {
                    self.marks[index] = PriceTickMark { coord, label };
                }
                _ => self.marks.push(PriceTickMark { coord, label }),
            }
        }

        self.marks.sort_by_key(|mark| OrderedFloat(mark.coord));
        Ok(())
    }

    fn write_mark(&mut self, index: usize, coord: f64, label: String) {
        if index < self.marks.len() {
            self.marks[index] = PriceTickMark { coord, label };
        } else {
            self.marks.push(PriceTickMark { coord, label });
        }
    }
}

fn tick_span(scale: &PriceScale, high: f64, low: f64, base: f64, mark_height: f64) -> f64 {
    let scale_height = scale.height().max(1.0);
    let max_tick_span = (high - low) * mark_height / scale_height;
    min_tick_span(high, low, max_tick_span, base)
}

pub(crate) fn tick_mark_height(font_height: f64) -> f64 {
    (font_height * TICK_DENSITY).ceil()
}
