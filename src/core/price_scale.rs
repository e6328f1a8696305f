use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{ScaleError, ScaleResult};

use super::formatter::PriceFormatter;
use super::mode::{
    LogFormula, ModeTransform, PriceScaleMode, can_convert_range_from_log, convert_range_from_log,
    convert_range_to_log, log_formula_for_range, log_formulas_match, range_survives_log_round_trip,
};
use super::range::PriceRange;
use super::tick_marks::{PriceTickMark, TickMarkBuilder};
use super::types::{StrictRange, TimePointIndex};

/// Snapshot of the scale's mode axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScaleState {
    pub auto_scale: bool,
    pub is_inverted: bool,
    pub mode: PriceScaleMode,
}

/// Partial mode change applied through [`PriceScale::set_mode`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PriceScaleStateChange {
    pub auto_scale: Option<bool>,
    pub is_inverted: Option<bool>,
    pub mode: Option<PriceScaleMode>,
}

/// Fractional margins reserved above and below the fitted range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScaleMargins {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceScaleOptions {
    pub auto_scale: bool,
    pub mode: PriceScaleMode,
    pub invert_scale: bool,
    pub scale_margins: PriceScaleMargins,
    /// Drop boundary marks whose label would be partially clipped.
    pub entire_text_only: bool,
    pub ensure_edge_tick_marks_visible: bool,
    /// Label font height, in pixels; drives the anti-overlap mark spacing.
    pub font_size_px: f64,
}

impl Default for PriceScaleOptions {
    fn default() -> Self {
        Self {
            auto_scale: true,
            mode: PriceScaleMode::Normal,
            invert_scale: false,
            scale_margins: PriceScaleMargins {
                top: 0.2,
                bottom: 0.1,
            },
            entire_text_only: false,
            ensure_edge_tick_marks_visible: false,
            font_size_px: 12.0,
        }
    }
}

/// First data point of a source inside the visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceFirstValue {
    pub value: f64,
    pub index: TimePointIndex,
}

/// Extra pixel headroom a source requests around its fitted range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoscaleMargins {
    pub above: f64,
    pub below: f64,
}

/// Auto-scale contribution polled from an attached series or indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoscaleInfo {
    pub price_range: Option<PriceRange>,
    pub margins: Option<AutoscaleMargins>,
}

/// Interface of a series/indicator attached to the scale.
///
/// Sources are polled synchronously, in registration order, while the lazy
/// range cache revalidates.
pub trait PriceDataSource {
    fn visible(&self) -> bool {
        true
    }
    fn first_value(&self) -> Option<SourceFirstValue>;
    fn autoscale_info(&self, visible_window: StrictRange) -> Option<AutoscaleInfo>;
    fn min_move(&self) -> f64 {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct GestureSnapshot {
    start_point: f64,
    range: PriceRange,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ActiveGesture {
    Scale(GestureSnapshot),
    Scroll(GestureSnapshot),
}

#[derive(Debug, Clone, Copy, Default)]
struct RangeCache {
    visible_window: Option<StrictRange>,
    valid: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct MarksCache {
    valid: bool,
    first_value_was_null: bool,
}

/// The price-axis coordinate engine.
///
/// Owns the fitted value range, the mode/margin/inversion state, the
/// attached data sources, and the tick-mark builder. Derived state (range,
/// internal height, marks) is dirty-bit cached and recomputed on read.
pub struct PriceScale {
    id: String,
    options: PriceScaleOptions,
    height: f64,
    internal_height_cache: Option<f64>,
    price_range: Option<PriceRange>,
    is_custom_price_range: bool,
    range_cache: RangeCache,
    margin_above: f64,
    margin_below: f64,
    gesture: Option<ActiveGesture>,
    log_formula: LogFormula,
    sources: Vec<Rc<dyn PriceDataSource>>,
    min_move_override: Option<f64>,
    formatter: PriceFormatter,
    mark_builder: TickMarkBuilder,
    marks_cache: MarksCache,
    marks_changed: bool,
}

impl PriceScale {
    pub fn new(id: impl Into<String>, options: PriceScaleOptions) -> ScaleResult<Self> {
        validate_margins(options.scale_margins)?;
        let mut scale = Self {
            id: id.into(),
            options,
            height: 0.0,
            internal_height_cache: None,
            price_range: None,
            is_custom_price_range: false,
            range_cache: RangeCache::default(),
            margin_above: 0.0,
            margin_below: 0.0,
            gesture: None,
            log_formula: LogFormula::default(),
            sources: Vec::new(),
            min_move_override: None,
            formatter: PriceFormatter::default(),
            mark_builder: TickMarkBuilder::default(),
            marks_cache: MarksCache::default(),
            marks_changed: false,
        };
        scale.update_formatter();
        Ok(scale)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn options(&self) -> PriceScaleOptions {
        self.options
    }

    /// Applies a full option set, rejecting invalid margins before any state
    /// changes. Mode/inversion/auto-scale transitions route through
    /// [`Self::set_mode`] so their side effects run.
    pub fn apply_options(&mut self, options: PriceScaleOptions) -> ScaleResult<()> {
        validate_margins(options.scale_margins)?;
        let change = PriceScaleStateChange {
            auto_scale: Some(options.auto_scale),
            is_inverted: Some(options.invert_scale),
            mode: Some(options.mode),
        };
        self.options.scale_margins = options.scale_margins;
        self.options.entire_text_only = options.entire_text_only;
        self.options.ensure_edge_tick_marks_visible = options.ensure_edge_tick_marks_visible;
        self.options.font_size_px = options.font_size_px;
        self.set_mode(change);
        self.invalidate_internal_height_cache();
        self.invalidate_marks();
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> PriceScaleState {
        PriceScaleState {
            auto_scale: self.options.auto_scale,
            is_inverted: self.options.invert_scale,
            mode: self.options.mode,
        }
    }

    /// Single entry point for mode-axis transitions.
    ///
    /// Entering Percentage/IndexedTo100 forces auto-scale on (their baseline
    /// moves with the data, so a pinned range is meaningless). Entering or
    /// leaving Logarithmic converts the stored range between domains when the
    /// conversion survives, and falls back to auto-scale when it does not.
    pub fn set_mode(&mut self, change: PriceScaleStateChange) {
        let old_mode = self.mode();
        if let Some(auto_scale) = change.auto_scale {
            self.options.auto_scale = auto_scale;
        }
        if let Some(mode) = change.mode {
            self.options.mode = mode;
            if matches!(
                mode,
                PriceScaleMode::Percentage | PriceScaleMode::IndexedTo100
            ) {
                self.options.auto_scale = true;
            }
            if mode != old_mode.mode {
                self.range_cache.valid = false;
            }
        }

        if old_mode.mode == PriceScaleMode::Logarithmic && self.options.mode != old_mode.mode {
            if let Some(range) = self.price_range {
                if can_convert_range_from_log(range, self.log_formula) {
                    self.set_price_range_internal(Some(convert_range_from_log(
                        range,
                        self.log_formula,
                    )));
                } else {
                    self.options.auto_scale = true;
                }
            }
        }
        if self.options.mode == PriceScaleMode::Logarithmic && self.options.mode != old_mode.mode {
            if let Some(range) = self.price_range {
                if range_survives_log_round_trip(range, self.log_formula) {
                    self.set_price_range_internal(Some(convert_range_to_log(
                        range,
                        self.log_formula,
                    )));
                } else {
                    self.options.auto_scale = true;
                }
            }
        }

        if self.options.mode != old_mode.mode {
            self.update_formatter();
        }

        if let Some(inverted) = change.is_inverted {
            if inverted != self.options.invert_scale {
                self.options.invert_scale = inverted;
                self.invalidate_marks();
            }
        }
    }

    #[must_use]
    pub fn is_auto_scale(&self) -> bool {
        self.options.auto_scale
    }

    #[must_use]
    pub fn is_log(&self) -> bool {
        self.options.mode == PriceScaleMode::Logarithmic
    }

    #[must_use]
    pub fn is_percentage(&self) -> bool {
        self.options.mode == PriceScaleMode::Percentage
    }

    #[must_use]
    pub fn is_indexed_to_100(&self) -> bool {
        self.options.mode == PriceScaleMode::IndexedTo100
    }

    #[must_use]
    pub fn is_inverted(&self) -> bool {
        self.options.invert_scale
    }

    #[must_use]
    pub fn is_custom_price_range(&self) -> bool {
        self.is_custom_price_range
    }

    pub fn set_height(&mut self, value: f64) {
        if (self.height - value).abs() <= f64::EPSILON {
            return;
        }
        self.height = value;
        self.invalidate_internal_height_cache();
        self.invalidate_marks();
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn internal_height(&mut self) -> f64 {
        if let Some(cached) = self.internal_height_cache {
            return cached;
        }
        let value = self.height - self.top_margin_px() - self.bottom_margin_px();
        self.internal_height_cache = Some(value);
        value
    }

    pub fn add_source(&mut self, source: Rc<dyn PriceDataSource>) {
        self.sources.push(source);
        self.range_cache.valid = false;
        self.update_formatter();
    }

    pub fn remove_source(&mut self, source: &Rc<dyn PriceDataSource>) {
        self.sources.retain(|existing| !Rc::ptr_eq(existing, source));
        self.range_cache.valid = false;
        self.update_formatter();
    }

    /// Updates the visible domain window and schedules a lazy refit.
    pub fn set_visible_window(&mut self, window: StrictRange) {
        self.range_cache = RangeCache {
            visible_window: Some(window),
            valid: false,
        };
    }

    #[must_use]
    pub fn visible_window(&self) -> Option<StrictRange> {
        self.range_cache.visible_window
    }

    /// Baseline value for the relative modes: the attached source value with
    /// the smallest domain index.
    #[must_use]
    pub fn first_value(&self) -> Option<f64> {
        let mut result: Option<SourceFirstValue> = None;
        for source in &self.sources {
            let Some(candidate) = source.first_value() else {
                continue;
            };
            if result.is_none_or(|best| candidate.index < best.index) {
                result = Some(candidate);
            }
        }
        result.map(|first| first.value)
    }

    pub fn set_min_move_override(&mut self, min_move: Option<f64>) {
        self.min_move_override = min_move;
        self.update_formatter();
    }

    #[must_use]
    pub fn min_move(&self) -> f64 {
        if let Some(value) = self.min_move_override {
            return value;
        }
        self.sources.first().map_or(1.0, |source| source.min_move())
    }

    #[must_use]
    pub fn price_range(&mut self) -> Option<PriceRange> {
        self.ensure_valid();
        self.price_range
    }

    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.set_price_range_internal(range);
    }

    /// Pins a caller-provided range; auto-scale refits skip it while
    /// auto-scale is off.
    pub fn set_custom_price_range(&mut self, range: Option<PriceRange>) {
        self.set_price_range_internal(range);
        self.is_custom_price_range = range.is_some();
    }

    #[must_use]
    pub fn is_empty(&mut self) -> bool {
        self.ensure_valid();
        self.height == 0.0 || self.price_range.is_none_or(|range| range.is_empty())
    }

    #[must_use]
    pub fn formatter(&self) -> &PriceFormatter {
        &self.formatter
    }

    /// Mode-aware display formatting for a raw price.
    #[must_use]
    pub fn format_price(&self, price: f64, base_value: f64) -> String {
        self.format_logical(self.price_transform(base_value).apply(price))
    }

    #[must_use]
    pub fn format_logical(&self, logical: f64) -> String {
        self.formatter.format(logical)
    }

    pub fn price_to_coordinate(&mut self, price: f64, base_value: f64) -> ScaleResult<f64> {
        let logical = self.price_transform(base_value).apply(price);
        self.logical_to_coordinate(logical)
    }

    pub fn coordinate_to_price(&mut self, coordinate: f64, base_value: f64) -> ScaleResult<f64> {
        let logical = self.coordinate_to_logical(coordinate)?;
        Ok(self.logical_to_price(logical, base_value))
    }

    #[must_use]
    pub fn logical_to_price(&self, logical: f64, base_value: f64) -> f64 {
        self.price_transform(base_value).invert(logical)
    }

    pub fn logical_to_coordinate(&mut self, mut logical: f64) -> ScaleResult<f64> {
        self.ensure_valid();
        if self.is_empty() {
            return Ok(0.0);
        }
        if self.is_log() && logical != 0.0 {
            logical = super::mode::to_log(logical, self.log_formula);
        }
        let range = self
            .price_range
            .ok_or_else(|| ScaleError::InvalidData("price range is not available".to_owned()))?;
        let inv_coordinate = self.bottom_margin_px()
            + (self.internal_height() - 1.0) * (logical - range.min()) / range.length();
        Ok(self.inverted_coordinate(inv_coordinate))
    }

    pub fn coordinate_to_logical(&mut self, coordinate: f64) -> ScaleResult<f64> {
        self.ensure_valid();
        if self.is_empty() {
            return Ok(0.0);
        }
        let range = self
            .price_range
            .ok_or_else(|| ScaleError::InvalidData("price range is not available".to_owned()))?;
        let inv_coordinate = self.inverted_coordinate(coordinate);
        let logical = range.min()
            + range.length()
                * ((inv_coordinate - self.bottom_margin_px()) / (self.internal_height() - 1.0));
        if self.is_log() {
            Ok(super::mode::from_log(logical, self.log_formula))
        } else {
            Ok(logical)
        }
    }

    pub fn start_scale(&mut self, x: f64) {
        if self.is_percentage() || self.is_indexed_to_100() {
            return;
        }
        if self.gesture.is_some() {
            return;
        }
        self.ensure_valid();
        if self.is_empty() {
            return;
        }
        let Some(range) = self.price_range else {
            return;
        };
        self.gesture = Some(ActiveGesture::Scale(GestureSnapshot {
            start_point: self.height - x,
            range,
        }));
    }

    pub fn scale_to(&mut self, x: f64) {
        if self.is_percentage() || self.is_indexed_to_100() {
            return;
        }
        let Some(ActiveGesture::Scale(snapshot)) = self.gesture else {
            return;
        };
        self.options.auto_scale = false;
        let x = (self.height - x).max(0.0);
        // Damped so a full-height drag roughly quintuples the span; the floor
        // keeps the range from collapsing or flipping.
        let damping = (self.height - 1.0) * 0.2;
        let coeff = ((snapshot.start_point + damping) / (x + damping)).max(0.1);
        let mut range = snapshot.range;
        range.scale_around_center(coeff);
        self.set_price_range_internal(Some(range));
    }

    pub fn end_scale(&mut self) {
        if matches!(self.gesture, Some(ActiveGesture::Scale(_))) {
            self.gesture = None;
        }
    }

    pub fn start_scroll(&mut self, x: f64) {
        if self.options.auto_scale {
            return;
        }
        if self.gesture.is_some() {
            return;
        }
        self.ensure_valid();
        if self.is_empty() {
            return;
        }
        let Some(range) = self.price_range else {
            return;
        };
        self.gesture = Some(ActiveGesture::Scroll(GestureSnapshot {
            start_point: x,
            range,
        }));
    }

    pub fn scroll_to(&mut self, x: f64) {
        if self.options.auto_scale {
            return;
        }
        let Some(ActiveGesture::Scroll(snapshot)) = self.gesture else {
            return;
        };
        let Some(current_range) = self.price_range else {
            return;
        };
        let mut pixel_delta = x - snapshot.start_point;
        if self.is_inverted() {
            pixel_delta = -pixel_delta;
        }
        let price_units_per_pixel = current_range.length() / (self.internal_height() - 1.0);
        let mut range = snapshot.range;
        range.shift(pixel_delta * price_units_per_pixel);
        self.set_price_range_internal(Some(range));
    }

    pub fn end_scroll(&mut self) {
        if matches!(self.gesture, Some(ActiveGesture::Scroll(_))) {
            self.gesture = None;
        }
    }

    /// Generated axis marks, rebuilt lazily.
    ///
    /// While the first value is transiently unavailable the previous mark set
    /// is retained, so a momentary empty-data state does not blank the axis.
    pub fn marks(&mut self) -> &[PriceTickMark] {
        let first_value_is_null = self.first_value().is_none();
        let cache_hit = self.marks_cache.valid
            && (first_value_is_null
                || self.marks_cache.first_value_was_null == first_value_is_null);
        if !cache_hit {
            let mut builder = std::mem::take(&mut self.mark_builder);
            builder.rebuild(self);
            self.mark_builder = builder;
            self.marks_cache = MarksCache {
                valid: true,
                first_value_was_null: first_value_is_null,
            };
            self.marks_changed = true;
            trace!(
                scale = %self.id,
                marks = self.mark_builder.marks().len(),
                "tick marks rebuilt"
            );
        }
        self.mark_builder.marks()
    }

    /// Drains the "marks changed" flag set by the last rebuild; the axis
    /// widget polls it to decide whether its reserved width must grow.
    pub fn take_marks_changed(&mut self) -> bool {
        std::mem::take(&mut self.marks_changed)
    }

    #[must_use]
    pub fn has_visible_edge_marks(&self) -> bool {
        self.options.ensure_edge_tick_marks_visible && self.options.auto_scale
    }

    #[must_use]
    pub fn edge_marks_padding(&self) -> f64 {
        6.0
    }

    pub(crate) fn font_height(&self) -> f64 {
        self.options.font_size_px
    }

    /// Price-to-logical strategy for the active mode. The log mapping is not
    /// part of it: log scales store their range in log domain and apply the
    /// mapping inside the logical/coordinate step.
    fn price_transform(&self, base_value: f64) -> ModeTransform {
        match self.options.mode {
            PriceScaleMode::Percentage => ModeTransform::Percentage { base: base_value },
            PriceScaleMode::IndexedTo100 => ModeTransform::IndexedTo100 { base: base_value },
            PriceScaleMode::Normal | PriceScaleMode::Logarithmic => ModeTransform::Normal,
        }
    }

    /// Raw-to-logical strategy for auto-scale range contributions.
    fn range_transform(&self, base_value: f64) -> ModeTransform {
        match self.options.mode {
            PriceScaleMode::Normal => ModeTransform::Normal,
            PriceScaleMode::Logarithmic => ModeTransform::Log(self.log_formula),
            PriceScaleMode::Percentage => ModeTransform::Percentage { base: base_value },
            PriceScaleMode::IndexedTo100 => ModeTransform::IndexedTo100 { base: base_value },
        }
    }

    fn ensure_valid(&mut self) {
        if self.range_cache.valid {
            return;
        }
        self.range_cache.valid = true;
        self.recalculate_range();
    }

    fn recalculate_range(&mut self) {
        if self.is_custom_price_range && !self.options.auto_scale {
            return;
        }
        let Some(visible_window) = self.range_cache.visible_window else {
            return;
        };

        let mut merged: Option<PriceRange> = None;
        let mut margin_above: f64 = 0.0;
        let mut margin_below: f64 = 0.0;

        for source in &self.sources {
            if !source.visible() {
                continue;
            }
            let Some(first_value) = source.first_value() else {
                continue;
            };
            let Some(info) = source.autoscale_info(visible_window) else {
                continue;
            };
            let Some(source_range) = info.price_range else {
                continue;
            };
            let converted = self
                .range_transform(first_value.value)
                .apply_range(source_range);
            merged = Some(match merged {
                Some(accumulated) => accumulated.merge(converted),
                None => converted,
            });
            if let Some(margins) = info.margins {
                margin_above = margin_above.max(margins.above);
                margin_below = margin_below.max(margins.below);
            }
        }

        if self.has_visible_edge_marks() {
            margin_above = margin_above.max(self.edge_marks_padding());
            margin_below = margin_below.max(self.edge_marks_padding());
        }
        if (margin_above - self.margin_above).abs() > f64::EPSILON
            || (margin_below - self.margin_below).abs() > f64::EPSILON
        {
            self.margin_above = margin_above;
            self.margin_below = margin_below;
            self.invalidate_internal_height_cache();
            self.invalidate_marks();
        }

        if let Some(mut range) = merged {
            if (range.min() - range.max()).abs() <= f64::EPSILON {
                // A single flat value; synthesize a span so the scale keeps a
                // usable coordinate space. The extension happens in the raw
                // domain even for log scales.
                let min_move = if self.is_percentage() || self.is_indexed_to_100() {
                    1.0
                } else {
                    self.min_move()
                };
                let extend = 5.0 * min_move;
                if self.is_log() {
                    range = convert_range_from_log(range, self.log_formula);
                }
                range = PriceRange::new(range.min() - extend, range.max() + extend);
                if self.is_log() {
                    range = convert_range_to_log(range, self.log_formula);
                }
            }

            if self.is_log() {
                let raw = convert_range_from_log(range, self.log_formula);
                let formula = log_formula_for_range(Some(raw));
                if !log_formulas_match(formula, self.log_formula) {
                    // Re-project the working range and any in-flight gesture
                    // snapshot, so the swap cannot jump mid-gesture.
                    let snapshot_raw = self.gesture.as_ref().map(|gesture| match gesture {
                        ActiveGesture::Scale(snapshot) | ActiveGesture::Scroll(snapshot) => {
                            convert_range_from_log(snapshot.range, self.log_formula)
                        }
                    });
                    self.log_formula = formula;
                    range = convert_range_to_log(raw, formula);
                    if let (Some(gesture), Some(raw_snapshot)) = (&mut self.gesture, snapshot_raw) {
                        let reprojected = convert_range_to_log(raw_snapshot, formula);
                        match gesture {
                            ActiveGesture::Scale(snapshot) | ActiveGesture::Scroll(snapshot) => {
                                snapshot.range = reprojected;
                            }
                        }
                    }
                }
            }

            debug!(
                scale = %self.id,
                min = range.min(),
                max = range.max(),
                "auto-scale merge refitted the price range"
            );
            self.set_price_range_internal(Some(range));
        } else if self.price_range.is_none() {
            debug!(scale = %self.id, "auto-scale merge had no contributions, using default range");
            self.set_price_range_internal(Some(PriceRange::new(-0.5, 0.5)));
            self.log_formula = log_formula_for_range(None);
        }
    }

    fn set_price_range_internal(&mut self, range: Option<PriceRange>) {
        if self.price_range == range {
            return;
        }
        self.price_range = range;
        self.invalidate_marks();
    }

    fn update_formatter(&mut self) {
        self.formatter = match self.options.mode {
            PriceScaleMode::Percentage => PriceFormatter::percentage(),
            PriceScaleMode::IndexedTo100 => PriceFormatter::indexed_to_100(),
            PriceScaleMode::Normal | PriceScaleMode::Logarithmic => {
                if self.sources.is_empty() && self.min_move_override.is_none() {
                    PriceFormatter::default()
                } else {
                    PriceFormatter::from_min_move(self.min_move())
                }
            }
        };
        self.invalidate_marks();
    }

    fn invalidate_marks(&mut self) {
        self.marks_cache.valid = false;
    }

    fn invalidate_internal_height_cache(&mut self) {
        self.internal_height_cache = None;
    }

    fn inverted_coordinate(&self, coordinate: f64) -> f64 {
        if self.is_inverted() {
            coordinate
        } else {
            self.height - 1.0 - coordinate
        }
    }

    fn top_margin_px(&self) -> f64 {
        if self.is_inverted() {
            self.options.scale_margins.bottom * self.height + self.margin_below
        } else {
            self.options.scale_margins.top * self.height + self.margin_above
        }
    }

    fn bottom_margin_px(&self) -> f64 {
        if self.is_inverted() {
            self.options.scale_margins.top * self.height + self.margin_above
        } else {
            self.options.scale_margins.bottom * self.height + self.margin_below
        }
    }
}

fn validate_margins(margins: PriceScaleMargins) -> ScaleResult<()> {
    if !(0.0..=1.0).contains(&margins.top) {
        return Err(ScaleError::InvalidOptions(format!(
            "top margin must be in [0, 1], got {}",
            margins.top
        )));
    }
    if !(0.0..=1.0).contains(&margins.bottom) {
        return Err(ScaleError::InvalidOptions(format!(
            "bottom margin must be in [0, 1], got {}",
            margins.bottom
        )));
    }
    if margins.top + margins.bottom > 1.0 {
        return Err(ScaleError::InvalidOptions(format!(
            "sum of margins must be <= 1, got {}",
            margins.top + margins.bottom
        )));
    }
    Ok(())
}
