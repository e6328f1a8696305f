pub mod formatter;
pub mod mode;
pub mod price_scale;
pub mod range;
pub mod tick_marks;
pub mod tick_span;
pub mod types;

pub use formatter::PriceFormatter;
pub use mode::{LogFormula, ModeTransform, PriceScaleMode};
pub use price_scale::{
    AutoscaleInfo, AutoscaleMargins, PriceDataSource, PriceScale, PriceScaleMargins,
    PriceScaleOptions, PriceScaleState, PriceScaleStateChange, SourceFirstValue,
};
pub use range::PriceRange;
pub use tick_marks::{PriceTickMark, TickMarkBuilder};
pub use tick_span::{TickSpanCalculator, min_tick_span};
pub use types::{StrictRange, TimePointIndex};
