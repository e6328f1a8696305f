//! price-scale-rs: the price-axis coordinate engine of a financial chart.
//!
//! This crate maps prices to vertical pixel coordinates and back under four
//! scale modes (linear, logarithmic, percentage, indexed-to-100), keeps an
//! auto-fitted visible range merged from attached data sources, and produces
//! non-overlapping axis tick marks. Rendering, input handling, and series
//! storage are left to the embedding chart.

pub mod core;
pub mod error;
pub mod telemetry;

pub use crate::core::{
    AutoscaleInfo, AutoscaleMargins, LogFormula, PriceDataSource, PriceFormatter, PriceRange,
    PriceScale, PriceScaleMargins, PriceScaleMode, PriceScaleOptions, PriceScaleState,
    PriceScaleStateChange, PriceTickMark, SourceFirstValue, StrictRange, TimePointIndex,
};
pub use crate::error::{ScaleError, ScaleResult};
