//! Fortune periods (dayun / liunian / xiaoyun / liuyue).
//!
//! [`FortuneTimeline`] holds the decade periods of a chart. Children are
//! generated on demand for a [`SelectionCursor`], either directly through
//! the timeline or memoized in a [`FortuneCache`].

pub mod annual;
pub mod decade;
pub mod monthly;
pub mod selection;
pub mod types;

pub use annual::{annual_periods, minor_periods};
pub use decade::{FortuneTimeline, PeriodContext};
pub use monthly::{FIRST_MONTH_BRANCH, first_month_stem, monthly_periods};
pub use selection::{FortuneCache, SelectionCursor, SelectionView};
pub use types::{
    AnnualPeriod, DEFAULT_DECADE_SPAN, DecadeChildren, DecadeSpec, FortunePeriod,
    MONTHS_PER_YEAR, MinorPeriod, MonthlyPeriod, PeriodAnnotations,
};
