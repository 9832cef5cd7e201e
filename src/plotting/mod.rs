//! SVG rendering of the aggregated series.
//!
//! Each renderer computes a layout from its input and draws it through the
//! plotters SVG backend. Nothing is cached between calls.

pub mod chart;
pub mod layout;
pub mod styles;

#[cfg(test)]
mod tests;

pub use chart::{
    monthly_bar_chart, monthly_bar_chart_with, progress_bar, progress_bar_with, ranked_bar_chart,
    ranked_bar_chart_with, NO_DATA, NO_PROJECTS,
};
pub use layout::{MonthlyLayout, ProgressLayout, RankedLayout};
pub use styles::{ChartStyle, ChartTheme, HexColor};
