//! Chart geometry, computed fresh from data on every render.
//!
//! Layouts only hold numbers and label strings; drawing them is left to
//! [`super::chart`].

use crate::types::{MonthBucket, ProjectTotal};
use crate::utils::should_label;

use super::styles::ChartStyle;

/// Axis-aligned rectangle with its top-left corner at (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn corners(&self) -> [(i32, i32); 2] {
        [(self.x, self.y), (self.x + self.width, self.y + self.height)]
    }
}

/// A text label anchored at (`x`, `y`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub x: i32,
    pub y: i32,
}

/// Clamp a percentage into `[0, 100]`; NaN counts as 0.
pub fn clamp_percent(percent: f64) -> f64 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// `value / max` of `extent`, or 0 when `max` is not positive.
fn scaled(value: i64, max: i64, extent: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    let ratio = (value as f64 / max as f64).clamp(0.0, 1.0);
    (ratio * extent as f64).round() as i32
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressLayout {
    pub width: u32,
    pub height: u32,
    pub percent: f64,
    pub track: Rect,
    pub filled: Rect,
    /// Right edge of the right-aligned label
    pub label_x: i32,
    pub label_y: i32,
}

impl ProgressLayout {
    pub fn compute(percent: f64, style: &ChartStyle) -> Self {
        let percent = clamp_percent(percent);
        let width = style.progress_width as i32;
        let filled_width = (width as f64 * percent / 100.0).round() as i32;
        let y = style.progress_track_y;
        let h = style.progress_track_height;

        Self {
            width: style.progress_width,
            height: style.progress_height,
            percent,
            track: Rect::new(0, y, width, h),
            filled: Rect::new(0, y, filled_width, h),
            label_x: width - 10,
            label_y: y - 5,
        }
    }
}

/// One month of the monthly bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthColumn {
    pub center_x: i32,
    pub bar: Rect,
    /// XP value above the bar, only for months with XP
    pub value_label: Option<Label>,
    /// Month abbreviation under the axis, for a subset of columns
    pub axis_label: Option<Label>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyLayout {
    pub width: u32,
    pub height: u32,
    pub max_xp: i64,
    /// Baseline from (`x1`, `y`) to (`x2`, `y`)
    pub baseline: (i32, i32, i32),
    pub columns: Vec<MonthColumn>,
}

impl MonthlyLayout {
    pub fn compute(buckets: &[MonthBucket], style: &ChartStyle) -> Self {
        let bottom_y = style.top_padding + style.chart_height;
        let width =
            style.padding_left + buckets.len() as i32 * style.column_width + style.padding_right;
        let height = bottom_y + style.bottom_margin;
        let max_xp = buckets.iter().map(|b| b.total_xp).max().unwrap_or(0);

        let columns = buckets
            .iter()
            .enumerate()
            .map(|(i, bucket)| {
                let center_x = style.padding_left + i as i32 * style.column_width;
                let bar_height = scaled(bucket.total_xp, max_xp, style.chart_height);
                let bar_y = bottom_y - bar_height;
                let bar = Rect::new(
                    center_x - style.month_bar_width / 2,
                    bar_y,
                    style.month_bar_width,
                    bar_height,
                );

                let value_label = (bucket.total_xp > 0).then(|| Label {
                    text: style.monthly_format.apply(bucket.total_xp as f64),
                    x: center_x,
                    y: bar_y - 8,
                });
                let axis_label = should_label(i, buckets.len(), style.max_month_labels).then(|| {
                    Label {
                        text: bucket.key.short_label(),
                        x: center_x,
                        y: bottom_y + 18,
                    }
                });

                MonthColumn {
                    center_x,
                    bar,
                    value_label,
                    axis_label,
                }
            })
            .collect();

        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
            max_xp,
            baseline: (style.padding_left, width - style.padding_right, bottom_y),
            columns,
        }
    }
}

/// One project row of the ranked chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    /// Right-aligned project name
    pub name: Label,
    pub bar: Rect,
    /// XP value trailing the bar
    pub value: Label,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedLayout {
    pub width: u32,
    pub height: u32,
    pub max_xp: i64,
    pub rows: Vec<RankedRow>,
}

impl RankedLayout {
    pub fn compute(totals: &[ProjectTotal], style: &ChartStyle) -> Self {
        let max_xp = totals.iter().map(|p| p.xp).max().unwrap_or(0);
        let width = style.name_width + style.bar_max_width + style.value_margin;
        let height = totals.len() as i32 * style.row_height + 10;
        let text_offset = style.row_height * 3 / 5;

        let rows = totals
            .iter()
            .enumerate()
            .map(|(i, project)| {
                let y = i as i32 * style.row_height + 5;
                let bar_width = scaled(project.xp, max_xp, style.bar_max_width);
                RankedRow {
                    name: Label {
                        text: project.name.clone(),
                        x: style.name_width - 10,
                        y: y + text_offset,
                    },
                    bar: Rect::new(style.name_width, y + 8, bar_width, style.row_bar_height),
                    value: Label {
                        text: style.ranked_format.apply(project.xp as f64),
                        x: style.name_width + bar_width + 8,
                        y: y + text_offset,
                    },
                }
            })
            .collect();

        Self {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
            max_xp,
            rows,
        }
    }
}
