use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::DrawingBackend;
use std::error::Error;
use tracing::warn;

use crate::types::{MonthBucket, ProjectTotal};

use super::layout::{Label, MonthlyLayout, ProgressLayout, RankedLayout, Rect};
use super::styles::{ChartStyle, ChartTheme, HexColor};

type PlotError = Box<dyn Error + Send + Sync>;

/// The SVG backend writes `font-size` as the requested size divided by this.
const SVG_FONT_SCALE: f64 = 1.24;

/// Placeholder returned by [`monthly_bar_chart`] when there are no months.
pub const NO_DATA: &str = r#"<p class="no-data">No data</p>"#;
/// Placeholder returned by [`ranked_bar_chart`] when there are no projects.
pub const NO_PROJECTS: &str = r#"<p class="no-data">No projects</p>"#;

/// Render `draw` into a standalone SVG document string.
fn render_svg<F>(size: (u32, u32), draw: F) -> Result<String, PlotError>
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), PlotError>,
{
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        draw(&root)?;
        root.present()?;
    }
    Ok(buffer)
}

/// Render, or log the failure and fall back to `placeholder`.
fn render_or<F>(what: &str, size: (u32, u32), placeholder: &str, draw: F) -> String
where
    F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<(), PlotError>,
{
    render_svg(size, draw).unwrap_or_else(|e| {
        warn!(error = %e, "failed to render {what}");
        placeholder.to_string()
    })
}

fn draw_rect<DB>(area: &DrawingArea<DB, Shift>, rect: &Rect, color: HexColor) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.draw(&Rectangle::new(rect.corners(), RGBColor::from(color).filled()))?;
    Ok(())
}

fn draw_label<DB>(
    area: &DrawingArea<DB, Shift>,
    label: &Label,
    font: TextStyle<'_>,
) -> Result<(), PlotError>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    area.draw(&Text::new(label.text.clone(), (label.x, label.y), font))?;
    Ok(())
}

fn font<'a>(
    style: &'a ChartStyle,
    size: f64,
    weight: FontStyle,
    color: HexColor,
    h_pos: HPos,
) -> TextStyle<'a> {
    FontDesc::new(
        FontFamily::Name(&style.font_family),
        size * SVG_FONT_SCALE,
        weight,
    )
        .color(&RGBColor::from(color))
        .pos(Pos::new(h_pos, VPos::Bottom))
}

/// Horizontal progress bar with the default theme and layout.
///
/// `percent` is clamped to `[0, 100]`.
pub fn progress_bar(percent: f64, label: &str, color: HexColor) -> String {
    progress_bar_with(
        percent,
        label,
        color,
        &ChartTheme::default(),
        &ChartStyle::default(),
    )
}

pub fn progress_bar_with(
    percent: f64,
    label: &str,
    color: HexColor,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> String {
    let layout = ProgressLayout::compute(percent, style);
    let label = Label {
        text: label.to_string(),
        x: layout.label_x,
        y: layout.label_y,
    };
    let label_font = font(
        style,
        style.progress_label_size,
        FontStyle::Bold,
        theme.value_text_color,
        HPos::Right,
    );

    render_or(
        "progress bar",
        (layout.width, layout.height),
        NO_DATA,
        |root| {
            draw_rect(root, &layout.track, theme.track_color)?;
            draw_rect(root, &layout.filled, color)?;
            draw_label(root, &label, label_font)
        },
    )
}

/// Vertical bar chart of XP per month with the default theme and layout.
///
/// Returns [`NO_DATA`] for an empty series.
pub fn monthly_bar_chart(buckets: &[MonthBucket]) -> String {
    monthly_bar_chart_with(buckets, &ChartTheme::default(), &ChartStyle::default())
}

pub fn monthly_bar_chart_with(
    buckets: &[MonthBucket],
    theme: &ChartTheme,
    style: &ChartStyle,
) -> String {
    if buckets.is_empty() {
        return NO_DATA.to_string();
    }

    let layout = MonthlyLayout::compute(buckets, style);
    let axis_font = font(
        style,
        style.axis_label_size,
        FontStyle::Normal,
        theme.axis_text_color,
        HPos::Center,
    );
    let value_font = font(
        style,
        style.month_value_size,
        FontStyle::Normal,
        theme.value_text_color,
        HPos::Center,
    );

    render_or(
        "monthly bar chart",
        (layout.width, layout.height),
        NO_DATA,
        |root| {
            let (x1, x2, y) = layout.baseline;
            root.draw(&PathElement::new(
                vec![(x1, y), (x2, y)],
                ShapeStyle::from(&RGBColor::from(theme.axis_color)).stroke_width(1),
            ))?;

            for column in &layout.columns {
                draw_rect(root, &column.bar, theme.bar_color)?;
                if let Some(label) = &column.axis_label {
                    draw_label(root, label, axis_font.clone())?;
                }
                if let Some(label) = &column.value_label {
                    draw_label(root, label, value_font.clone())?;
                }
            }
            Ok(())
        },
    )
}

/// Horizontal bar chart of project totals, one row per project, with the
/// default theme and layout.
///
/// Returns [`NO_PROJECTS`] for an empty ranking.
pub fn ranked_bar_chart(totals: &[ProjectTotal]) -> String {
    ranked_bar_chart_with(totals, &ChartTheme::default(), &ChartStyle::default())
}

pub fn ranked_bar_chart_with(
    totals: &[ProjectTotal],
    theme: &ChartTheme,
    style: &ChartStyle,
) -> String {
    if totals.is_empty() {
        return NO_PROJECTS.to_string();
    }

    let layout = RankedLayout::compute(totals, style);
    let name_font = font(
        style,
        style.name_label_size,
        FontStyle::Normal,
        theme.name_text_color,
        HPos::Right,
    );
    let value_font = font(
        style,
        style.ranked_value_size,
        FontStyle::Bold,
        theme.value_text_color,
        HPos::Left,
    );

    render_or(
        "ranked bar chart",
        (layout.width, layout.height),
        NO_PROJECTS,
        |root| {
            for row in &layout.rows {
                draw_label(root, &row.name, name_font.clone())?;
                draw_rect(root, &row.bar, theme.bar_color)?;
                draw_label(root, &row.value, value_font.clone())?;
            }
            Ok(())
        },
    )
}
