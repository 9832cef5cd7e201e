use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::LabelFormat;

/// A `#rrggbb` color as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub u8, pub u8, pub u8);

#[derive(Debug, thiserror::Error)]
#[error("invalid color {0:?}, expected #rrggbb")]
pub struct InvalidColor(String);

impl HexColor {
    pub fn parse(s: &str) -> Result<Self, InvalidColor> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| InvalidColor(s.to_string()))
        };
        Ok(Self(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}

impl From<HexColor> for RGBColor {
    fn from(color: HexColor) -> Self {
        RGBColor(color.0, color.1, color.2)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Chart theme configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    /// Empty part of a progress bar
    pub track_color: HexColor,
    /// Bars in the monthly and project charts
    pub bar_color: HexColor,
    /// Filled part of the "audits done" bar
    pub done_color: HexColor,
    /// Filled part of the "audits received" bar
    pub received_color: HexColor,
    /// Value labels
    pub value_text_color: HexColor,
    /// Month labels under the monthly chart
    pub axis_text_color: HexColor,
    /// Project names in the ranked chart
    pub name_text_color: HexColor,
    pub axis_color: HexColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            track_color: HexColor(0x1e, 0x29, 0x3b),
            bar_color: HexColor(0x3b, 0x82, 0xf6),
            done_color: HexColor(0x10, 0xb9, 0x81),
            received_color: HexColor(0x3b, 0x82, 0xf6),
            value_text_color: HexColor(0x94, 0xa3, 0xb8),
            axis_text_color: HexColor(0x64, 0x74, 0x8b),
            name_text_color: HexColor(0xcb, 0xd5, 0xe1),
            axis_color: HexColor(0x33, 0x41, 0x55),
        }
    }
}

/// Chart layout configuration. All sizes are in SVG user units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub font_family: String,

    pub progress_width: u32,
    pub progress_height: u32,
    pub progress_track_y: i32,
    pub progress_track_height: i32,
    pub progress_label_size: f64,
    /// Labels on the audit progress bars
    pub audit_format: LabelFormat,

    pub column_width: i32,
    pub month_bar_width: i32,
    pub padding_left: i32,
    pub padding_right: i32,
    pub top_padding: i32,
    pub chart_height: i32,
    pub bottom_margin: i32,
    /// Upper bound on month labels under the monthly chart
    pub max_month_labels: usize,
    pub axis_label_size: f64,
    pub month_value_size: f64,
    pub monthly_format: LabelFormat,

    pub row_height: i32,
    pub row_bar_height: i32,
    pub name_width: i32,
    pub bar_max_width: i32,
    pub value_margin: i32,
    pub name_label_size: f64,
    pub ranked_value_size: f64,
    pub ranked_format: LabelFormat,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_string(),
            progress_width: 490,
            progress_height: 40,
            progress_track_y: 15,
            progress_track_height: 20,
            progress_label_size: 12.0,
            audit_format: LabelFormat::default(),
            column_width: 80,
            month_bar_width: 16,
            padding_left: 50,
            padding_right: 30,
            top_padding: 40,
            chart_height: 220,
            bottom_margin: 50,
            max_month_labels: 12,
            axis_label_size: 10.0,
            month_value_size: 9.0,
            monthly_format: LabelFormat::default(),
            row_height: 40,
            row_bar_height: 22,
            name_width: 200,
            bar_max_width: 300,
            value_margin: 80,
            name_label_size: 12.0,
            ranked_value_size: 11.0,
            ranked_format: LabelFormat::default(),
        }
    }
}
