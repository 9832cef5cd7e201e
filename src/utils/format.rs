//! Number formatting for chart and progress-bar labels.

use serde::{Deserialize, Serialize};

const MAGNITUDE_BASE: f64 = 1000.0;
const MAGNITUDE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format `value` with a base-1000 unit suffix, e.g. `1500.0` → `"2 KB"` with
/// zero decimals or `"1.5 KB"` with one.
///
/// Zero, negative and non-finite values render as `"0 Bytes"`. Values above
/// the largest unit stay in GB.
pub fn format_magnitude(value: f64, decimals: u32) -> String {
    if !value.is_finite() || value <= 0.0 {
        return format!("0 {}", MAGNITUDE_UNITS[0]);
    }

    let tier = magnitude_tier(value);
    let factor = 10f64.powi(decimals.min(15) as i32);
    let mantissa = value / MAGNITUDE_BASE.powi(tier as i32);
    let rounded = (mantissa * factor).round() / factor;
    format!("{} {}", rounded, MAGNITUDE_UNITS[tier])
}

/// `floor(log(value) / log(1000))`, nudged so exact powers of 1000 land in the
/// higher tier despite floating point error in the logarithms.
fn magnitude_tier(value: f64) -> usize {
    let max_tier = MAGNITUDE_UNITS.len() - 1;
    let estimate = (value.ln() / MAGNITUDE_BASE.ln()).floor();
    let mut tier = estimate.clamp(0.0, max_tier as f64) as usize;

    while tier < max_tier && value >= MAGNITUDE_BASE.powi(tier as i32 + 1) {
        tier += 1;
    }
    while tier > 0 && value < MAGNITUDE_BASE.powi(tier as i32) {
        tier -= 1;
    }
    tier
}

/// Format an integer with thousands separators, e.g. `12345` → `"12,345"`.
///
/// Exact over the whole `i64` range.
pub fn format_integer(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Round a float label and group its thousands; non-finite values print as `"0"`.
fn format_rounded(value: f64) -> String {
    let value = if value.is_finite() { value.round() } else { 0.0 };
    let sign = if value < 0.0 { "-" } else { "" };
    let grouped = format_num::format_num!(",.0f", value.abs());
    format!("{sign}{grouped}")
}

/// Compact K/M label with one decimal, e.g. `1500.0` → `"1.5K"`.
pub fn format_compact(value: f64) -> String {
    if value.abs() >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

/// Selects one of the label formatting policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LabelFormat {
    /// [`format_magnitude`] with the given number of decimals
    Magnitude { decimals: u32 },
    /// Thousands separators after rounding to an integer
    Integer,
    /// [`format_compact`]
    Compact,
}

impl LabelFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            LabelFormat::Magnitude { decimals } => format_magnitude(value, decimals),
            LabelFormat::Integer => format_rounded(value),
            LabelFormat::Compact => format_compact(value),
        }
    }
}

impl Default for LabelFormat {
    fn default() -> Self {
        LabelFormat::Magnitude { decimals: 0 }
    }
}
