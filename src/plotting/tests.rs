use super::layout::Rect;
use super::*;
use crate::types::{MonthBucket, MonthKey, ProjectTotal};
use pretty_assertions::assert_eq;

fn bucket(year: i32, month: u32, xp: i64) -> MonthBucket {
    MonthBucket::new(MonthKey::new(year, month).unwrap(), xp)
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn test_progress_layout_clamps() {
    let style = ChartStyle::default();
    assert_eq!(
        ProgressLayout::compute(150.0, &style),
        ProgressLayout::compute(100.0, &style)
    );
    assert_eq!(
        ProgressLayout::compute(-20.0, &style),
        ProgressLayout::compute(0.0, &style)
    );
    assert_eq!(ProgressLayout::compute(f64::NAN, &style).percent, 0.0);
}

#[test]
fn test_progress_layout_geometry() {
    let style = ChartStyle::default();
    let half = ProgressLayout::compute(50.0, &style);
    assert_eq!(half.track, Rect::new(0, 15, 490, 20));
    assert_eq!(half.filled, Rect::new(0, 15, 245, 20));
    assert_eq!(half.label_x, 480);

    assert_eq!(ProgressLayout::compute(0.0, &style).filled.width, 0);
    assert_eq!(ProgressLayout::compute(100.0, &style).filled.width, 490);
}

#[test]
fn test_progress_bar_clamped_render() {
    let color = HexColor(0x10, 0xb9, 0x81);
    assert_eq!(progress_bar(150.0, "2 KB", color), progress_bar(100.0, "2 KB", color));
    assert_eq!(progress_bar(-20.0, "0 Bytes", color), progress_bar(0.0, "0 Bytes", color));
}

#[test]
fn test_progress_bar_markup() {
    let svg = progress_bar(40.0, "1.2 MB", HexColor(0x3b, 0x82, 0xf6));
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));
    assert!(svg.contains("viewBox"));
    assert_eq!(count(&svg, "<rect"), 2);
    assert!(svg.contains("1.2 MB"));
    assert!(svg.contains(r#"font-size="12""#));
}

#[test]
fn test_monthly_layout() {
    let style = ChartStyle::default();
    let buckets = vec![bucket(2024, 1, 100), bucket(2024, 2, 0), bucket(2024, 3, 50)];
    let layout = MonthlyLayout::compute(&buckets, &style);

    assert_eq!(layout.width, 50 + 3 * 80 + 30);
    assert_eq!(layout.height, 40 + 220 + 50);
    assert_eq!(layout.max_xp, 100);
    assert_eq!(layout.baseline, (50, 290, 260));

    let heights: Vec<i32> = layout.columns.iter().map(|c| c.bar.height).collect();
    assert_eq!(heights, vec![220, 0, 110]);
    let centers: Vec<i32> = layout.columns.iter().map(|c| c.center_x).collect();
    assert_eq!(centers, vec![50, 130, 210]);

    assert_eq!(layout.columns[0].bar.y, 40);
    assert!(layout.columns[1].value_label.is_none());
    assert_eq!(layout.columns[2].value_label.as_ref().unwrap().text, "50 Bytes");
    assert_eq!(layout.columns[0].axis_label.as_ref().unwrap().text, "Jan 24");
}

#[test]
fn test_monthly_layout_zero_max() {
    let style = ChartStyle::default();
    let buckets = vec![bucket(2024, 1, 0), bucket(2024, 2, 0)];
    let layout = MonthlyLayout::compute(&buckets, &style);
    assert_eq!(layout.max_xp, 0);
    assert!(layout.columns.iter().all(|c| c.bar.height == 0));
    assert!(layout.columns.iter().all(|c| c.value_label.is_none()));
}

#[test]
fn test_monthly_layout_labels_first_and_last() {
    let style = ChartStyle::default();
    let mut key = MonthKey::new(2021, 1).unwrap();
    let mut buckets = Vec::new();
    for i in 0..30 {
        buckets.push(MonthBucket::new(key, i));
        key = key.succ();
    }
    let layout = MonthlyLayout::compute(&buckets, &style);
    let labelled: Vec<usize> = layout
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.axis_label.is_some())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(labelled.first(), Some(&0));
    assert_eq!(labelled.last(), Some(&29));
    assert!(labelled.len() <= style.max_month_labels);
}

#[test]
fn test_monthly_chart_markup() {
    let buckets = vec![bucket(2024, 1, 100), bucket(2024, 2, 0), bucket(2024, 3, 50)];
    let svg = monthly_bar_chart(&buckets);
    assert!(svg.contains("<svg"));
    assert_eq!(count(&svg, "<rect"), 3);
    // Three month labels plus two value labels.
    assert_eq!(count(&svg, "<text"), 5);
    assert!(svg.contains("Feb 24"));
    assert_eq!(svg, monthly_bar_chart(&buckets));
}

#[test]
fn test_empty_charts_placeholder() {
    assert_eq!(monthly_bar_chart(&[]), NO_DATA);
    assert_eq!(ranked_bar_chart(&[]), NO_PROJECTS);
    assert!(!NO_DATA.is_empty());
    assert!(!NO_PROJECTS.is_empty());
}

#[test]
fn test_ranked_layout() {
    let style = ChartStyle::default();
    let totals = vec![ProjectTotal::new("A", 10), ProjectTotal::new("B", 5)];
    let layout = RankedLayout::compute(&totals, &style);

    assert_eq!(layout.width, 580);
    assert_eq!(layout.height, 2 * 40 + 10);
    assert_eq!(layout.rows[0].bar, Rect::new(200, 13, 300, 22));
    assert_eq!(layout.rows[1].bar, Rect::new(200, 53, 150, 22));
    assert_eq!(layout.rows[1].name.text, "B");
    assert_eq!(layout.rows[1].name.x, 190);
    assert_eq!(layout.rows[1].value.x, 200 + 150 + 8);
    assert_eq!(layout.rows[0].value.text, "10 Bytes");
}

#[test]
fn test_ranked_layout_zero_max() {
    let style = ChartStyle::default();
    let totals = vec![ProjectTotal::new("A", 0), ProjectTotal::new("B", 0)];
    let layout = RankedLayout::compute(&totals, &style);
    assert!(layout.rows.iter().all(|r| r.bar.width == 0));
}

#[test]
fn test_ranked_chart_markup() {
    let totals = vec![
        ProjectTotal::new("go-reloaded", 9000),
        ProjectTotal::new("ascii-art", 4500),
    ];
    let svg = ranked_bar_chart(&totals);
    assert_eq!(count(&svg, "<rect"), 2);
    assert_eq!(count(&svg, "<text"), 4);
    assert!(svg.contains("go-reloaded"));
    assert!(svg.contains("9 KB"));
}

#[test]
fn test_custom_style_formats() {
    let style = ChartStyle {
        ranked_format: crate::utils::LabelFormat::Integer,
        ..ChartStyle::default()
    };
    let layout = RankedLayout::compute(&[ProjectTotal::new("A", 12345)], &style);
    assert_eq!(layout.rows[0].value.text, "12,345");
}

#[test]
fn test_chart_font_sizes_match_style() {
    let buckets = vec![bucket(2024, 1, 100), bucket(2024, 2, 50)];
    let monthly = monthly_bar_chart(&buckets);
    assert!(monthly.contains(r#"font-size="10""#));
    assert!(monthly.contains(r#"font-size="9""#));

    let ranked = ranked_bar_chart(&[ProjectTotal::new("A", 10)]);
    assert!(ranked.contains(r#"font-size="12""#));
    assert!(ranked.contains(r#"font-size="11""#));

    let style = ChartStyle {
        progress_label_size: 14.0,
        ..ChartStyle::default()
    };
    let svg = progress_bar_with(50.0, "1 KB", HexColor(0, 0, 0), &ChartTheme::default(), &style);
    assert!(svg.contains(r#"font-size="14""#));
}
