use serde::Serialize;
use tracing::info;

use crate::analysis::{aggregate_by_month, categorize, rank_by_category, total_xp, AuditProgress};
use crate::config::DashboardConfig;
use crate::plotting::{monthly_bar_chart_with, progress_bar_with, ranked_bar_chart_with};
use crate::types::{AuditRatio, Category, MonthBucket, ProjectTotal, Transaction};

/// Ranked projects of one category together with their chart.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub projects: Vec<ProjectTotal>,
    #[serde(skip)]
    pub chart: String,
}

/// Audit ratio text and its two progress bars.
#[derive(Debug, Clone, Serialize)]
pub struct AuditView {
    pub ratio: AuditRatio,
    /// Ratio with two decimals, e.g. "1.25"
    pub ratio_text: String,
    pub progress: AuditProgress,
    pub done_label: String,
    pub received_label: String,
    #[serde(skip)]
    pub done_bar: String,
    #[serde(skip)]
    pub received_bar: String,
}

impl AuditView {
    pub fn build(audit: &AuditRatio, config: &DashboardConfig) -> Self {
        let progress = AuditProgress::from_ratio(audit);
        let format = config.style.audit_format;
        let done_label = format.apply(audit.total_up);
        let received_label = format.apply(audit.total_down);

        let done_bar = progress_bar_with(
            progress.done_percent,
            &done_label,
            config.theme.done_color,
            &config.theme,
            &config.style,
        );
        let received_bar = progress_bar_with(
            progress.received_percent,
            &received_label,
            config.theme.received_color,
            &config.theme,
            &config.style,
        );

        Self {
            ratio: *audit,
            ratio_text: format!("{:.2}", audit.ratio),
            progress,
            done_label,
            received_label,
            done_bar,
            received_bar,
        }
    }
}

/// Everything the dashboard shows, computed from one transaction snapshot.
///
/// Built fresh on every call; nothing is cached or updated in place.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub total_xp: i64,
    pub months: Vec<MonthBucket>,
    #[serde(skip)]
    pub xp_chart: String,
    pub categories: Vec<CategoryView>,
    pub audit: Option<AuditView>,
}

impl Dashboard {
    pub fn build(
        transactions: &[Transaction],
        audit: Option<&AuditRatio>,
        config: &DashboardConfig,
    ) -> Self {
        let months = aggregate_by_month(transactions);
        let xp_chart = monthly_bar_chart_with(&months, &config.theme, &config.style);

        let categories = rank_by_category(&categorize(transactions))
            .into_iter()
            .map(|(category, projects)| {
                let chart = ranked_bar_chart_with(&projects, &config.theme, &config.style);
                CategoryView {
                    category,
                    projects,
                    chart,
                }
            })
            .collect();

        let dashboard = Self {
            total_xp: total_xp(transactions),
            months,
            xp_chart,
            categories,
            audit: audit.map(|a| AuditView::build(a, config)),
        };
        info!(
            transactions = transactions.len(),
            months = dashboard.months.len(),
            total_xp = dashboard.total_xp,
            "built dashboard"
        );
        dashboard
    }

    pub fn category(&self, category: Category) -> Option<&CategoryView> {
        self.categories.iter().find(|view| view.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plotting::{NO_DATA, NO_PROJECTS};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn tx(amount: i64, month: u32, path: &str, name: &str) -> Transaction {
        Transaction::new(
            amount,
            Utc.with_ymd_and_hms(2024, month, 3, 8, 0, 0).unwrap(),
            path,
            Some(name.to_string()),
        )
    }

    #[test]
    fn test_build_empty() {
        let dashboard = Dashboard::build(&[], None, &DashboardConfig::default());
        assert_eq!(dashboard.total_xp, 0);
        assert!(dashboard.months.is_empty());
        assert_eq!(dashboard.xp_chart, NO_DATA);
        assert_eq!(dashboard.categories.len(), 3);
        assert!(dashboard.categories.iter().all(|c| c.chart == NO_PROJECTS));
        assert!(dashboard.audit.is_none());
    }

    #[test]
    fn test_build_with_data() {
        let txs = vec![
            tx(500, 1, "/bahrain/bh-piscine/quest-01", "quest-01"),
            tx(9000, 4, "/bahrain/bh-module/go-reloaded", "go-reloaded"),
            tx(300, 2, "/bahrain/bh-module/piscine-js/quest-02", "quest-02"),
        ];
        let audit = AuditRatio {
            ratio: 1.256,
            total_up: 1500.0,
            total_down: 1200.0,
        };
        let dashboard = Dashboard::build(&txs, Some(&audit), &DashboardConfig::default());

        assert_eq!(dashboard.total_xp, 9800);
        assert_eq!(dashboard.months.len(), 4);
        assert!(dashboard.xp_chart.contains("<svg"));

        let module = dashboard.category(Category::Module).unwrap();
        assert_eq!(module.projects, vec![ProjectTotal::new("go-reloaded", 9000)]);
        let js = dashboard.category(Category::PiscineJs).unwrap();
        assert_eq!(js.projects, vec![ProjectTotal::new("quest-02", 300)]);

        let audit = dashboard.audit.unwrap();
        assert_eq!(audit.ratio_text, "1.26");
        assert_eq!(audit.done_label, "2 KB");
        assert_eq!(audit.received_label, "1 KB");
        assert_eq!(audit.progress.done_percent, 100.0);
        assert_eq!(audit.progress.received_percent, 80.0);
        assert!(audit.done_bar.contains("2 KB"));
    }
}
