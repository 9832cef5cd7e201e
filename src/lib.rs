//! # XP Dashboard Library
//!
//! `xpdash` turns the XP transactions of a learning-platform user into the
//! summaries and SVG charts of a personal dashboard.
//!
//! ## Features
//!
//! - Monthly XP time series with empty months filled in
//! - Per-project XP rankings
//! - Overlapping path-based categories (`bh-piscine`, `piscine-js`, `bh-module`)
//! - Progress, monthly and ranked bar charts rendered to standalone SVG
//! - A static HTML page assembling all of the above
//!
//! ## Example
//!
//! ```
//! use xpdash::analysis::{aggregate_by_month, categorize, rank_by_project};
//! use xpdash::plotting::{monthly_bar_chart, ranked_bar_chart};
//! use xpdash::types::Category;
//!
//! let json = r#"[
//!   { "amount": 1200, "createdAt": "2024-01-10T09:00:00Z",
//!     "path": "/bahrain/bh-module/forum", "object": { "name": "forum" } }
//! ]"#;
//! let transactions = xpdash::app::parse_transactions(json).unwrap();
//!
//! let months = aggregate_by_month(&transactions);
//! let xp_svg = monthly_bar_chart(&months);
//! assert!(xp_svg.contains("<svg"));
//!
//! let module = categorize(&transactions);
//! let ranked = rank_by_project(module.get(Category::Module));
//! assert_eq!(ranked[0].name, "forum");
//! let projects_svg = ranked_bar_chart(&ranked);
//! assert!(projects_svg.contains("forum"));
//! ```

pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::Dashboard;
pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use types::{Category, MonthBucket, MonthKey, ProjectTotal, Transaction};
