//! Aggregation of raw XP transactions into the series the charts draw.
//!
//! Every function here is pure: it reads an immutable transaction snapshot and
//! returns freshly built values.

mod audit;
mod categories;
mod monthly;
mod projects;


pub use audit::AuditProgress;
pub use categories::{
    categorize, matches, CHECKPOINT_MARKER, MODULE_PATH, PISCINE_JS_PATH, PISCINE_PATH,
};
pub use monthly::{aggregate_by_month, month_span};
pub use projects::{rank_by_category, rank_by_project};

use crate::types::Transaction;

/// Sum of every transaction amount.
pub fn total_xp(transactions: &[Transaction]) -> i64 {
    transactions.iter().map(|t| t.amount).sum()
}
