use std::collections::HashMap;
use tracing::debug;

use crate::types::{MonthBucket, MonthKey, Transaction};

/// First and last calendar month covered by `transactions`.
///
/// Computed from the minimum and maximum timestamps, so the input does not
/// need to be sorted.
pub fn month_span(transactions: &[Transaction]) -> Option<(MonthKey, MonthKey)> {
    let first = transactions.iter().map(|t| t.created_at).min()?;
    let last = transactions.iter().map(|t| t.created_at).max()?;
    Some((MonthKey::from_datetime(&first), MonthKey::from_datetime(&last)))
}

/// Bucket transactions by calendar month, filling months without XP with zero.
///
/// The result runs from the month of the earliest transaction to the month of
/// the latest one, inclusive, with exactly one bucket per month.
pub fn aggregate_by_month(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let Some((first, last)) = month_span(transactions) else {
        return Vec::new();
    };

    let mut totals: HashMap<MonthKey, i64> = HashMap::new();
    for tx in transactions {
        *totals.entry(tx.month()).or_insert(0) += tx.amount;
    }

    let span = first.months_until(last).max(0) as usize + 1;
    let mut buckets = Vec::with_capacity(span);
    let mut cursor = first;
    while cursor <= last {
        let total = totals.get(&cursor).copied().unwrap_or(0);
        buckets.push(MonthBucket::new(cursor, total));
        cursor = cursor.succ();
    }

    debug!(
        transactions = transactions.len(),
        months = buckets.len(),
        "aggregated transactions by month from {first} to {last}"
    );
    buckets
}
