use std::collections::HashMap;
use tracing::debug;

use crate::types::{Category, CategoryPartition, ProjectTotal, Transaction};

/// Sum XP per object name and rank the names by XP, highest first.
///
/// Names keep their first-seen order among equal totals, so identical input
/// always yields identical output.
pub fn rank_by_project(transactions: &[Transaction]) -> Vec<ProjectTotal> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<ProjectTotal> = Vec::new();

    for tx in transactions {
        let name = tx.name();
        match index.get(name) {
            Some(&i) => totals[i].xp += tx.amount,
            None => {
                index.insert(name, totals.len());
                totals.push(ProjectTotal::new(name, tx.amount));
            }
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.xp.cmp(&a.xp));

    debug!(
        transactions = transactions.len(),
        projects = totals.len(),
        "ranked projects by xp"
    );
    totals
}

/// Project rankings for every category, in the fixed category order.
pub fn rank_by_category(partition: &CategoryPartition) -> Vec<(Category, Vec<ProjectTotal>)> {
    partition
        .iter()
        .map(|(category, txs)| (category, rank_by_project(txs)))
        .collect()
}
