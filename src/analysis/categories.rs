//! Path based categorization.
//!
//! The three categories overlap on purpose. Each is an independent predicate
//! over the transaction path:
//!
//! - `bh-piscine`: the path contains `bh-piscine`.
//! - `piscine-js`: the path contains `piscine-js`, even when it sits under
//!   `bh-module`.
//! - `bh-module`: the path contains `bh-module` and contains neither
//!   `piscine-js` nor `checkpoint`. Checkpoints never count towards the module.

use tracing::debug;

use crate::types::{Category, CategoryPartition, Transaction};

pub const PISCINE_PATH: &str = "bh-piscine";
pub const PISCINE_JS_PATH: &str = "piscine-js";
pub const MODULE_PATH: &str = "bh-module";
pub const CHECKPOINT_MARKER: &str = "checkpoint";

/// Whether a transaction with this path belongs to `category`.
pub fn matches(category: Category, path: &str) -> bool {
    match category {
        Category::Piscine => path.contains(PISCINE_PATH),
        Category::PiscineJs => path.contains(PISCINE_JS_PATH),
        Category::Module => {
            path.contains(MODULE_PATH)
                && !path.contains(PISCINE_JS_PATH)
                && !path.contains(CHECKPOINT_MARKER)
        }
    }
}

/// Split transactions into the fixed categories.
///
/// A transaction is copied into every category whose rule it satisfies.
pub fn categorize(transactions: &[Transaction]) -> CategoryPartition {
    let mut partition = CategoryPartition::new();
    for tx in transactions {
        for category in Category::ALL {
            if matches(category, &tx.path) {
                partition.push(category, tx.clone());
            }
        }
    }

    for (category, members) in partition.iter() {
        debug!(%category, members = members.len(), "categorized transactions");
    }
    partition
}
