use serde::Serialize;

use crate::types::AuditRatio;

/// Fill percentages for the "done" and "received" audit progress bars.
///
/// Both totals are scaled against the larger of the two so the bigger one
/// always renders as a full bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AuditProgress {
    pub done_percent: f64,
    pub received_percent: f64,
}

impl AuditProgress {
    pub fn from_ratio(audit: &AuditRatio) -> Self {
        let denominator = audit.total_up.max(audit.total_down).max(1.0);
        Self {
            done_percent: audit.total_up / denominator * 100.0,
            received_percent: audit.total_down / denominator * 100.0,
        }
    }
}
