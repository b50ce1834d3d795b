//! Dashboard P&L summary state.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::types::PnlSummary;

/// Aggregate totals shown on the dashboard, either all-time or for the
/// currently applied date range.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub summary: Option<PnlSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn loaded(&mut self, summary: PnlSummary) {
        self.summary = Some(summary);
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Whether the current summary came from a range query.
    pub fn is_ranged(&self) -> bool {
        self.summary.as_ref().is_some_and(|s| s.start_date.is_some())
    }
}
