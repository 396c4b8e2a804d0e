//! DTOs shaped for the dashboard.

use serde::Serialize;

use crate::derivation::Metrics;
use crate::dto::Preview;
use crate::dto::client::ClientSummary;

/// Number of entries shown per dashboard panel.
pub const DASHBOARD_PREVIEW_LIMIT: usize = 5;

/// Data required to render the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub metrics: Metrics,
    pub total_revenue: String,
    pub projected_revenue: String,
    pub overdue: Preview<ClientSummary>,
    pub due_soon_contacts: Preview<ClientSummary>,
    pub due_soon_commissions: Preview<ClientSummary>,
    /// Leading clients of the snapshot.
    pub recent: Vec<ClientSummary>,
}
