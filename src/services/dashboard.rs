use chrono::NaiveDateTime;

use crate::derivation::{aggregate_metrics, partition_by_urgency};
use crate::dto::client::ClientSummary;
use crate::dto::dashboard::{DASHBOARD_PREVIEW_LIMIT, DashboardData};
use crate::dto::{Preview, format_currency};
use crate::repository::ClientReader;
use crate::services::ServiceResult;

/// Loads metrics and urgency panels for the dashboard.
pub fn load_dashboard<R>(repo: &R, now: NaiveDateTime) -> ServiceResult<DashboardData>
where
    R: ClientReader + ?Sized,
{
    let snapshot = repo.list_clients().map_err(|err| {
        log::error!("Failed to load clients for dashboard: {err}");
        err
    })?;

    let metrics = aggregate_metrics(&snapshot);
    let partition = partition_by_urgency(&snapshot, now);
    let summarize = |client| ClientSummary::new(&client, now);

    log::debug!(
        "Dashboard: {} clients, {} overdue, {} contacts and {} commissions due soon",
        metrics.total_clients,
        partition.overdue.len(),
        partition.due_soon_contacts.len(),
        partition.due_soon_commissions.len()
    );

    Ok(DashboardData {
        total_revenue: format_currency(metrics.total_revenue),
        projected_revenue: format_currency(metrics.projected_revenue),
        metrics,
        overdue: Preview::new(partition.overdue, DASHBOARD_PREVIEW_LIMIT).map(summarize),
        due_soon_contacts: Preview::new(partition.due_soon_contacts, DASHBOARD_PREVIEW_LIMIT)
            .map(summarize),
        due_soon_commissions: Preview::new(
            partition.due_soon_commissions,
            DASHBOARD_PREVIEW_LIMIT,
        )
        .map(summarize),
        recent: snapshot
            .iter()
            .take(DASHBOARD_PREVIEW_LIMIT)
            .map(|client| ClientSummary::new(client, now))
            .collect(),
    })
}
