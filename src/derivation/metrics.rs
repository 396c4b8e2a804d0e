use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::derivation::parse_amount;
use crate::domain::client::Client;

/// Headline figures shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_clients: usize,
    pub total_revenue: Decimal,
    pub projected_revenue: Decimal,
    pub total_reviews: i64,
}

impl Add for Metrics {
    type Output = Metrics;

    /// Saturates instead of overflowing so legacy rows cannot fail a load.
    fn add(self, rhs: Metrics) -> Metrics {
        Metrics {
            total_clients: self.total_clients.saturating_add(rhs.total_clients),
            total_revenue: self.total_revenue.saturating_add(rhs.total_revenue),
            projected_revenue: self.projected_revenue.saturating_add(rhs.projected_revenue),
            total_reviews: self.total_reviews.saturating_add(rhs.total_reviews),
        }
    }
}

impl Sum for Metrics {
    fn sum<I: Iterator<Item = Metrics>>(iter: I) -> Metrics {
        iter.fold(Metrics::default(), Add::add)
    }
}

impl From<&Client> for Metrics {
    fn from(client: &Client) -> Self {
        Metrics {
            total_clients: 1,
            total_revenue: parse_amount(client.amount_paid_on_call.as_deref()),
            projected_revenue: parse_amount(client.next_month_agreed_payment.as_deref()),
            total_reviews: client.reviews(),
        }
    }
}

/// Totals over the snapshot. Malformed amounts contribute zero.
pub fn aggregate_metrics(records: &[Client]) -> Metrics {
    records.iter().map(Metrics::from).sum()
}
