pub mod lookup;
pub mod mock;
pub mod mock_store;
pub mod schedule;
pub mod stats;
pub mod store;

use std::sync::Arc;

use chrono::{DateTime, Local};
use eyre::Result;
use log::error;
use model::{
    member::Member,
    stats::{DashboardStats, PaymentView},
};
use store::{RecordStore, Snapshot};

pub use mock_store::MockStore;
pub use stats::RECENT_LIMIT;

/// Read facade the screens consume. Every call loads a fresh snapshot and
/// recomputes; fetch failures are logged and degrade to empty collections
/// here, at the UI boundary, and nowhere below.
#[derive(Clone)]
pub struct Dashboard {
    store: Arc<dyn RecordStore>,
}

impl Dashboard {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Dashboard { store }
    }

    pub async fn snapshot(&self) -> Snapshot {
        Snapshot {
            members: or_empty(self.store.members().await, "members"),
            trainers: or_empty(self.store.trainers().await, "trainers"),
            plans: or_empty(self.store.plans().await, "plans"),
            packages: or_empty(self.store.packages().await, "packages"),
            registrations: or_empty(self.store.registrations().await, "registrations"),
            payments: or_empty(self.store.payments().await, "payments"),
        }
    }

    pub async fn stats(&self, now: DateTime<Local>) -> DashboardStats {
        stats::compute_stats(&self.snapshot().await, now)
    }

    pub async fn recent_payments(&self, limit: usize) -> Vec<PaymentView> {
        stats::recent_payments(&self.snapshot().await, limit)
    }

    pub async fn recent_members(&self, limit: usize) -> Vec<Member> {
        let snapshot = self.snapshot().await;
        stats::recent_members(&snapshot.members, limit)
    }
}

fn or_empty<T>(rows: Result<Vec<T>>, table: &str) -> Vec<T> {
    match rows {
        Ok(rows) => rows,
        Err(err) => {
            error!("Failed to load {}: {:#}", table, err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone as _;
    use eyre::bail;
    use model::{
        package::Package, payment::Payment, plan::Plan, registration::Registration,
        trainer::Trainer,
    };

    struct BrokenStore;

    #[async_trait]
    impl RecordStore for BrokenStore {
        async fn members(&self) -> Result<Vec<Member>> {
            bail!("connection reset")
        }

        async fn trainers(&self) -> Result<Vec<Trainer>> {
            bail!("connection reset")
        }

        async fn plans(&self) -> Result<Vec<Plan>> {
            bail!("connection reset")
        }

        async fn packages(&self) -> Result<Vec<Package>> {
            bail!("connection reset")
        }

        async fn registrations(&self) -> Result<Vec<Registration>> {
            bail!("connection reset")
        }

        async fn payments(&self) -> Result<Vec<Payment>> {
            bail!("connection reset")
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_empty() {
        let dashboard = Dashboard::new(Arc::new(BrokenStore));
        let snapshot = dashboard.snapshot().await;
        assert!(snapshot.members.is_empty());
        assert!(snapshot.payments.is_empty());

        let now = Local
            .with_ymd_and_hms(2023, 6, 15, 12, 0, 0)
            .single()
            .unwrap();
        let stats = dashboard.stats(now).await;
        assert_eq!(stats.total_members, 0);
        assert!(stats.revenue_this_month.is_zero());
        assert!(dashboard.recent_payments(RECENT_LIMIT).await.is_empty());
        assert!(dashboard.recent_members(RECENT_LIMIT).await.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_dashboard_reads() {
        let dashboard = Dashboard::new(Arc::new(MockStore::seeded()));
        let now = Local
            .with_ymd_and_hms(2023, 6, 15, 12, 0, 0)
            .single()
            .unwrap();
        let stats = dashboard.stats(now).await;
        assert_eq!(stats.total_members, 5);
        assert_eq!(stats.active_registrations, 5);

        let payments = dashboard.recent_payments(RECENT_LIMIT).await;
        assert_eq!(payments.len(), 5);
        let members = dashboard.recent_members(2).await;
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].full_name(), "Raj Patel");
    }
}
