use async_trait::async_trait;
use eyre::Result;
use model::{
    member::Member, package::Package, payment::Payment, plan::Plan, registration::Registration,
    trainer::Trainer,
};

/// Row storage behind the dashboard: "select all rows" per entity table.
/// Errors stay typed here so callers can tell an empty table from a failed
/// fetch; they are collapsed to empty collections only at the UI boundary.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn members(&self) -> Result<Vec<Member>>;
    async fn trainers(&self) -> Result<Vec<Trainer>>;
    async fn plans(&self) -> Result<Vec<Plan>>;
    async fn packages(&self) -> Result<Vec<Package>>;
    async fn registrations(&self) -> Result<Vec<Registration>>;
    async fn payments(&self) -> Result<Vec<Payment>>;
}

#[async_trait]
impl RecordStore for storage::Storage {
    async fn members(&self) -> Result<Vec<Member>> {
        self.members.find_all().await
    }

    async fn trainers(&self) -> Result<Vec<Trainer>> {
        self.trainers.find_all().await
    }

    async fn plans(&self) -> Result<Vec<Plan>> {
        self.plans.find_all().await
    }

    async fn packages(&self) -> Result<Vec<Package>> {
        self.packages.find_all().await
    }

    async fn registrations(&self) -> Result<Vec<Registration>> {
        self.registrations.find_all().await
    }

    async fn payments(&self) -> Result<Vec<Payment>> {
        self.payments.find_all().await
    }
}

/// One render cycle's view of the record store. Aggregates recompute from
/// a fresh snapshot every time; nothing is cached between reads.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub members: Vec<Member>,
    pub trainers: Vec<Trainer>,
    pub plans: Vec<Plan>,
    pub packages: Vec<Package>,
    pub registrations: Vec<Registration>,
    pub payments: Vec<Payment>,
}
