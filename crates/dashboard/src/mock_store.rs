use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use model::{
    member::Member, package::Package, payment::Payment, plan::Plan, registration::Registration,
    trainer::Trainer,
};
use parking_lot::RwLock;

use crate::{mock, store::RecordStore};

#[derive(Default)]
struct Records {
    members: Vec<Member>,
    trainers: Vec<Trainer>,
    plans: Vec<Plan>,
    packages: Vec<Package>,
    registrations: Vec<Registration>,
    payments: Vec<Payment>,
}

/// In-memory record store. Edits from the CRUD screens land here and
/// nowhere else: nothing is written back to remote tables, and the seed
/// state returns on restart.
#[derive(Clone, Default)]
pub struct MockStore {
    records: Arc<RwLock<Records>>,
}

impl MockStore {
    pub fn empty() -> Self {
        MockStore::default()
    }

    pub fn seeded() -> Self {
        let records = Records {
            members: mock::members(),
            trainers: mock::trainers(),
            plans: mock::plans(),
            packages: mock::packages(),
            registrations: mock::registrations(),
            payments: mock::payments(),
        };
        MockStore {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub fn insert_member(&self, member: Member) {
        self.records.write().members.push(member);
    }

    pub fn update_member(&self, member: Member) -> bool {
        let mut records = self.records.write();
        match records.members.iter_mut().find(|row| row.id == member.id) {
            Some(row) => {
                *row = member;
                true
            }
            None => false,
        }
    }

    pub fn delete_member(&self, id: i64) -> bool {
        let mut records = self.records.write();
        let before = records.members.len();
        records.members.retain(|row| row.id != id);
        records.members.len() != before
    }

    pub fn insert_trainer(&self, trainer: Trainer) {
        self.records.write().trainers.push(trainer);
    }

    pub fn update_trainer(&self, trainer: Trainer) -> bool {
        let mut records = self.records.write();
        match records.trainers.iter_mut().find(|row| row.id == trainer.id) {
            Some(row) => {
                *row = trainer;
                true
            }
            None => false,
        }
    }

    pub fn delete_trainer(&self, id: i64) -> bool {
        let mut records = self.records.write();
        let before = records.trainers.len();
        records.trainers.retain(|row| row.id != id);
        records.trainers.len() != before
    }

    pub fn insert_plan(&self, plan: Plan) {
        self.records.write().plans.push(plan);
    }

    pub fn update_plan(&self, plan: Plan) -> bool {
        let mut records = self.records.write();
        match records.plans.iter_mut().find(|row| row.id == plan.id) {
            Some(row) => {
                *row = plan;
                true
            }
            None => false,
        }
    }

    pub fn delete_plan(&self, id: i64) -> bool {
        let mut records = self.records.write();
        let before = records.plans.len();
        records.plans.retain(|row| row.id != id);
        records.plans.len() != before
    }

    pub fn insert_package(&self, package: Package) {
        self.records.write().packages.push(package);
    }

    pub fn update_package(&self, package: Package) -> bool {
        let mut records = self.records.write();
        match records.packages.iter_mut().find(|row| row.id == package.id) {
            Some(row) => {
                *row = package;
                true
            }
            None => false,
        }
    }

    pub fn delete_package(&self, id: i64) -> bool {
        let mut records = self.records.write();
        let before = records.packages.len();
        records.packages.retain(|row| row.id != id);
        records.packages.len() != before
    }

    pub fn insert_registration(&self, registration: Registration) {
        self.records.write().registrations.push(registration);
    }

    pub fn insert_payment(&self, payment: Payment) {
        self.records.write().payments.push(payment);
    }
}

#[async_trait]
impl RecordStore for MockStore {
    async fn members(&self) -> Result<Vec<Member>> {
        Ok(self.records.read().members.clone())
    }

    async fn trainers(&self) -> Result<Vec<Trainer>> {
        Ok(self.records.read().trainers.clone())
    }

    async fn plans(&self) -> Result<Vec<Plan>> {
        Ok(self.records.read().plans.clone())
    }

    async fn packages(&self) -> Result<Vec<Package>> {
        Ok(self.records.read().packages.clone())
    }

    async fn registrations(&self) -> Result<Vec<Registration>> {
        Ok(self.records.read().registrations.clone())
    }

    async fn payments(&self) -> Result<Vec<Payment>> {
        Ok(self.records.read().payments.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use model::decimal::Decimal;

    #[tokio::test]
    async fn test_seeded_rows_visible_through_trait() {
        let store = MockStore::seeded();
        assert_eq!(store.members().await.unwrap().len(), 5);
        assert_eq!(store.trainers().await.unwrap().len(), 4);
        assert_eq!(store.plans().await.unwrap().len(), 4);
        assert_eq!(store.packages().await.unwrap().len(), 4);
        assert_eq!(store.registrations().await.unwrap().len(), 7);
        assert_eq!(store.payments().await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let store = MockStore::empty();
        assert!(store.members().await.unwrap().is_empty());
        assert!(store.payments().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_local_crud() {
        let store = MockStore::seeded();

        let mut plan = Plan {
            id: 10,
            months: 9,
            amount: Decimal::int(800),
        };
        store.insert_plan(plan.clone());
        assert_eq!(store.plans().await.unwrap().len(), 5);

        plan.amount = Decimal::int(900);
        assert!(store.update_plan(plan.clone()));
        let plans = store.plans().await.unwrap();
        let row = plans.iter().find(|row| row.id == 10).unwrap();
        assert_eq!(row.amount, Decimal::int(900));

        assert!(store.delete_plan(10));
        assert!(!store.delete_plan(10));
        assert_eq!(store.plans().await.unwrap().len(), 4);

        plan.id = 999;
        assert!(!store.update_plan(plan));
    }

    #[tokio::test]
    async fn test_member_crud() {
        let store = MockStore::empty();
        let rows = crate::mock::members();
        store.insert_member(rows[0].clone());
        assert_eq!(store.members().await.unwrap().len(), 1);

        let mut edited = rows[0].clone();
        edited.address = "New Address".to_string();
        assert!(store.update_member(edited));
        assert_eq!(
            store.members().await.unwrap()[0].address,
            "New Address"
        );

        assert!(store.delete_member(rows[0].id));
        assert!(store.members().await.unwrap().is_empty());
    }
}
